//! Fixed clinical vocabulary (Spanish) for the respiratory scope gate.
//!
//! Phrases are written as clinicians type them, accented and unaccented
//! variants both listed. Matching normalizes them, so the duplicates are
//! harmless. Grouping is by comment only.

/// Terms suggesting a presentation outside the respiratory domain.
pub const NON_RESP_RED_FLAGS: &[&str] = &[
    // Gastrointestinal / abdomen
    "abdominal", "abdomen", "dolor abdominal", "distensión abdominal", "distension abdominal",
    "diarrea", "estreñimiento", "estrenimiento", "constipación", "constipacion",
    "vómito", "vomito", "náusea", "nausea", "hematemesis", "melena", "rectorragia",
    "hematoquecia", "hematoquezia", "sangrado rectal", "pirosis", "acidez", "reflujo",
    "dispepsia", "ictericia", "hepatomegalia", "esplenomegalia",
    "cólico", "colico", "cólico biliar", "colico biliar", "apendic", "colecistitis",
    "pancreatitis", "hepatitis", "gastroenteritis", "dolor epigástrico", "dolor hipogástrico",
    "dolor en fosa iliaca", "fosa iliaca derecha", "fosa iliaca izquierda",
    // Genitourinary
    "disuria", "polaquiuria", "urgencia urinaria", "tenesmo vesical",
    "hematuria", "dolor suprapúbico", "dolor pelviano", "cólico renal", "colico renal",
    "litiasis", "pielonefritis", "prostatitis", "secreción uretral", "secrecion uretral",
    "oliguria", "anuria", "incontinencia urinaria",
    // Gynecology / obstetrics
    "metrorragia", "menorragia", "dismenorrea", "amenorrea", "flujo vaginal",
    "secreción vaginal", "secrecion vaginal", "embarazo", "gestante", "puerperio",
    "dolor pélvico", "dolor pelvico", "epi", "enfermedad pélvica inflamatoria",
    "aborto", "amenaza de aborto", "sangrado vaginal",
    // Cardiovascular (non-respiratory)
    "dolor torácico opresivo", "dolor precordial", "opresión torácica", "opresion toracica",
    "palpitaciones", "síncope", "sincope", "lipotimia",
    "edema unilateral", "dolor en pantorrilla", "trombosis", "claudicación", "claudicacion",
    // Neurologic / psychiatric
    "cefalea", "migraña", "mareos", "vértigo", "vertigo",
    "convulsiones", "crisis convulsiva", "pérdida de conciencia", "perdida de conciencia",
    "déficit focal", "deficit focal", "hemiparesia", "parestesias", "ataxia",
    "rigidez de nuca", "fotofobia", "confusión", "confusion", "delirio",
    "ansiedad", "depresión", "depresion", "ideación suicida", "ideacion suicida", "psicosis",
    "agitación", "agitacion",
    // Musculoskeletal / trauma
    "trauma", "politrauma", "accidente", "caída", "caida", "atropello", "aplastamiento",
    "fractura", "fracturado", "fracturarse", "fractura expuesta", "fractura abierta",
    "fractura cerrada", "microfractura", "fisura ósea", "fisura osea",
    "luxación", "luxacion", "subluxación", "subluxacion",
    "esguince", "torsión", "torcedura",
    "contusión", "contusion", "hematoma", "equimosis", "edema localizado",
    "herida", "laceración", "laceracion", "abrasión", "abrasion", "avulsión", "avulsion",
    "dolor óseo", "dolor oseo", "dolor articular", "artralgia", "artritis",
    "ruptura tendinosa", "lesión tendinosa", "lesion tendinosa", "tendinitis", "tenosinovitis",
    "lesión ligamentaria", "lesion ligamentaria", "rotura de ligamento",
    "lesión meniscal", "lesion meniscal",
    "cervicalgia", "lumbalgia", "dorsalgia", "dolor lumbar", "dolor cervical",
    // common bone regions
    "cadera", "pelvis", "sacro", "columna", "columna cervical", "columna dorsal", "columna lumbar",
    "costilla", "esternón", "esternon", "clavícula", "clavicula", "escápula", "escapula",
    "húmero", "humero", "radio", "cúbito", "cubito", "muñeca", "mano", "falange", "dedo",
    "fémur", "femur", "tibia", "peroné", "perone", "tobillo", "pie", "metatarso", "falange del pie",
    // Dermatologic
    "erupción", "exantema", "lesión cutánea", "lesion cutanea",
    "celulitis", "absceso", "furúnculo", "furunculo",
    "prurito", "urticaria", "dermatitis", "quemadura", "quemadura química", "quemadura quimica",
    // Ophthalmology / dental
    "dolor ocular", "ojo rojo", "visión borrosa", "vision borrosa", "hiperemia conjuntival",
    "odontalgia", "dolor dental", "gingivorragia",
    // Endocrine / metabolic / toxic
    "hipoglucemia", "hiperglucemia", "cetoacidosis", "polidipsia", "poliuria",
    "pérdida de peso", "perdida de peso", "ganancia de peso",
    "intoxicación", "intoxicacion", "ingesta de tóxicos", "ingesta de toxicos",
    "exposición química", "exposicion quimica", "sobredosis", "envenenamiento",
];

/// Terms giving positive respiratory evidence; any hit overrides red flags.
pub const RESP_WHITELIST: &[&str] = &[
    "tos", "expectoracion", "disnea", "sibilancias", "roncus", "sibilante", "sibilancia",
    "faringitis", "rinorrea", "odinofagia", "laringitis", "bronquitis", "asma",
    "sibilancias difusas", "sibilancias bilaterales", "broncoespasmo",
];
