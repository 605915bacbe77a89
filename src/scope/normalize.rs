use unicode_normalization::UnicodeNormalization;

/// Lowercase `text` and strip accent marks.
///
/// Lowercasing happens first, then canonical decomposition (NFD); every
/// combining mark in U+0300..=U+036F is dropped. "ñ" decomposes to
/// "n" + U+0303 and therefore becomes "n". Whitespace is left untouched.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

fn is_combining_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii() {
        assert_eq!(normalize("DISURIA y Polaquiuria"), "disuria y polaquiuria");
    }

    #[test]
    fn strips_acute_accents() {
        assert_eq!(normalize("vómito náusea cólico"), "vomito nausea colico");
    }

    #[test]
    fn enye_becomes_n() {
        assert_eq!(normalize("muñeca"), "muneca");
        assert_eq!(normalize("MIGRAÑA"), "migrana");
    }

    #[test]
    fn diaeresis_stripped() {
        assert_eq!(normalize("pingüino"), "pinguino");
    }

    #[test]
    fn already_decomposed_input() {
        // "a" + combining acute
        assert_eq!(normalize("cai\u{0301}da"), "caida");
    }

    #[test]
    fn whitespace_preserved() {
        assert_eq!(normalize("  dolor\tabdominal \n"), "  dolor\tabdominal \n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn marks_outside_range_are_kept() {
        // U+0483 (combining cyrillic titlo) is outside U+0300..=U+036F
        assert_eq!(normalize("a\u{0483}"), "a\u{0483}");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Fractura de TOBILLO tras caída",
            "Pérdida de conciencia, déficit focal",
            "ESTERNÓN, CLAVÍCULA, HÚMERO, PERONÉ",
            "İstanbul ǅ Ω",
            "",
            "tos seca y sibilancias",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
