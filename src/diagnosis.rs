//! Preliminary-diagnosis block gate and the live scope check used while a
//! consultation is being edited.
//!
//! The gate is advisory: a rejection asks the clinician to revise the text,
//! nothing is discarded.

use serde::{Deserialize, Serialize};

use crate::config::{DIAGNOSIS_REJECTION_MESSAGE, EDIT_REJECTION_MESSAGE};
use crate::scope::{is_out_of_domain, ScopeError};

/// Vital signs attached to a diagnosis block. Units: °C, bpm, rpm, m, kg.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct VitalSigns {
    pub temperatura: Option<f64>,
    pub f_card: Option<f64>,
    pub f_resp: Option<f64>,
    pub talla: Option<f64>,
    pub peso: Option<f64>,
}

impl VitalSigns {
    /// Drop NaN and infinite readings.
    pub fn finite_only(self) -> Self {
        let keep = |v: Option<f64>| v.filter(|x| x.is_finite());
        Self {
            temperatura: keep(self.temperatura),
            f_card: keep(self.f_card),
            f_resp: keep(self.f_resp),
            talla: keep(self.talla),
            peso: keep(self.peso),
        }
    }

    pub fn is_empty(&self) -> bool {
        [self.temperatura, self.f_card, self.f_resp, self.talla, self.peso]
            .iter()
            .all(Option::is_none)
    }
}

/// What the clinician submitted from the diagnosis panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisDraft {
    #[serde(default)]
    pub motivo: String,
    #[serde(default)]
    pub examen: String,
    #[serde(default)]
    pub signos: VitalSigns,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosisFlags {
    pub out_of_domain: bool,
}

/// An accepted preliminary-diagnosis block, ready for the caller to store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisBlock {
    pub motivo: String,
    pub examen: String,
    pub signos: VitalSigns,
    pub flags: DiagnosisFlags,
}

/// Validate a draft and turn it into a block.
///
/// Both texts are trimmed and required. A note the scope classifier marks
/// as out of domain is refused with the user-facing rejection message.
pub fn confirm_diagnosis(draft: DiagnosisDraft) -> Result<DiagnosisBlock, ScopeError> {
    let motivo = draft.motivo.trim();
    let examen = draft.examen.trim();

    if motivo.is_empty() {
        return Err(ScopeError::MissingField("motivo"));
    }
    if examen.is_empty() {
        return Err(ScopeError::MissingField("examen"));
    }

    if is_out_of_domain(Some(motivo), Some(examen)) {
        tracing::info!("Diagnosis block refused: note outside respiratory scope");
        return Err(ScopeError::OutOfDomain {
            message: DIAGNOSIS_REJECTION_MESSAGE.to_string(),
        });
    }

    Ok(DiagnosisBlock {
        motivo: motivo.to_string(),
        examen: examen.to_string(),
        signos: draft.signos.finite_only(),
        flags: DiagnosisFlags { out_of_domain: false },
    })
}

/// Which text field of a consultation is being edited.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoteField {
    Motivo,
    Examen,
}

/// Motivo/examen of a consultation under edit, re-checked on every change.
#[derive(Debug, Clone, Default)]
pub struct ConsultationDraft {
    motivo: String,
    examen: String,
}

impl ConsultationDraft {
    pub fn new(motivo: impl Into<String>, examen: impl Into<String>) -> Self {
        Self {
            motivo: motivo.into(),
            examen: examen.into(),
        }
    }

    pub fn motivo(&self) -> &str {
        &self.motivo
    }

    pub fn examen(&self) -> &str {
        &self.examen
    }

    /// Replace one field and return the inline message to show, if any.
    pub fn update_field(&mut self, field: NoteField, value: impl Into<String>) -> Option<&'static str> {
        match field {
            NoteField::Motivo => self.motivo = value.into(),
            NoteField::Examen => self.examen = value.into(),
        }
        self.scope_message()
    }

    /// The inline rejection message for the current text, if out of domain.
    pub fn scope_message(&self) -> Option<&'static str> {
        (!self.can_save()).then_some(EDIT_REJECTION_MESSAGE)
    }

    /// Submit-time check; same decision as the live check.
    pub fn can_save(&self) -> bool {
        !is_out_of_domain(Some(self.motivo.as_str()), Some(self.examen.as_str()))
    }
}
