//! Entry points for the host application.
//!
//! Two commands:
//! - `check_scope`: classify a motivo/examen pair, with matched terms
//! - `save_diagnosis`: validate a preliminary-diagnosis draft into a block
//!
//! Errors are flattened to strings for the caller's UI.

use serde::{Deserialize, Serialize};

use crate::config::EDIT_REJECTION_MESSAGE;
use crate::diagnosis::{self, DiagnosisBlock, DiagnosisDraft};
use crate::scope::{self, ScopeVerdict};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScopeCheckRequest {
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default)]
    pub examen: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScopeCheckResponse {
    pub out_of_domain: bool,
    pub verdict: ScopeVerdict,
    pub red_flags: Vec<String>,
    pub respiratory_evidence: Vec<String>,
    /// Inline message for the editor when the note is out of domain.
    pub message: Option<String>,
}

/// Classifies a note. Never fails for well-formed requests.
pub fn check_scope(request: ScopeCheckRequest) -> Result<ScopeCheckResponse, String> {
    let assessment = scope::assess(request.motivo.as_deref(), request.examen.as_deref());

    tracing::info!(
        out_of_domain = assessment.out_of_domain,
        verdict = ?assessment.verdict,
        "check_scope"
    );

    Ok(ScopeCheckResponse {
        out_of_domain: assessment.out_of_domain,
        verdict: assessment.verdict,
        message: assessment
            .out_of_domain
            .then(|| EDIT_REJECTION_MESSAGE.to_string()),
        red_flags: assessment.red_flags,
        respiratory_evidence: assessment.respiratory_evidence,
    })
}

/// Validates a diagnosis draft. The returned block is for the caller to
/// persist.
pub fn save_diagnosis(draft: DiagnosisDraft) -> Result<DiagnosisBlock, String> {
    let block = diagnosis::confirm_diagnosis(draft).map_err(|e| {
        tracing::warn!("save_diagnosis rejected: {e}");
        e.to_string()
    })?;

    tracing::info!(vitals = !block.signos.is_empty(), "save_diagnosis accepted");
    Ok(block)
}
