use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One vocabulary phrase compiled into a word-bounded, whitespace-tolerant
/// regex. Read-only after construction.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    /// The phrase after normalization and trimming.
    pub term: String,
    pub regex: Regex,
}

impl CompiledMatcher {
    /// Test already-normalized text.
    pub fn is_match(&self, normalized: &str) -> bool {
        self.regex.is_match(normalized)
    }
}

/// How the override rule resolved for a note.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScopeVerdict {
    /// No non-respiratory red flag was found.
    NoRedFlag,
    /// A red flag was found and nothing respiratory rescues it.
    RedFlagOnly,
    /// A red flag was found but respiratory evidence is also present.
    RespiratoryOverride,
}

impl ScopeVerdict {
    pub fn from_hits(has_red_flag: bool, has_respiratory: bool) -> Self {
        match (has_red_flag, has_respiratory) {
            (false, _) => ScopeVerdict::NoRedFlag,
            (true, false) => ScopeVerdict::RedFlagOnly,
            (true, true) => ScopeVerdict::RespiratoryOverride,
        }
    }

    pub fn is_out_of_domain(self) -> bool {
        self == ScopeVerdict::RedFlagOnly
    }
}

/// Explanatory result of a scope check. The decision itself is
/// `out_of_domain`; the term lists are for diagnostics only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScopeAssessment {
    pub out_of_domain: bool,
    pub verdict: ScopeVerdict,
    /// Normalized red-flag phrases found in the note, vocabulary order.
    pub red_flags: Vec<String>,
    /// Normalized respiratory phrases found in the note, vocabulary order.
    pub respiratory_evidence: Vec<String>,
}

/// Scope classifier and diagnosis gate errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Pattern compilation failed: {0}")]
    PatternCompilation(String),

    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("{message}")]
    OutOfDomain { message: String },
}
