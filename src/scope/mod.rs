//! Respiratory domain-scope classifier.
//!
//! Decides whether a chief complaint (motivo) plus physical exam (examen)
//! describe a respiratory case. A note is out of domain when it mentions a
//! non-respiratory red flag and carries no respiratory evidence at all.
//!
//! Pipeline: `normalize` -> compiled term matchers (`patterns`) -> `classify`.

pub mod classify;
pub mod normalize;
pub mod patterns;
pub mod types;
pub mod vocabulary;

pub use classify::{assess, is_out_of_domain};
pub use normalize::normalize;
pub use patterns::{
    compile_patterns, matches_any, matching_terms, red_flag_matchers, respiratory_matchers,
};
pub use types::{CompiledMatcher, ScopeAssessment, ScopeError, ScopeVerdict};
