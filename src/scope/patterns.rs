use std::sync::LazyLock;

use regex::RegexBuilder;

use super::normalize::normalize;
use super::types::{CompiledMatcher, ScopeError};
use super::vocabulary::{NON_RESP_RED_FLAGS, RESP_WHITELIST};

/// Red-flag matchers, compiled on first use and shared process-wide.
static RED_FLAG_MATCHERS: LazyLock<Vec<CompiledMatcher>> = LazyLock::new(|| {
    let matchers = compile_patterns(NON_RESP_RED_FLAGS).expect("Invalid red-flag vocabulary");
    tracing::debug!(count = matchers.len(), "Compiled red-flag matchers");
    matchers
});

/// Respiratory whitelist matchers, compiled on first use.
static RESPIRATORY_MATCHERS: LazyLock<Vec<CompiledMatcher>> = LazyLock::new(|| {
    let matchers = compile_patterns(RESP_WHITELIST).expect("Invalid respiratory vocabulary");
    tracing::debug!(count = matchers.len(), "Compiled respiratory matchers");
    matchers
});

pub fn red_flag_matchers() -> &'static [CompiledMatcher] {
    &RED_FLAG_MATCHERS
}

pub fn respiratory_matchers() -> &'static [CompiledMatcher] {
    &RESPIRATORY_MATCHERS
}

/// Compile literal phrases into word-bounded matchers, one per phrase, in
/// input order.
///
/// Each phrase is normalized and trimmed, regex-escaped, and every
/// whitespace run becomes `\s+`. Boundaries are ASCII word boundaries so an
/// unstripped non-ASCII letter next to a term counts as a separator.
pub fn compile_patterns(terms: &[&str]) -> Result<Vec<CompiledMatcher>, ScopeError> {
    terms.iter().map(|raw| compile_term(raw)).collect()
}

fn compile_term(raw: &str) -> Result<CompiledMatcher, ScopeError> {
    let term = normalize(raw).trim().to_string();
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let pattern = format!(r"(?-u:\b){body}(?-u:\b)");

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ScopeError::PatternCompilation(format!("{term:?}: {e}")))?;

    Ok(CompiledMatcher { term, regex })
}

/// True when any matcher hits `text`. Normalizes once and stops at the
/// first hit.
pub fn matches_any(text: &str, matchers: &[CompiledMatcher]) -> bool {
    let normalized = normalize(text);
    matchers.iter().any(|m| m.is_match(&normalized))
}

/// Every distinct normalized term that hits `text`, in matcher order.
pub fn matching_terms<'a>(text: &str, matchers: &'a [CompiledMatcher]) -> Vec<&'a str> {
    let normalized = normalize(text);
    let mut found: Vec<&'a str> = Vec::new();
    for m in matchers {
        if m.is_match(&normalized) && !found.contains(&m.term.as_str()) {
            found.push(&m.term);
        }
    }
    found
}
