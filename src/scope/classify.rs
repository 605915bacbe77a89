use super::patterns::{matches_any, matching_terms, red_flag_matchers, respiratory_matchers};
use super::types::{ScopeAssessment, ScopeVerdict};

/// Join both fields into the single blob the policy runs on. Missing
/// fields are empty, so a red flag in one field can be rescued by
/// respiratory evidence in the other.
fn note_text(motivo: Option<&str>, examen: Option<&str>) -> String {
    format!("{} {}", motivo.unwrap_or(""), examen.unwrap_or(""))
}

/// True when the note mentions a non-respiratory red flag and contains no
/// respiratory term. Total over all inputs.
pub fn is_out_of_domain(motivo: Option<&str>, examen: Option<&str>) -> bool {
    let text = note_text(motivo, examen);
    let has_red_flag = matches_any(&text, red_flag_matchers());
    let has_respiratory = matches_any(&text, respiratory_matchers());
    has_red_flag && !has_respiratory
}

/// Same decision as [`is_out_of_domain`], with the matched terms attached.
pub fn assess(motivo: Option<&str>, examen: Option<&str>) -> ScopeAssessment {
    let text = note_text(motivo, examen);
    let red_flags = matching_terms(&text, red_flag_matchers());
    let respiratory_evidence = matching_terms(&text, respiratory_matchers());

    let verdict = ScopeVerdict::from_hits(!red_flags.is_empty(), !respiratory_evidence.is_empty());

    tracing::debug!(
        verdict = ?verdict,
        red_flags = red_flags.len(),
        respiratory = respiratory_evidence.len(),
        "Scope assessed"
    );

    ScopeAssessment {
        out_of_domain: verdict.is_out_of_domain(),
        verdict,
        red_flags: red_flags.into_iter().map(String::from).collect(),
        respiratory_evidence: respiratory_evidence.into_iter().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::vocabulary::{NON_RESP_RED_FLAGS, RESP_WHITELIST};

    fn ood(motivo: &str, examen: &str) -> bool {
        is_out_of_domain(Some(motivo), Some(examen))
    }

    // =================================================================
    // SCENARIOS
    // =================================================================

    #[test]
    fn abdominal_pain_is_rejected() {
        assert!(ood("dolor abdominal intenso", "abdomen blando"));
    }

    #[test]
    fn pure_respiratory_is_accepted() {
        assert!(!ood("tos con disnea", "sibilancias bilaterales"));
    }

    #[test]
    fn trauma_with_wheeze_is_rescued() {
        assert!(!ood("fractura de tobillo tras caída", "tos seca y sibilancias"));
    }

    #[test]
    fn empty_note_is_in_domain() {
        assert!(!ood("", ""));
        assert!(!is_out_of_domain(None, None));
    }

    #[test]
    fn uppercase_urinary_symptoms_rejected() {
        assert!(ood("Paciente refiere DISURIA y polaquiuria", ""));
    }

    #[test]
    fn headache_without_rescue_rejected() {
        assert!(ood("cefalea leve", "buen estado general"));
    }

    // =================================================================
    // POLICY
    // =================================================================

    #[test]
    fn rescue_works_across_fields() {
        assert!(!ood("lumbalgia", "roncus difusos"));
        assert!(!ood("rinorrea", "herida en mano"));
    }

    #[test]
    fn missing_field_treated_as_empty() {
        assert!(is_out_of_domain(Some("cefalea"), None));
        assert!(is_out_of_domain(None, Some("cefalea")));
        assert!(!is_out_of_domain(None, Some("disnea")));
    }

    #[test]
    fn fields_are_separated_by_a_space() {
        // "dolor" + "abdominal" across fields still reads as a phrase,
        // and neither half glues onto the other.
        let a = assess(Some("dolor"), Some("abdominal"));
        assert!(a.red_flags.contains(&"dolor abdominal".to_string()));
        assert!(!ood("cost", "illa"));
    }

    #[test]
    fn neutral_text_is_in_domain() {
        assert!(!ood("control de rutina", "buen estado general"));
    }

    #[test]
    fn appending_any_whitelist_term_flips_rejection() {
        let rejected = [("cefalea leve", ""), ("dolor abdominal", "abdomen blando"), ("", "fractura de radio")];
        for (motivo, examen) in rejected {
            assert!(ood(motivo, examen));
            for term in RESP_WHITELIST {
                assert!(!ood(&format!("{motivo} {term}"), examen), "{term} in motivo");
                assert!(!ood(motivo, &format!("{examen} {term}")), "{term} in examen");
            }
        }
    }

    #[test]
    fn every_red_flag_alone_is_rejected() {
        for term in NON_RESP_RED_FLAGS {
            assert!(ood(term, ""), "{term} not rejected");
        }
    }

    #[test]
    fn total_over_odd_input() {
        let long = "tos ".repeat(10_000);
        let inputs = ["\u{0}", "((([[[", "\\b", "🫁 disnea", long.as_str(), "ÑÑÑ"];
        for input in inputs {
            let _ = ood(input, input);
        }
    }

    // =================================================================
    // ASSESSMENT
    // =================================================================

    #[test]
    fn assessment_agrees_with_decision() {
        let cases = [
            ("dolor abdominal intenso", "abdomen blando"),
            ("tos con disnea", "sibilancias bilaterales"),
            ("fractura de tobillo tras caída", "tos seca y sibilancias"),
            ("", ""),
            ("cefalea leve", "buen estado general"),
        ];
        for (m, e) in cases {
            assert_eq!(assess(Some(m), Some(e)).out_of_domain, ood(m, e), "{m} / {e}");
        }
    }

    #[test]
    fn assessment_lists_evidence() {
        let a = assess(Some("fractura de tobillo tras caída"), Some("tos seca y sibilancias"));
        assert_eq!(a.verdict, ScopeVerdict::RespiratoryOverride);
        assert!(!a.out_of_domain);
        assert_eq!(a.red_flags, vec!["caida", "fractura", "tobillo"]);
        assert_eq!(a.respiratory_evidence, vec!["tos", "sibilancias"]);
    }

    #[test]
    fn assessment_of_empty_note() {
        let a = assess(None, None);
        assert_eq!(a.verdict, ScopeVerdict::NoRedFlag);
        assert!(a.red_flags.is_empty());
        assert!(a.respiratory_evidence.is_empty());
    }
}
