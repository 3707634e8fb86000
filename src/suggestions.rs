use crate::rules::AnalysisType;

/// Fixed remediation advice per analysis category.
///
/// Deliberately a static table: the advice is boilerplate guidance keyed on
/// the category alone and never inspects the scanned code or the issues.
pub fn suggestions_for(analysis: AnalysisType) -> Vec<String> {
    let entries: &[&str] = match analysis {
        AnalysisType::Bugs => &[
            "Resolve outstanding TODO and FIXME markers before shipping",
            "Replace force unwrapping with optional binding (if let / guard let)",
            "Remove debug print statements from production code",
        ],
        AnalysisType::Performance => &[
            "Profile first: optimize only code paths that measurements show are hot",
            "Cache expensive computed values instead of recomputing them per call",
        ],
        AnalysisType::Security => &[
            "Store credentials in the Keychain, never in UserDefaults",
            "Validate and canonicalize every file path built from external input",
            "Avoid eval() and direct innerHTML assignment in web code",
        ],
        AnalysisType::Style => &[
            "Keep lines at or under 120 characters",
            "Document functions with /// comments",
        ],
        AnalysisType::Comprehensive => &[
            "Address high severity findings first, then work down the list",
            "Add a regression test for every issue you fix",
            "Re-run the analysis after each round of fixes",
        ],
    };
    entries.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_advice() {
        for analysis in [
            AnalysisType::Bugs,
            AnalysisType::Performance,
            AnalysisType::Security,
            AnalysisType::Style,
            AnalysisType::Comprehensive,
        ] {
            let advice = suggestions_for(analysis);
            assert!(!advice.is_empty(), "no advice for {:?}", analysis);
            assert!(advice.len() <= 3);
        }
    }

    #[test]
    fn test_comprehensive_has_three_entries() {
        assert_eq!(suggestions_for(AnalysisType::Comprehensive).len(), 3);
    }

    #[test]
    fn test_table_is_stable_across_calls() {
        assert_eq!(
            suggestions_for(AnalysisType::Security),
            suggestions_for(AnalysisType::Security)
        );
    }
}
