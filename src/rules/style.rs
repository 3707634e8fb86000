use crate::rules::{Issue, IssueCategory, Language, Scanner, Severity};

const MAX_LINE_LENGTH: usize = 120;

/// Detects overlong lines and missing documentation markers. Swift only.
pub struct StyleScanner;

impl Scanner for StyleScanner {
    fn scan(&self, language: Language, source: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        if language != Language::Swift || source.trim().is_empty() {
            return issues;
        }

        for (idx, line) in source.lines().enumerate() {
            // Tabs count as single characters; no expansion.
            let count = line.chars().count();
            if count > MAX_LINE_LENGTH {
                issues.push(Issue::new(
                    format!(
                        "Line {} is too long ({} characters). Maximum allowed is {} characters.",
                        idx + 1,
                        count,
                        MAX_LINE_LENGTH
                    ),
                    Severity::Low,
                    Some(idx + 1),
                    IssueCategory::Style,
                ));
            }
        }

        // Text-wide flag, at most one issue no matter how many functions
        // are undocumented.
        if source.contains("func ") && !source.contains("///") {
            issues.push(Issue::new(
                "Missing documentation comments for functions",
                Severity::Low,
                None,
                IssueCategory::Style,
            ));
        }

        issues
    }
}
