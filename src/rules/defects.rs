use crate::rules::{Issue, IssueCategory, Language, Scanner, Severity};

static PRINT_CALL_RE: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"\bprint\s*\(").unwrap());

/// Detects unresolved-work markers (TODO/FIXME) and a small set of risky
/// idioms in Swift sources.
pub struct DefectScanner;

/// True when the line contains a bare `!` that is neither the `!=` operator
/// nor the `?!` token.
fn has_bare_unwrap(line: &str) -> bool {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'!' {
            continue;
        }
        if bytes.get(i + 1) == Some(&b'=') {
            continue;
        }
        if i > 0 && bytes[i - 1] == b'?' {
            continue;
        }
        return true;
    }
    false
}

impl Scanner for DefectScanner {
    fn scan(&self, language: Language, source: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        if source.trim().is_empty() {
            return issues;
        }
        let lines: Vec<&str> = source.lines().collect();

        // Marker checks apply to both supported languages and report every
        // occurrence, one pass per marker.
        if matches!(language, Language::Swift | Language::JavaScript) {
            for (idx, line) in lines.iter().enumerate() {
                if line.contains("TODO") {
                    issues.push(Issue::new(
                        "TODO comment found: unresolved work item",
                        Severity::Medium,
                        Some(idx + 1),
                        IssueCategory::Bug,
                    ));
                }
            }
            for (idx, line) in lines.iter().enumerate() {
                if line.contains("FIXME") {
                    issues.push(Issue::new(
                        "FIXME comment found: known problem left in place",
                        Severity::Medium,
                        Some(idx + 1),
                        IssueCategory::Bug,
                    ));
                }
            }
        }

        if language == Language::Swift {
            // Unlike the marker passes, these two report the first match
            // only and then stop. Keep them as find-first, not filters.
            if let Some(idx) = lines.iter().position(|l| PRINT_CALL_RE.is_match(l)) {
                issues.push(Issue::new(
                    "Debug print statements found: remove before release",
                    Severity::Low,
                    Some(idx + 1),
                    IssueCategory::Bug,
                ));
            }
            if let Some(idx) = lines.iter().position(|l| has_bare_unwrap(l)) {
                issues.push(Issue::new(
                    "Force unwrapping detected: prefer optional binding (if let / guard let)",
                    Severity::Medium,
                    Some(idx + 1),
                    IssueCategory::Bug,
                ));
            }
        }

        issues
    }
}
