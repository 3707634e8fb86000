//! Report aggregation: turns scanner output plus suggestion strings into a
//! human-readable summary. Two modes exist, selected by the analysis type:
//! a terse single-category listing and a multi-section markdown report for
//! `comprehensive` runs.

use crate::rules::{AnalysisType, Issue, IssueCategory, Severity};

/// Terse report shows at most this many issues before truncating.
const TERSE_ISSUE_LIMIT: usize = 5;

/// The engine sees one text blob per call and has no real multi-file
/// context, so the comprehensive report's by-file grouping alternates two
/// placeholder names by issue index.
const PLACEHOLDER_FILES: [&str; 2] = ["Sources/Main.swift", "Sources/Helpers.swift"];

/// Renders the report for the given analysis run.
///
/// `language` is a display label only (e.g. "Swift"); `None` omits the
/// language subtitle in the comprehensive mode.
pub fn render(
    issues: &[Issue],
    suggestions: &[String],
    analysis: AnalysisType,
    language: Option<&str>,
) -> String {
    match analysis {
        AnalysisType::Comprehensive => render_comprehensive(issues, suggestions, language),
        _ => render_terse(issues, suggestions, analysis),
    }
}

fn render_terse(issues: &[Issue], suggestions: &[String], analysis: AnalysisType) -> String {
    let mut out = String::new();
    out.push_str(&format!("Analysis: {}\n\n", analysis.as_str()));

    if issues.is_empty() {
        out.push_str("No issues found.\n");
    } else {
        for issue in issues.iter().take(TERSE_ISSUE_LIMIT) {
            out.push_str(&format!(
                "- {} ({})\n",
                issue.description,
                issue.severity.as_str()
            ));
        }
        if issues.len() > TERSE_ISSUE_LIMIT {
            out.push_str(&format!("...and {} more\n", issues.len() - TERSE_ISSUE_LIMIT));
        }
    }

    if !suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for suggestion in suggestions {
            out.push_str(&format!("- {}\n", suggestion));
        }
    }

    out
}

fn render_comprehensive(
    issues: &[Issue],
    suggestions: &[String],
    language: Option<&str>,
) -> String {
    let mut out = String::new();
    out.push_str("# Code Analysis Report\n\n");
    if let Some(language) = language {
        out.push_str(&format!("Language: {}\n\n", language));
    }

    if issues.is_empty() {
        out.push_str("Analysis found no issues.\n");
        return out;
    }

    out.push_str("## Statistics\n\n");
    out.push_str(&format!("Total issues: {}\n\n", issues.len()));
    out.push_str("By severity:\n");
    for severity in [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ] {
        let count = issues.iter().filter(|i| i.severity == severity).count();
        out.push_str(&format!("- {}: {}\n", severity.label(), count));
    }
    out.push_str("\nBy category:\n");
    for category in [
        IssueCategory::Bug,
        IssueCategory::Security,
        IssueCategory::Performance,
        IssueCategory::Style,
    ] {
        let count = issues.iter().filter(|i| i.category == category).count();
        out.push_str(&format!("- {}: {}\n", category.label(), count));
    }

    out.push_str("\n## Issues by File\n");
    for (file_idx, file) in PLACEHOLDER_FILES.iter().enumerate() {
        let in_file: Vec<&Issue> = issues
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx % PLACEHOLDER_FILES.len() == file_idx)
            .map(|(_, issue)| issue)
            .collect();
        if in_file.is_empty() {
            continue;
        }
        out.push_str(&format!("\n### {}\n", file));
        for issue in in_file {
            out.push_str(&format!(
                "- [{}] {}\n",
                issue.severity.label(),
                issue.description
            ));
        }
    }

    out.push_str("\n## Detailed Issues\n");
    for (idx, issue) in issues.iter().enumerate() {
        out.push_str(&format!("\n### Issue {}\n", idx + 1));
        out.push_str(&format!("- File: {}\n", placeholder_file(idx)));
        match issue.line {
            Some(line) => out.push_str(&format!("- Line: {}\n", line)),
            None => out.push_str("- Line: n/a\n"),
        }
        out.push_str(&format!("- Severity: {}\n", issue.severity.label()));
        out.push_str(&format!("- Type: {}\n", issue.category.label()));
        out.push_str(&format!("- Description: {}\n", issue.description));
        out.push_str(&format!("- Suggestion: {}\n", advice_for(issue.category)));
    }

    if !suggestions.is_empty() {
        out.push_str("\n## Recommendations\n\n");
        for suggestion in suggestions {
            out.push_str(&format!("- {}\n", suggestion));
        }
    }

    out
}

fn placeholder_file(issue_idx: usize) -> &'static str {
    PLACEHOLDER_FILES[issue_idx % PLACEHOLDER_FILES.len()]
}

/// Category-derived per-issue advice for the detailed section. Static on
/// purpose, like the suggestion table.
fn advice_for(category: IssueCategory) -> &'static str {
    match category {
        IssueCategory::Bug => "Add a regression test that reproduces the defect, then fix it",
        IssueCategory::Security => "Treat as high priority and validate all external input",
        IssueCategory::Performance => "Profile before optimizing to confirm the hot path",
        IssueCategory::Style => "Apply the project formatting guidelines",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Issue;

    fn issue(description: &str, severity: Severity, category: IssueCategory) -> Issue {
        Issue::new(description, severity, Some(1), category)
    }

    #[test]
    fn test_terse_header_names_analysis_type() {
        let out = render(&[], &[], AnalysisType::Bugs, None);
        assert!(out.contains("Analysis: bugs"));
        assert!(out.contains("No issues found."));
    }

    #[test]
    fn test_terse_lists_issues_with_lowercase_severity() {
        let issues = vec![issue("TODO comment found", Severity::Medium, IssueCategory::Bug)];
        let out = render(&issues, &[], AnalysisType::Bugs, None);
        assert!(out.contains("- TODO comment found (medium)"));
        assert!(!out.contains("Medium"));
    }

    #[test]
    fn test_terse_truncates_after_five() {
        let issues: Vec<Issue> = (0..8)
            .map(|i| issue(&format!("issue {}", i), Severity::Low, IssueCategory::Style))
            .collect();
        let out = render(&issues, &[], AnalysisType::Style, None);
        assert!(out.contains("issue 4"));
        assert!(!out.contains("issue 5"));
        assert!(out.contains("...and 3 more"));
    }

    #[test]
    fn test_terse_renders_suggestions_block() {
        let suggestions = vec!["Do the thing".to_string()];
        let out = render(&[], &suggestions, AnalysisType::Security, None);
        assert!(out.contains("Suggestions:"));
        assert!(out.contains("- Do the thing"));

        let out = render(&[], &[], AnalysisType::Security, None);
        assert!(!out.contains("Suggestions:"));
    }

    #[test]
    fn test_comprehensive_empty_omits_all_sections() {
        let out = render(&[], &["advice".to_string()], AnalysisType::Comprehensive, None);
        assert!(out.contains("Analysis found no issues."));
        assert!(!out.contains("## Statistics"));
        assert!(!out.contains("## Issues by File"));
        assert!(!out.contains("## Detailed Issues"));
        assert!(!out.contains("## Recommendations"));
    }

    #[test]
    fn test_comprehensive_language_subtitle() {
        let out = render(&[], &[], AnalysisType::Comprehensive, Some("Swift"));
        assert!(out.contains("Language: Swift"));

        let out = render(&[], &[], AnalysisType::Comprehensive, None);
        assert!(!out.contains("Language:"));
    }

    #[test]
    fn test_comprehensive_statistics_cover_all_labels() {
        let issues = vec![
            issue("a", Severity::High, IssueCategory::Security),
            issue("b", Severity::Medium, IssueCategory::Bug),
            issue("c", Severity::Low, IssueCategory::Style),
        ];
        let out = render(&issues, &[], AnalysisType::Comprehensive, None);
        assert!(out.contains("Total issues: 3"));
        assert!(out.contains("- Critical: 0"));
        assert!(out.contains("- High: 1"));
        assert!(out.contains("- Medium: 1"));
        assert!(out.contains("- Low: 1"));
        assert!(out.contains("- Bug: 1"));
        assert!(out.contains("- Security: 1"));
        assert!(out.contains("- Performance: 0"));
        assert!(out.contains("- Style: 1"));
    }

    #[test]
    fn test_comprehensive_capitalizes_labels() {
        let issues = vec![issue("finding", Severity::High, IssueCategory::Security)];
        let out = render(&issues, &[], AnalysisType::Comprehensive, None);
        assert!(out.contains("- Severity: High"));
        assert!(out.contains("- Type: Security"));
    }

    #[test]
    fn test_comprehensive_alternates_placeholder_files() {
        let issues = vec![
            issue("first", Severity::Low, IssueCategory::Style),
            issue("second", Severity::Low, IssueCategory::Style),
            issue("third", Severity::Low, IssueCategory::Style),
        ];
        let out = render(&issues, &[], AnalysisType::Comprehensive, None);
        assert!(out.contains("### Sources/Main.swift"));
        assert!(out.contains("### Sources/Helpers.swift"));
        // index 0 and 2 land in Main, index 1 in Helpers
        assert!(out.contains("- File: Sources/Main.swift"));
        assert!(out.contains("- File: Sources/Helpers.swift"));
    }

    #[test]
    fn test_comprehensive_detail_fields() {
        let mut detailed = Issue::new("whole-text finding", Severity::Low, None, IssueCategory::Style);
        detailed.line = None;
        let issues = vec![detailed];
        let out = render(&issues, &[], AnalysisType::Comprehensive, None);
        assert!(out.contains("### Issue 1"));
        assert!(out.contains("- Line: n/a"));
        assert!(out.contains("- Description: whole-text finding"));
        assert!(out.contains("- Suggestion: Apply the project formatting guidelines"));
    }

    #[test]
    fn test_comprehensive_renders_recommendations() {
        let issues = vec![issue("a", Severity::Low, IssueCategory::Style)];
        let suggestions = vec!["Re-run the analysis".to_string()];
        let out = render(&issues, &suggestions, AnalysisType::Comprehensive, None);
        assert!(out.contains("## Recommendations"));
        assert!(out.contains("- Re-run the analysis"));
    }
}
