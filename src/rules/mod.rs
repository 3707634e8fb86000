pub mod defects;
pub mod engine;
pub mod security;
pub mod style;

use serde::Serialize;
use uuid::Uuid;

/// Severity of a finding, ordered by ascending impact.
///
/// Scanners only ever emit `Low`, `Medium` or `High`; `Critical` exists for
/// aggregate reporting.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Lowercase form, used by the terse report and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Capitalized form, used by the comprehensive report.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// What kind of problem an issue describes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Bug,
    Security,
    Performance,
    Style,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Bug => "bug",
            IssueCategory::Security => "security",
            IssueCategory::Performance => "performance",
            IssueCategory::Style => "style",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::Bug => "Bug",
            IssueCategory::Security => "Security",
            IssueCategory::Performance => "Performance",
            IssueCategory::Style => "Style",
        }
    }
}

/// The analysis mode requested by the caller. `Comprehensive` runs every
/// scanner and selects the multi-section report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AnalysisType {
    Bugs,
    Performance,
    Security,
    Style,
    Comprehensive,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Bugs => "bugs",
            AnalysisType::Performance => "performance",
            AnalysisType::Security => "security",
            AnalysisType::Style => "style",
            AnalysisType::Comprehensive => "comprehensive",
        }
    }
}

impl std::fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of languages the rule sets know about. Every scanner
/// dispatches on this enum, so the per-language rule applicability is
/// auditable in one place instead of being scattered through string
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Swift,
    JavaScript,
    /// Any tag the rule sets have no rules for. Scanners return empty
    /// results for it; there is no default rule set.
    Unrecognized,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "swift" => Language::Swift,
            "javascript" | "js" => Language::JavaScript,
            _ => Language::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Swift => "swift",
            Language::JavaScript => "javascript",
            Language::Unrecognized => "unrecognized",
        }
    }
}

/// One finding produced by a scanner.
///
/// Issues are immutable value data: created fresh on every scan, consumed by
/// the caller, never cached. Two issues never share an `id`, even when every
/// other field matches.
#[derive(Serialize, Debug, Clone)]
pub struct Issue {
    pub id: Uuid,
    pub description: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub category: IssueCategory,
}

impl Issue {
    pub fn new(
        description: impl Into<String>,
        severity: Severity,
        line: Option<usize>,
        category: IssueCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            severity,
            line,
            category,
        }
    }
}

/// A rule set over one unit of source text. Implementations are pure: no
/// I/O, no shared state, and they never fail. Unsupported languages and
/// degenerate input yield an empty list.
pub trait Scanner {
    fn scan(&self, language: Language, source: &str) -> Vec<Issue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_orders_by_impact() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_language_from_tag_is_closed() {
        assert_eq!(Language::from_tag("swift"), Language::Swift);
        assert_eq!(Language::from_tag("javascript"), Language::JavaScript);
        assert_eq!(Language::from_tag("js"), Language::JavaScript);
        assert_eq!(Language::from_tag("python"), Language::Unrecognized);
        assert_eq!(Language::from_tag(""), Language::Unrecognized);
        // Tags are case-sensitive, like every other rule in the engine
        assert_eq!(Language::from_tag("Swift"), Language::Unrecognized);
    }

    #[test]
    fn test_duplicate_findings_get_distinct_ids() {
        let a = Issue::new("TODO comment found", Severity::Medium, Some(1), IssueCategory::Bug);
        let b = Issue::new("TODO comment found", Severity::Medium, Some(1), IssueCategory::Bug);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_issue_serializes_lowercase_enums() {
        let issue = Issue::new("eval", Severity::High, None, IssueCategory::Security);
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["severity"], "high");
        assert_eq!(json["category"], "security");
        // line is None and must be omitted entirely
        assert!(json.get("line").is_none());
    }
}
