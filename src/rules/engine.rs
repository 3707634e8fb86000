use crate::rules::defects::DefectScanner;
use crate::rules::security::SecurityScanner;
use crate::rules::style::StyleScanner;
use crate::rules::{AnalysisType, Issue, Language, Scanner};

/// Returns the scanner set for the requested analysis type.
///
/// `Performance` has no static rule set (its category only exists in the
/// suggestion table), so it maps to an empty set rather than a fallback.
pub fn scanners_for(analysis: AnalysisType) -> Vec<Box<dyn Scanner + Send + Sync>> {
    match analysis {
        AnalysisType::Bugs => vec![Box::new(DefectScanner)],
        AnalysisType::Security => vec![Box::new(SecurityScanner)],
        AnalysisType::Style => vec![Box::new(StyleScanner)],
        AnalysisType::Performance => vec![],
        AnalysisType::Comprehensive => vec![
            Box::new(DefectScanner),
            Box::new(SecurityScanner),
            Box::new(StyleScanner),
        ],
    }
}

/// Runs every scanner selected by `analysis` over the same source text and
/// merges the results in scanner order. Scanners share no state, so the
/// merged output is identical to running them in any order and
/// concatenating by scanner index.
pub fn analyze(source: &str, language: Language, analysis: AnalysisType) -> Vec<Issue> {
    scanners_for(analysis)
        .iter()
        .flat_map(|scanner| scanner.scan(language, source))
        .collect()
}
