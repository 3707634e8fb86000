use crate::commands::OutputFormat;
use crate::config::VigilConfig;
use crate::files;
use crate::report;
use crate::rules::{engine, AnalysisType, Issue, Language, Severity};
use crate::stats::VigilStats;
use crate::suggestions::suggestions_for;
use crate::ui;
use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct JsonScan {
    checked: usize,
    highs: usize,
    mediums: usize,
    lows: usize,
    issues: Vec<JsonIssue>,
}

#[derive(Serialize)]
struct JsonIssue {
    file: String,
    #[serde(flatten)]
    issue: Issue,
}

struct FileReport {
    path: PathBuf,
    issues: Vec<Issue>,
}

pub fn handle_scan(
    target: String,
    language_override: Option<String>,
    analysis: AnalysisType,
    format: Option<OutputFormat>,
) -> anyhow::Result<()> {
    let path = Path::new(&target);
    if !path.exists() {
        eprintln!("{} Target '{}' does not exist.", "❌".red(), target);
        std::process::exit(2);
    }

    let project_root = if path.is_dir() {
        path.to_path_buf()
    } else {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };
    let config = VigilConfig::load(&project_root);
    let format = format.unwrap_or_else(|| OutputFormat::from_config(&config.default_format));

    let spinner = if path.is_dir() && format == OutputFormat::Text {
        Some(ui::spinner("Collecting source files..."))
    } else {
        None
    };
    let files = files::collect_source_files(path, &config.file_extensions);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if files.is_empty() {
        match format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&JsonScan {
                    checked: 0,
                    highs: 0,
                    mediums: 0,
                    lows: 0,
                    issues: vec![],
                })?
            ),
            OutputFormat::Report => {
                println!("{}", report::render(&[], &[], analysis, None));
            }
            OutputFormat::Text => {
                println!("{} No source files found in '{}'.", "⚠️".yellow(), target);
            }
        }
        return Ok(());
    }

    let override_language = language_override.as_deref().map(Language::from_tag);

    // Read failures are real I/O errors at the caller boundary and must
    // surface, unlike unrecognized languages which just scan to nothing.
    let mut reports = Vec::new();
    for file in &files {
        let source = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let language = override_language.unwrap_or_else(|| files::language_for_path(file));
        let issues = engine::analyze(&source, language, analysis);
        reports.push(FileReport {
            path: file.clone(),
            issues,
        });
    }

    let total_issues: usize = reports.iter().map(|r| r.issues.len()).sum();
    let mut stats = VigilStats::load(&project_root);
    stats.record_scan(files.len(), total_issues);
    stats.save(&project_root);

    let highs = count_severity(&reports, Severity::High);
    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Report => print_report(&reports, analysis, override_language),
        OutputFormat::Text => print_text(&reports, analysis),
    }

    // High findings fail the build for CI use
    if highs > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn count_severity(reports: &[FileReport], severity: Severity) -> usize {
    reports
        .iter()
        .flat_map(|r| &r.issues)
        .filter(|i| i.severity == severity)
        .count()
}

fn print_json(reports: &[FileReport]) -> anyhow::Result<()> {
    let issues: Vec<JsonIssue> = reports
        .iter()
        .flat_map(|r| {
            r.issues.iter().cloned().map(|issue| JsonIssue {
                file: r.path.display().to_string(),
                issue,
            })
        })
        .collect();
    let out = JsonScan {
        checked: reports.len(),
        highs: count_severity(reports, Severity::High),
        mediums: count_severity(reports, Severity::Medium),
        lows: count_severity(reports, Severity::Low),
        issues,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn print_report(reports: &[FileReport], analysis: AnalysisType, language: Option<Language>) {
    let issues: Vec<Issue> = reports.iter().flat_map(|r| r.issues.clone()).collect();
    let suggestions = suggestions_for(analysis);
    let label = language.and_then(|l| match l {
        Language::Swift => Some("Swift"),
        Language::JavaScript => Some("JavaScript"),
        Language::Unrecognized => None,
    });
    println!("{}", report::render(&issues, &suggestions, analysis, label));
}

fn print_text(reports: &[FileReport], analysis: AnalysisType) {
    println!(
        "\n{} {} analysis, {} file(s), {}",
        "⚡".cyan(),
        analysis.as_str(),
        reports.len(),
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );

    let mut highs = 0usize;
    let mut mediums = 0usize;
    let mut lows = 0usize;

    for file_report in reports {
        if file_report.issues.is_empty() {
            continue;
        }
        println!("\n📄 {}", file_report.path.display().to_string().bold().cyan());
        for issue in &file_report.issues {
            let (icon, colored_sev) = match issue.severity {
                Severity::High | Severity::Critical => {
                    highs += 1;
                    ("❗", issue.severity.as_str().red().bold())
                }
                Severity::Medium => {
                    mediums += 1;
                    ("⚠️ ", issue.severity.as_str().yellow())
                }
                Severity::Low => {
                    lows += 1;
                    ("ℹ️ ", issue.severity.as_str().blue())
                }
            };
            let line_info = issue
                .line
                .map(|l| format!(":{}", l))
                .unwrap_or_default();
            println!(
                "   {} [{}{}] {}",
                icon,
                colored_sev,
                line_info.dimmed(),
                issue.description
            );
        }
    }

    if highs == 0 && mediums == 0 && lows == 0 {
        println!("\n✅ No issues detected in {} file(s).", reports.len());
    } else {
        println!(
            "\n🚩 {} high  ⚠️  {} medium  ℹ️  {} low",
            highs.to_string().red().bold(),
            mediums.to_string().yellow(),
            lows.to_string().blue()
        );
    }
}
