pub mod rules;
pub mod scan;
pub mod suggest;

use crate::rules::AnalysisType;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Rule-based source issue scanner and report generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a file or directory and report the findings
    Scan {
        /// File or directory to analyze
        target: String,
        /// Language tag override (e.g. swift, javascript); inferred from
        /// the file extension when omitted
        #[arg(short, long)]
        language: Option<String>,
        /// Which rule sets to run
        #[arg(short, long, value_enum, default_value_t = AnalysisType::Comprehensive)]
        analysis: AnalysisType,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the remediation advice for an analysis category
    Suggest {
        #[arg(value_enum)]
        analysis: AnalysisType,
    },
    /// List the rule catalog per language
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored console output grouped by file
    Text,
    /// Machine-readable JSON
    Json,
    /// Aggregated summary report
    Report,
}

impl OutputFormat {
    pub fn from_config(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "report" => OutputFormat::Report,
            _ => OutputFormat::Text,
        }
    }
}
