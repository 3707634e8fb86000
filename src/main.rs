//! # vigil - Rule-Based Source Issue Scanner
//!
//! Scans Swift and JavaScript sources with fixed line-oriented heuristics
//! across three rule categories (defects, security weaknesses, style
//! violations) and aggregates the findings into console, JSON or summary
//! report output.

use clap::Parser;
use commands::{Cli, Commands};

pub mod commands;
pub mod config;
pub mod files;
pub mod report;
pub mod rules;
pub mod stats;
pub mod suggestions;
pub mod ui;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            target,
            language,
            analysis,
            format,
        } => {
            if let Err(e) = commands::scan::handle_scan(target, language, analysis, format) {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
        Commands::Suggest { analysis } => {
            commands::suggest::handle_suggest(analysis);
        }
        Commands::Rules => {
            commands::rules::handle_rules();
        }
    }
}
