//! Terminal presentation helpers shared by the command handlers.

use colored::*;

pub fn print_banner() {
    println!();
    println!("{}", "  ╭──────────────────────────────╮".bright_cyan());
    println!(
        "  {} {} {}",
        "│".bright_cyan(),
        "🔍 vigil · source code review ".bright_white().bold(),
        "│".bright_cyan()
    );
    println!("{}", "  ╰──────────────────────────────╯".bright_cyan());
}

/// Spinner shown while a directory walk is in progress.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
