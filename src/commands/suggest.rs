use crate::rules::AnalysisType;
use crate::suggestions::suggestions_for;
use colored::*;

pub fn handle_suggest(analysis: AnalysisType) {
    println!(
        "\n{} Suggestions for {} analysis:\n",
        "💡".yellow(),
        analysis.as_str().bold()
    );
    for suggestion in suggestions_for(analysis) {
        println!("  - {}", suggestion);
    }
    println!();
}
