use colored::*;

/// Prints the fixed rule catalog. Rule applicability is gated per language;
/// this listing mirrors the dispatch in the scanners.
pub fn handle_rules() {
    crate::ui::print_banner();
    println!("\n{}", "📋 Rule catalog".bright_cyan().bold());

    println!("\n{}", "Swift + JavaScript".bold());
    println!("  - TODO marker per line {}", "(bug, medium)".dimmed());
    println!("  - FIXME marker per line {}", "(bug, medium)".dimmed());

    println!("\n{}", "Swift".bold());
    println!("  - Debug print statements, first occurrence {}", "(bug, low)".dimmed());
    println!("  - Force unwrapping, first occurrence {}", "(bug, medium)".dimmed());
    println!("  - Password stored via UserDefaults {}", "(security, high)".dimmed());
    println!("  - unsafeBitCast / unsafeDowncast {}", "(security, high)".dimmed());
    println!("  - Unsafe pointer types {}", "(security, medium)".dimmed());
    println!("  - Non-private static var {}", "(security, medium)".dimmed());
    println!("  - Line longer than 120 characters {}", "(style, low)".dimmed());
    println!("  - Functions without /// documentation {}", "(style, low)".dimmed());

    println!("\n{}", "JavaScript".bold());
    println!("  - eval() usage {}", "(security, high)".dimmed());
    println!("  - innerHTML assignment {}", "(security, medium)".dimmed());
    println!("  - document.write() usage {}", "(security, medium)".dimmed());

    println!("\n{}", "Any language".bold());
    println!("  - Path traversal segments ../ or ..\\ {}", "(security, high)".dimmed());
    println!();
}
