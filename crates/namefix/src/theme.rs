//! Color theme and console message helpers

use colored::*;

/// Original name in a before/after pair
pub fn before(name: &str) -> ColoredString {
    name.dimmed()
}

/// Proposed name in a before/after pair
pub fn after(name: &str) -> ColoredString {
    name.cyan().bold()
}

/// Entry id, zero padded
pub fn entry_id(id: usize) -> ColoredString {
    format!("{:04}", id).bold()
}

/// Symbol for success
pub fn success_symbol() -> &'static str {
    "✓"
}

/// Symbol for error
pub fn error_symbol() -> &'static str {
    "✗"
}

/// Symbol for info
pub fn info_symbol() -> &'static str {
    "→"
}

/// Print a formatted error message
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    // Show chain of causes
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
    }
}

/// Print an error with a suggestion
pub fn print_error_with_suggestion(context: &str, error: &anyhow::Error, suggestion: &str) {
    print_error(context, error);
    eprintln!("\n{} {}", "Suggestion:".cyan().bold(), suggestion);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}
