use colored::{ColoredString, Colorize};
use fraud_scan::Severity;

/// Print a status message with a spinner-like indicator
pub fn status_message(message: &str) {
    eprintln!("{} {} ... ", "⏳".yellow(), message.bright_white());
}

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Colour a line according to verdict severity
pub fn paint(line: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => line.red().bold(),
        Severity::Warning => line.yellow().bold(),
        Severity::Info => line.blue().bold(),
        Severity::Success => line.green().bold(),
    }
}
