//! Colored status lines printed to the terminal.

use colored::Colorize;

/// Prints a green check followed by the message
pub fn success(msg: &str) {
    println!("{}", success_line(msg));
}

/// Renders a green check followed by the message
pub fn success_line(msg: &str) -> String {
    format!("{} {}", "✓".green(), msg.green())
}

/// Prints a bold yellow warning
pub fn warning(msg: &str) {
    println!("{}", msg.yellow().bold());
}

/// Prints the fatal error banner and the error to stderr
pub fn fatal(err: &dyn std::fmt::Display) {
    eprintln!("{}", "! fatal error !".red());
    eprintln!("{}", err.to_string().red());
}

/// Renders informational text in bold blue
pub fn info(msg: &str) -> String {
    msg.blue().bold().to_string()
}
