//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the standardized print functions used by every git-upload step,
//! so progress, warnings and failures look the same wherever they come from.
//!
//! # Design Principles
//! - **Consistent color scheme**: Green for progress, yellow for warnings, red for errors
//! - **Remediation next to the failure**: Errors can carry the commands that fix them
//! - **Dividers between steps**: Long runs stay readable

use colored::*;

/// Width of the divider printed between major steps
pub const DIVIDER_WIDTH: usize = 60;

/// Prints the program banner
///
/// # Format
/// ```text
///
/// git-upload v0.1.0
/// Stage, commit and push in one step
///
/// ```
pub fn print_banner(version: &str) {
    println!(
        "\n{} {}\n{}\n",
        "git-upload".yellow().bold(),
        format!("v{version}").red(),
        "Stage, commit and push in one step".bright_black()
    );
}

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an error followed by remediation commands
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///   <hint1>
///   <hint2>
///
/// ```
pub fn print_error_with_hints(message: &str, hints: &[&str]) {
    if hints.is_empty() {
        print_error(message);
        return;
    }

    println!("\n{} {}", "✕ Error:".red(), message.white());
    for hint in hints {
        println!("  {}", hint.blue());
    }
    println!();
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Prints a progress step
pub fn print_step(message: &str) {
    println!("{} {}", "➤".green(), message.white());
}

/// Formats and prints a warning that does not stop the run
pub fn print_warning(message: &str) {
    println!("{} {}", "! Warning:".yellow(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:", header.white());
}

pub fn divider(symbol: char, width: usize) -> String {
    symbol.to_string().repeat(width)
}

pub fn print_divider() {
    println!("{}", divider('━', DIVIDER_WIDTH).bright_black());
}

/// Lists staged paths with check marks, or a cross when the index is empty
pub fn format_staged_list(files: &[String]) -> String {
    if files.is_empty() {
        return format!("  {} no staged files", "[✘]".red());
    }
    files
        .iter()
        .map(|file| format!("  {} {}", "[✔]".green(), file))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
        print_error_with_hints("Identity missing", &["git config user.name"]);
        print_error_with_hints("No hints", &[]);
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_success("Operation completed");
        print_step("Staging");
        print_warning("Careful");
        print_info("Information message");
        print_section_header("Staged files");
        print_divider();
        print_banner("0.1.0");
    }

    #[test]
    fn test_divider() {
        assert_eq!(divider('-', 4), "----");
        assert_eq!(divider('━', 3), "━━━");
    }

    #[test]
    fn test_format_staged_list() {
        let listing = format_staged_list(&["a.txt".to_string(), "b.txt".to_string()]);
        assert_eq!(listing.lines().count(), 2);
        assert!(listing.contains("a.txt"));
        assert!(listing.contains("[✔]"));

        let empty = format_staged_list(&[]);
        assert!(empty.contains("[✘]"));
        assert!(empty.contains("no staged files"));
    }
}
