//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR, plain when not a terminal):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints
//! - Bold: headers
//! - Dimmed: labels and rules
//!
//! Summaries go to stdout; warnings, errors and hints go to stderr.

use std::fmt::Display;

use console::style;

const RULE_WIDTH: usize = 38;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a bold header followed by a rule.
///
/// Example:
/// ```text
/// Example 1: Loading JSON Configuration
/// --------------------------------------
/// ```
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
    rule();
}

/// Print a horizontal rule.
pub fn rule() {
    let line = "-".repeat(RULE_WIDTH);
    if colors_enabled() {
        println!("{}", style(line).dim());
    } else {
        println!("{}", line);
    }
}

/// Print an indented `Label: value` line.
///
/// Example: `  Database Host: db.example.com`
pub fn field(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}: {}", style(label).dim(), value);
    } else {
        println!("  {}: {}", label, value);
    }
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ Integration examples completed successfully!`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ Warning: JSON config example failed: ...`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").for_stderr().yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ config file secrets.json not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").for_stderr().red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run create-sample-configs.sh to generate the encrypted files`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").for_stderr().cyan(),
            style(msg).for_stderr().cyan()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `Integration examples completed (1 of 2 failed)`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}
