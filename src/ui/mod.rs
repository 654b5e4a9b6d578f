//! User interface module - status output and release-note formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure text rendering of the release notes
//! - This module - Styled status messages written to stderr

use console::style;

use crate::boundary::BoundaryWarning;
use crate::config::CategoryConfig;

pub mod formatter;

pub use formatter::{format_previous_release, render_release_notes};

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the configured release-note sections in order.
pub fn display_categories(categories: &[CategoryConfig]) {
    println!("{}", style("Configured categories:").bold());
    for category in categories {
        let visibility = if category.show_when_empty {
            "always shown"
        } else {
            "hidden when empty"
        };
        println!(
            "  - {:<14} {} ({})",
            category.key.as_str(),
            category.title,
            visibility
        );
    }
}
