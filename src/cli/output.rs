//! Console output for benchmark reports
//!
//! Consistent styled lines for headers, verdicts and aligned key/value rows.

use console::style;
use std::time::Duration;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("  {} {}", style("✔").green(), message);
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        println!("  {} {}", style("⚠").yellow(), message);
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        println!("\n{}", style(title).bold().underlined());
    }

    /// Print a section header with enhanced styling
    pub fn section_header(&self, title: &str) {
        println!("\n{}", style(title).bold().cyan());
    }

    /// Print a table row
    pub fn table_row(&self, key: &str, value: &str) {
        println!("  {:<24} {}", style(key).dim(), value);
    }

    /// Print a duration row in seconds
    pub fn timing_row(&self, key: &str, elapsed: Duration) {
        self.table_row(key, &format!("{:.6} seconds", elapsed.as_secs_f64()));
    }

    /// Print a key-value pair with the value emphasised
    pub fn total(&self, key: &str, value: &str) {
        println!("\n{} {}", style(key).bold(), style(value).green().bold());
    }
}
