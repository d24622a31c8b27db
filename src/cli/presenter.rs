//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting.
///
/// Reporting goes to stderr; command results (device names from `list`) go
/// to stdout. Verbosity: 0 shows warnings/errors only, `-v` adds progress
/// info, `-vv` adds resolution detail.
pub struct Presenter {
    verbosity: u8,
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a presenter at the given verbosity level
    pub fn new(verbosity: u8) -> Self {
        Self {
            verbosity,
            spinner: None,
        }
    }

    /// Whether info-level messages are shown
    pub fn shows_info(&self) -> bool {
        self.verbosity >= 1
    }

    /// Whether debug-level messages are shown
    pub fn shows_debug(&self) -> bool {
        self.verbosity >= 2
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Finish the spinner with a success mark, or print the mark directly
    /// when no spinner is running
    pub fn spinner_success(&mut self, message: &str) {
        match self.spinner.take() {
            Some(spinner) => {
                spinner.finish_with_message(format!("{} {}", "✓".green(), message))
            }
            None => self.success(message),
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr (shown at -v and above)
    pub fn info(&self, message: &str) {
        if self.shows_info() {
            eprintln!("{} {}", "ℹ".cyan(), message);
        }
    }

    /// Print debug message to stderr (shown at -vv and above)
    pub fn debug(&self, message: &str) {
        if self.shows_debug() {
            eprintln!("{} {}", "·".dimmed(), message);
        }
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the actual command output)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(0)
    }
}
