//! Output formatting module

pub mod progress;
pub mod styles;

use std::io::Write as _;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if live progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a section header line. Suppressed when `quiet`.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("{}", title.style(self.styles.header));
        }
    }

    /// Print a full diagnostic line. Suppressed when `quiet`.
    pub fn line(&self, text: &str) {
        if !self.quiet {
            println!("{text}");
        }
    }

    /// Render an open diagnostic fragment across a blocking wait.
    ///
    /// The fragment stays visible while `wait` runs: on an interactive
    /// terminal a spinner animates it, otherwise the partial line is printed
    /// and flushed as-is. Once the wait returns, the line is completed with
    /// `tail`. The wait runs in every mode, including `quiet` — suppressing
    /// output must not change timing.
    pub fn blocking_step(&self, fragment: &str, tail: &str, wait: impl FnOnce()) {
        if self.quiet {
            wait();
            return;
        }
        if self.show_progress() {
            let pb = progress::spinner(fragment);
            wait();
            pb.finish_and_clear();
            println!("{fragment}{}", tail.style(self.styles.success));
        } else {
            print!("{fragment}");
            let _ = std::io::stdout().flush();
            wait();
            println!("{}", tail.style(self.styles.success));
        }
    }
}

#[cfg(test)]
mod tests;
