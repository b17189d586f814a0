//! Textual progress rendering for long-running commands.
//!
//! Thin wrapper over `indicatif` that fixes the shell's bar layout:
//! `<prefix>: <percent>% |<bar>|` with a configurable filler character.

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{prefix}: {percent:>3}% |{wide_bar}|";

/// A determinate progress bar.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    /// A bar over `total` steps with the default block filler.
    pub fn new(total: u64, prefix: &str) -> Self {
        Self::with_filler(total, prefix, '█')
    }

    /// A bar over `total` steps drawn with `filler`.
    pub fn with_filler(total: u64, prefix: &str, filler: char) -> Self {
        let bar = ProgressBar::new(total);
        let chars = format!("{filler}{filler}-");
        bar.set_style(
            ProgressStyle::with_template(TEMPLATE)
                .unwrap()
                .progress_chars(&chars),
        );
        bar.set_prefix(prefix.to_string());
        Progress { bar }
    }

    /// Advance by `steps`.
    pub fn advance(&self, steps: u64) {
        self.bar.inc(steps);
    }

    /// Swap the prefix label mid-run.
    #[allow(dead_code)]
    pub fn set_prefix(&self, prefix: &str) {
        self.bar.set_prefix(prefix.to_string());
    }

    /// Stop rendering, leaving the finished bar on screen.
    pub fn finish(&self) {
        self.bar.finish();
    }
}
