use fraud_scan::RequestState;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinners only draw on a terminal stderr, and never alongside JSON output
pub fn spinner_visible(json: bool) -> bool {
    !json && atty::is(atty::Stream::Stderr)
}

/// Spinner shown while a request is pending
pub struct AnalysisSpinner {
    pb: ProgressBar,
}

impl AnalysisSpinner {
    /// Visible spinner on stderr, or a hidden one for JSON and piped output
    pub fn new(visible: bool) -> Self {
        if !visible {
            return Self {
                pb: ProgressBar::hidden(),
            };
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { pb }
    }

    /// Reflect the latest request state
    pub fn show(&self, state: &RequestState) {
        if state.is_pending() {
            self.pb.set_message("Analyzing...");
            self.pb.enable_steady_tick(Duration::from_millis(100));
        } else {
            self.finish();
        }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_visibility_follows_stderr() {
        assert!(!spinner_visible(true));
        assert_eq!(spinner_visible(false), atty::is(atty::Stream::Stderr));
    }
}
