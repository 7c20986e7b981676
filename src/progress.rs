use indicatif::{ProgressBar, ProgressStyle};

/// Below this many files no bar is drawn.
const PROGRESS_THRESHOLD: u64 = 10;

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(total: u64, enabled: bool) -> Self {
        if !enabled || total < PROGRESS_THRESHOLD {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
            bar.set_style(style.progress_chars("=>-"));
        }
        Self { bar: Some(bar) }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn set_message(&self, msg: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(msg.to_string());
        }
    }

    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_below_threshold() {
        assert!(!ProgressReporter::new(3, true).is_visible());
    }

    #[test]
    fn test_hidden_when_disabled() {
        assert!(!ProgressReporter::new(100, false).is_visible());
    }

    #[test]
    fn test_visible_for_many_files() {
        let progress = ProgressReporter::new(PROGRESS_THRESHOLD, true);
        assert!(progress.is_visible());
        progress.inc();
        progress.finish();
    }
}
