//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for corpus file reading
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for `total_files` corpus files
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a file whose sentences have been read
    pub fn file_completed(&self, filename: &str, sentences: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Read {sentences} sentences from {filename}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_files(3);
        assert!(reporter.progress_bar.is_none());
        reporter.file_completed("gold.conllu", 10);
        reporter.finish();
    }

    #[test]
    fn test_bar_counts_files() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(2);
        reporter.file_completed("a.json", 4);
        reporter.file_completed("b.json", 1);

        let pb = reporter.progress_bar.as_ref().unwrap();
        assert_eq!(pb.position(), 2);
        reporter.finish();
    }
}
