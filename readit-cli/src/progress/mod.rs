//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for reading through a book's resources
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

    /// Initialize progress bar over the book's resources
    pub fn init_resources(&mut self, total_resources: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_resources);
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} resources {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("default progress style kept: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress from the fraction of resources consumed
    pub fn update(&self, fraction: f64, words: usize) {
        if let Some(pb) = &self.progress_bar {
            let total = pb.length().unwrap_or(0);
            pb.set_position((fraction * total as f64).round() as u64);
            pb.set_message(format!("{words} words"));
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
