//! Per-image progress display with automatic batching for large sets

use crate::evidence::model::display_name;
use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a batch of images
///
/// Small batches get one line per image in flight; larger batches add an
/// overall bar and keep only the most recent images visible.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    image_bars: Vec<(usize, ProgressBar)>,
    image_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            batch_bar: None,
            image_bars: Vec::new(),
            image_count: 0,
        }
    }

    /// Prepare the display for `image_count` images
    pub fn initialize(&mut self, image_count: usize) {
        self.image_count = image_count;
        if image_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(image_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Number of images announced by [`Self::initialize`]
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Show that the image at `index` is being analyzed
    pub fn start_image(&mut self, index: usize, path: &Path) {
        let bar = self.multi_progress.add(ProgressBar::new_spinner());
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(display_name(path));
        bar.set_message("analyzing");
        bar.enable_steady_tick(Duration::from_millis(120));
        self.image_bars.push((index, bar));

        while self.image_bars.len() > MAX_INDIVIDUAL_PROGRESS_BARS {
            let (_, oldest) = self.image_bars.remove(0);
            oldest.finish_and_clear();
        }
    }

    /// Mark the image at `index` as done, successfully or not
    pub fn complete_image(&mut self, index: usize, succeeded: bool) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some((_, bar)) = self.image_bars.iter().find(|(i, _)| *i == index) {
            let status = if succeeded { "done" } else { "failed" };
            bar.finish_with_message(status);
        }
    }

    /// Clear every progress display
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        for (_, bar) in &self.image_bars {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
