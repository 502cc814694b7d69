//! Tile progress reporting

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const TILE_BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} tiles ({eta}) {msg}";

/// Counter over a known number of tiles, optionally drawn as a bar
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Visible bar over `total` items
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template(TILE_BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message(description.to_string());

        ProgressTracker { bar }
    }

    /// Tracker that counts but never draws
    pub fn hidden(total: u64) -> Self {
        ProgressTracker {
            bar: ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden()),
        }
    }

    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    /// Items counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }

    /// Leave the bar where it stopped, marked as failed
    pub fn abandon(&self) {
        self.bar.abandon_with_message("failed");
    }

    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }
}
