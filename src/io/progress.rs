//! Progress display while a click script is applied

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over applied clicks
///
/// A hidden bar still counts clicks but never draws.
pub struct ClickProgress {
    bar: ProgressBar,
    visible: bool,
}

impl ClickProgress {
    /// Create a bar for `total` clicks; `visible = false` suppresses all output
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(Self::style());
            bar
        } else {
            let bar = ProgressBar::hidden();
            bar.set_length(total as u64);
            bar
        };
        Self { bar, visible }
    }

    /// Whether the bar draws to the terminal
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Record one more applied click
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Clicks recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total clicks expected
    pub fn length(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Close the bar with a final message
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }

    fn style() -> ProgressStyle {
        let template = format!(
            "[{{elapsed_precise}}] Clicks: [{{bar:{PROGRESS_BAR_WIDTH}.red/yellow}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
