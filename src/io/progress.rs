//! Progress display for long-running eliminations

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_INTERVAL};

static ELIMINATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Eliminated: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting eliminated participants
///
/// Updates are batched so that very large rings do not spend their time
/// redrawing the terminal.
pub struct EliminationProgress {
    bar: ProgressBar,
    pending: u64,
}

impl EliminationProgress {
    /// Create a bar expecting `total` eliminations
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(ELIMINATION_STYLE.clone());
        Self { bar, pending: 0 }
    }

    /// Create a bar that draws nothing
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar, pending: 0 }
    }

    /// Record one elimination
    pub fn tick(&mut self) {
        self.pending += 1;
        if self.pending >= PROGRESS_REFRESH_INTERVAL {
            self.bar.inc(self.pending);
            self.pending = 0;
        }
    }

    /// Eliminations recorded so far, including unflushed ones
    pub fn position(&self) -> u64 {
        self.bar.position() + self.pending
    }

    /// Flush pending updates and show the survivor
    pub fn finish(mut self, survivor: usize) {
        self.bar.inc(self.pending);
        self.pending = 0;
        self.bar.finish_with_message(format!("survivor {survivor}"));
    }
}
