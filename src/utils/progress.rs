//! Progress indicator helpers.
//!
//! Thin wrappers around `indicatif` with one shared switch: progress bars
//! are suppressed when [`disable_progress`] has been called (the
//! `--no-progress` flag) or when the `CHROMUP_NO_PROGRESS` environment
//! variable is set. Non-TTY output is already handled by `indicatif`
//! itself, which draws nothing without a terminal.

use std::sync::atomic::{AtomicBool, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Set to any value to suppress all progress indicators.
pub const NO_PROGRESS_ENV: &str = "CHROMUP_NO_PROGRESS";

static PROGRESS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Suppresses progress indicators for the rest of the process lifetime.
pub fn disable_progress() {
    PROGRESS_DISABLED.store(true, Ordering::Relaxed);
}

fn is_progress_disabled() -> bool {
    PROGRESS_DISABLED.load(Ordering::Relaxed) || std::env::var(NO_PROGRESS_ENV).is_ok()
}

/// Styled byte-progress bar for artifact downloads.
///
/// Returns a hidden bar when progress is disabled, so call sites never
/// need to branch.
pub fn download_bar(total: u64) -> ProgressBar {
    if is_progress_disabled() {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
