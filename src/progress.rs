//! Progress UI for the sequential download loop.

use indicatif::{ProgressBar, ProgressStyle};

/// Builds the per-card progress bar, or a hidden one when quiet.
///
/// The engine ticks it once per card; the bar length is the fetched-card
/// count, known up front because pagination completes before the loop.
pub(crate) fn card_progress_bar(total: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("downloading card images");
    bar
}

#[cfg(test)]
mod tests {
    use super::card_progress_bar;

    #[test]
    fn test_quiet_returns_hidden_bar() {
        let bar = card_progress_bar(10, true);
        assert!(bar.is_hidden());
    }

    #[test]
    fn test_visible_bar_tracks_length_and_position() {
        let bar = card_progress_bar(3, false);
        assert_eq!(bar.length(), Some(3));
        bar.inc(1);
        assert_eq!(bar.position(), 1);
        bar.finish_and_clear();
    }
}
