use crate::prelude::Logger;
use crate::streams::Destination;
use crate::sync::lock;

/// Number of cells between the brackets.
const BAR_WIDTH: usize = 50;

/// Lines the bar up with message bodies, which start after an 11-column tag.
const INDENT: &str = "           ";

/// Last call to [`Logger::report_progress`], and the percentage last drawn.
#[derive(Debug)]
pub(crate) struct ProgressState {
    current: usize,
    total: usize,
    drawn: Option<u32>,
}

impl Default for ProgressState {
    /// `(0, 1)`: nothing reported yet.
    fn default() -> Self {
        Self {
            current: 0,
            total: 1,
            drawn: None,
        }
    }
}

/// `current / (total - 1)` as a percentage, capped at 100.
///
/// A `total` of 0 or 1 has no intermediate steps and reads as complete.
pub(crate) fn percentage(current: usize, total: usize) -> f64 {
    if total <= 1 {
        return 100.0;
    }
    (current as f64 / (total - 1) as f64 * 100.0).min(100.0)
}

impl ProgressState {
    /// Records a call and returns the percentage to draw, if a redraw is due.
    ///
    /// A redraw is due when the whole percentage changed since the last one,
    /// when `total` changed since the previous call, or on the final iteration.
    pub(crate) fn advance(&mut self, current: usize, total: usize) -> Option<f64> {
        let percent = percentage(current, total);
        let whole = percent as u32;
        let is_last = total <= 1 || current == total - 1;

        // Any move of the whole percentage redraws, backwards included, so a
        // restarted loop with the same total is drawn from its new position.
        let redraw = is_last || total != self.total || self.drawn != Some(whole);

        self.current = current;
        self.total = total;

        if redraw {
            self.drawn = Some(whole);
            Some(percent)
        } else {
            None
        }
    }
}

pub(crate) fn render_bar(percent: f64) -> String {
    let filled = ((BAR_WIDTH as f64 * percent / 100.0) as usize).min(BAR_WIDTH);
    format!(
        "{INDENT}[{}{}] {}%\r",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        percent as u32
    )
}

impl Logger {
    /// Draws a progress bar for iteration `current` out of `total` on standard
    /// output, overwriting the previous bar in place.
    ///
    /// Redraws are skipped until the whole percentage moves, `total` changes,
    /// or `current` is the last iteration (`total - 1`). Returns whether the
    /// bar was drawn.
    ///
    /// The bar ignores the threshold.
    pub fn report_progress(&self, current: usize, total: usize) -> bool {
        let mut state = lock(&self.emission);
        match state.progress.advance(current, total) {
            Some(percent) => {
                state.streams.emit(Destination::Output, &render_bar(percent));
                true
            }
            None => false,
        }
    }

    /// `(current, total)` from the latest `report_progress` call, `(0, 1)`
    /// before the first one.
    pub fn last_progress(&self) -> (usize, usize) {
        let state = lock(&self.emission);
        (state.progress.current, state.progress.total)
    }
}
