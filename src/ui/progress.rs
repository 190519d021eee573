//! Progress bar cell math, kept separate from span assembly so the
//! fill rounding is testable on its own.

/// Split `width` cells into (filled, empty) for a 0-100 percentage.
/// Rounds to the nearest cell; only 100% paints the full bar.
pub fn bar_cells(percent: u8, width: usize) -> (usize, usize) {
    let percent = percent.min(100) as usize;
    let mut filled = (width * percent + 50) / 100;
    if percent < 100 {
        filled = filled.min(width.saturating_sub(1));
    }
    (filled, width - filled)
}

pub const BAR_FILLED: char = '█';
pub const BAR_EMPTY: char = '░';
