//! One-shot confetti for the completion banner.

use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use rand::Rng;

const PIECES: &[char] = &['*', 'o', '+', '.', '~', '\''];
const COLORS: &[Color] = &[
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// A line of scattered confetti across `width` columns, roughly one piece
/// per three columns.
pub fn burst_line(width: u16, rng: &mut impl Rng) -> SpanLine {
    let width = width.max(1) as usize;
    let mut line: SpanLine = Vec::new();
    let mut col = 0usize;
    while col < width {
        let gap = rng.gen_range(1..=3usize).min(width - col);
        line.push(Span::new(" ".repeat(gap)));
        col += gap;
        if col >= width {
            break;
        }
        let piece = PIECES[rng.gen_range(0..PIECES.len())];
        let color = COLORS[rng.gen_range(0..COLORS.len())];
        line.push(Span::styled(piece.to_string(), Style::new().color(color)));
        col += 1;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::span::line_width;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_fits_the_requested_width() {
        let mut rng = StdRng::seed_from_u64(9);
        for width in [1u16, 2, 10, 80] {
            let line = burst_line(width, &mut rng);
            assert!(line_width(&line) <= width as usize);
        }
    }

    #[test]
    fn burst_contains_colored_pieces() {
        let mut rng = StdRng::seed_from_u64(4);
        let line = burst_line(60, &mut rng);
        assert!(line.iter().any(|s| s.style.color.is_some()));
    }
}
