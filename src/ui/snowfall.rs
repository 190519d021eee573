//! The falling-snow band above the countdown. Purely cosmetic: flakes
//! drift one row per tick and respawn at the top at an RNG-chosen column,
//! so a seeded generator gives a reproducible sky.

use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use rand::Rng;

const FLAKE_GLYPHS: &[char] = &['❄', '❅', '*', '·'];

#[derive(Debug, Clone, Copy)]
struct Flake {
    col: u16,
    row: u16,
    glyph: char,
}

#[derive(Debug, Clone)]
pub struct Snowfield {
    width: u16,
    rows: u16,
    flakes: Vec<Flake>,
}

impl Snowfield {
    /// About one flake per five columns, scattered over the band.
    pub fn new(width: u16, rows: u16, rng: &mut impl Rng) -> Self {
        let width = width.max(1);
        let rows = rows.max(1);
        let count = (width / 5).max(1);
        let flakes = (0..count)
            .map(|_| Flake {
                col: rng.gen_range(0..width),
                row: rng.gen_range(0..rows),
                glyph: FLAKE_GLYPHS[rng.gen_range(0..FLAKE_GLYPHS.len())],
            })
            .collect();
        Self {
            width,
            rows,
            flakes,
        }
    }

    /// One animation step: everything falls a row; flakes leaving the band
    /// respawn at the top somewhere else.
    pub fn drift(&mut self, rng: &mut impl Rng) {
        for flake in &mut self.flakes {
            if flake.row + 1 >= self.rows {
                flake.row = 0;
                flake.col = rng.gen_range(0..self.width);
                flake.glyph = FLAKE_GLYPHS[rng.gen_range(0..FLAKE_GLYPHS.len())];
            } else {
                flake.row += 1;
            }
        }
    }

    /// Re-fit the band after a terminal resize, clamping strays.
    pub fn resize(&mut self, width: u16, rows: u16) {
        self.width = width.max(1);
        self.rows = rows.max(1);
        for flake in &mut self.flakes {
            flake.col = flake.col.min(self.width - 1);
            flake.row = flake.row.min(self.rows - 1);
        }
    }

    pub fn render(&self, theme: &Theme) -> Vec<SpanLine> {
        let mut grid = vec![vec![' '; self.width as usize]; self.rows as usize];
        for flake in &self.flakes {
            grid[flake.row as usize][flake.col as usize] = flake.glyph;
        }
        grid.into_iter()
            .map(|row| {
                let text: String = row.into_iter().collect();
                vec![Span::styled(text, theme.snow)]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn flakes_stay_inside_the_band() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = Snowfield::new(40, 4, &mut rng);
        for _ in 0..200 {
            field.drift(&mut rng);
        }
        for flake in &field.flakes {
            assert!(flake.col < 40);
            assert!(flake.row < 4);
        }
    }

    #[test]
    fn drift_is_deterministic_under_a_seed() {
        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(11);
        let mut a = Snowfield::new(30, 3, &mut rng_a);
        let mut b = Snowfield::new(30, 3, &mut rng_b);
        let theme = Theme::festive();
        for _ in 0..50 {
            a.drift(&mut rng_a);
            b.drift(&mut rng_b);
        }
        let lines_a: Vec<String> = a.render(&theme).iter().map(|l| l[0].text.clone()).collect();
        let lines_b: Vec<String> = b.render(&theme).iter().map(|l| l[0].text.clone()).collect();
        assert_eq!(lines_a, lines_b);
    }

    #[test]
    fn resize_clamps_out_of_range_flakes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = Snowfield::new(80, 5, &mut rng);
        field.resize(10, 2);
        for flake in &field.flakes {
            assert!(flake.col < 10);
            assert!(flake.row < 2);
        }
    }

    #[test]
    fn render_emits_one_line_per_row() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = Snowfield::new(20, 3, &mut rng);
        assert_eq!(field.render(&Theme::festive()).len(), 3);
    }
}
