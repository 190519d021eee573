//! Width fitting for the dashboard. The countdown never wraps; lines are
//! clipped at the terminal edge and optionally centred.

use crate::ui::span::{Span, SpanLine, line_width};
use unicode_width::UnicodeWidthChar;

/// Clip every line to `width` display columns, cutting mid-span when a
/// span straddles the edge. Wide glyphs that would not fit whole are
/// dropped rather than split.
pub fn clip_lines(lines: &[SpanLine], width: u16) -> Vec<SpanLine> {
    lines.iter().map(|line| clip_line(line, width as usize)).collect()
}

fn clip_line(line: &[Span], width: usize) -> SpanLine {
    let mut out: SpanLine = Vec::new();
    let mut used = 0usize;
    for span in line {
        if used >= width {
            break;
        }
        let remaining = width - used;
        if span.width() <= remaining {
            used += span.width();
            out.push(span.clone());
            continue;
        }
        let mut text = String::new();
        let mut taken = 0usize;
        for ch in span.text.chars() {
            let w = ch.width().unwrap_or(0);
            if taken + w > remaining {
                break;
            }
            taken += w;
            text.push(ch);
        }
        if !text.is_empty() {
            out.push(Span::styled(text, span.style));
        }
        break;
    }
    out
}

/// Prefix a line with spaces so its content sits centred in `width`.
pub fn centered(mut line: SpanLine, width: u16) -> SpanLine {
    let content = line_width(&line);
    let width = width as usize;
    if content < width {
        let pad = (width - content) / 2;
        line.insert(0, Span::new(" ".repeat(pad)));
    }
    line
}
