//! Assembles the dashboard frame from the latest snapshot. Pure read of
//! `AppState`; all arithmetic happened on the tick that built the
//! snapshot. Zero-padding and number formatting live here because they
//! are display transforms, not countdown semantics.

use crate::state::AppState;
use crate::ui::layout::{centered, clip_lines};
use crate::ui::progress::{BAR_EMPTY, BAR_FILLED, bar_cells};
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
}

#[derive(Debug, Clone, Copy)]
pub struct FrameSize {
    pub width: u16,
    pub height: u16,
}

pub struct Renderer;

const BAR_WIDTH: usize = 40;

impl Renderer {
    pub fn render(state: &AppState, size: FrameSize) -> RenderFrame {
        let theme = state.theme();
        let snap = state.snapshot();
        let width = size.width.max(20);
        let mut lines: Vec<SpanLine> = Vec::new();

        if state.is_complete() {
            for line in state.confetti() {
                lines.push(line.clone());
            }
            lines.push(Vec::new());
            let banner = if state.grinch() {
                "IT'S OVER. HAPPY NOW?"
            } else {
                "*** LEAVE HAS BEGUN — GO HOME ***"
            };
            lines.push(centered(
                vec![Span::styled(banner, theme.alert)],
                width,
            ));
            lines.push(Vec::new());
        } else {
            for line in state.snow().render(&theme) {
                lines.push(line);
            }
            lines.push(Vec::new());
        }

        let title = if snap.pre_launch {
            "HOMESTRETCH — countdown not started yet"
        } else if state.grinch() {
            "HOMESTRETCH — the clock, begrudgingly"
        } else {
            "HOMESTRETCH — countdown to leave"
        };
        lines.push(centered(vec![Span::styled(title, theme.title)], width));
        lines.push(centered(
            vec![Span::styled(
                format!(
                    "{} {} {}",
                    snap.now.date.weekday().short_name(),
                    snap.now.date.to_iso(),
                    snap.now.time.to_iso()
                ),
                theme.hint,
            )],
            width,
        ));
        lines.push(Vec::new());

        let shown = if snap.pre_launch {
            &snap.until_start
        } else {
            &snap.breakdown
        };
        let mut countdown: SpanLine = Vec::new();
        for (value, unit) in [
            (shown.weeks, "wk"),
            (shown.days, "d"),
            (shown.hours, "h"),
            (shown.minutes, "m"),
            (shown.seconds, "s"),
        ] {
            countdown.push(Span::styled(pad2(value), theme.value));
            countdown.push(Span::styled(format!(" {unit}   "), theme.unit));
        }
        lines.push(centered(countdown, width));
        lines.push(centered(
            vec![Span::styled(
                format!(
                    "{} days · {} hours · {} minutes to go",
                    shown.total_days, shown.total_hours, shown.total_minutes
                ),
                theme.label,
            )],
            width,
        ));
        lines.push(Vec::new());

        lines.push(centered(progress_line(&theme, snap.breakdown.progress_percentage), width));
        lines.push(Vec::new());

        if !snap.pre_launch {
            let saturday_tag = if state.extra_saturday() { " (+Sat)" } else { "" };
            lines.push(metric_line(
                &theme,
                "workdays left",
                format!("{}{}", snap.workdays, saturday_tag),
            ));
            lines.push(metric_line(
                &theme,
                "work hours left",
                format!("{:.1}", snap.work_hours),
            ));
            lines.push(metric_line(
                &theme,
                "office days left",
                snap.office_days.to_string(),
            ));
            lines.push(metric_line(
                &theme,
                "workdays this stretch",
                format!("~{}", snap.interval_workdays),
            ));
        }

        if state.tracker_visible() {
            lines.push(Vec::new());
            let tracker = &snap.departure;
            let text = if tracker.departed {
                format!(
                    "departure tracker: gone {} days (≈ {:.0} accrued)",
                    tracker.days_since, tracker.estimated_total
                )
            } else {
                format!(
                    "departure tracker: {} workdays until they leave",
                    tracker.workdays_until
                )
            };
            lines.push(vec![Span::new("  "), Span::styled(text, theme.alert)]);
        }

        lines.push(Vec::new());
        lines.push(vec![
            Span::new("  "),
            Span::styled(format!("\u{201c}{}\u{201d}", state.current_quote()), theme.quote),
        ]);
        lines.push(Vec::new());
        lines.push(vec![
            Span::new("  "),
            Span::styled(
                format!(
                    "checked {} times · [s]aturday [p]eer tracker [g]rinch [q]uit",
                    state.check_count()
                ),
                theme.hint,
            ),
        ]);

        lines.truncate(size.height.max(1) as usize);
        RenderFrame {
            lines: clip_lines(&lines, width),
        }
    }
}

fn progress_line(theme: &Theme, percent: u8) -> SpanLine {
    let (filled, empty) = bar_cells(percent, BAR_WIDTH);
    vec![
        Span::styled(BAR_FILLED.to_string().repeat(filled), theme.bar_filled),
        Span::styled(BAR_EMPTY.to_string().repeat(empty), theme.bar_empty),
        Span::styled(format!(" {percent:>3}%"), theme.value),
    ]
}

fn metric_line(theme: &Theme, label: &str, value: String) -> SpanLine {
    vec![
        Span::new("  "),
        Span::styled(format!("{label:<22}"), theme.label),
        Span::styled(value, theme.value),
    ]
}

/// Two-digit zero padding for the countdown components.
fn pad2(value: u64) -> String {
    format!("{value:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::{Date, DateTime, Time};
    use crate::core::clock::{UtcOffset, epoch_from_civil};
    use crate::core::config::CountdownConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cet(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> i64 {
        epoch_from_civil(
            DateTime {
                date: Date {
                    year: y,
                    month: mo,
                    day: d,
                },
                time: Time {
                    hour: h,
                    minute: mi,
                    second: s,
                },
            },
            UtcOffset::CET,
        )
    }

    fn frame_text(frame: &RenderFrame) -> String {
        frame
            .lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|span| span.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn state_at(now: i64) -> AppState {
        AppState::with_rng(
            CountdownConfig::default(),
            12,
            now,
            StdRng::seed_from_u64(1),
        )
    }

    const SIZE: FrameSize = FrameSize {
        width: 100,
        height: 40,
    };

    #[test]
    fn running_dashboard_pads_components_to_two_digits() {
        let state = state_at(cet(2025, 12, 1, 10, 0, 5));
        let text = frame_text(&Renderer::render(&state, SIZE));
        // 18d 7h 59m 55s remaining -> one-digit values zero padded.
        assert!(text.contains("02 wk"));
        assert!(text.contains("04 d"));
        assert!(text.contains("07 h"));
        assert!(text.contains("59 m"));
        assert!(text.contains("55 s"));
        assert!(text.contains("workdays left"));
        assert!(text.contains("checked 12 times"));
    }

    #[test]
    fn completion_renders_the_banner_instead_of_snow() {
        let mut state = state_at(cet(2025, 12, 19, 17, 59, 59));
        state.tick(cet(2025, 12, 19, 18, 0, 0));
        let text = frame_text(&Renderer::render(&state, SIZE));
        assert!(text.contains("LEAVE HAS BEGUN"));
        assert!(text.contains("100%"));
        assert!(!text.contains('❄'));
    }

    #[test]
    fn tracker_panel_appears_only_when_toggled() {
        let mut state = state_at(cet(2025, 12, 1, 10, 0, 0));
        let hidden = frame_text(&Renderer::render(&state, SIZE));
        assert!(!hidden.contains("departure tracker"));
        state.toggle_tracker();
        let shown = frame_text(&Renderer::render(&state, SIZE));
        assert!(shown.contains("departure tracker"));
    }

    #[test]
    fn grinch_mode_changes_banner_and_quote_deck() {
        let mut state = state_at(cet(2025, 12, 1, 10, 0, 0));
        state.toggle_grinch();
        let text = frame_text(&Renderer::render(&state, SIZE));
        assert!(text.contains("begrudgingly"));
    }

    #[test]
    fn frame_respects_the_terminal_height_and_width() {
        let state = state_at(cet(2025, 12, 1, 10, 0, 0));
        let small = FrameSize {
            width: 24,
            height: 8,
        };
        let frame = Renderer::render(&state, small);
        assert!(frame.lines.len() <= 8);
        for line in &frame.lines {
            assert!(crate::ui::span::line_width(line) <= 24);
        }
    }

    #[test]
    fn pre_launch_shows_the_gap_until_start() {
        let state = state_at(cet(2025, 11, 1, 12, 0, 0));
        let text = frame_text(&Renderer::render(&state, SIZE));
        assert!(text.contains("not started yet"));
        assert!(text.contains("  0%"));
    }
}
