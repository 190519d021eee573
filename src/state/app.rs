//! Central mutable state: the engine, the user toggles, the cosmetic
//! bits, and the per-tick snapshot the renderer reads.

use crate::core::breakdown::CountdownBreakdown;
use crate::core::calendar::{Date, DateTime};
use crate::core::clock::{EpochMillis, civil_from_epoch};
use crate::core::config::CountdownConfig;
use crate::core::engine::CountdownEngine;
use crate::core::metrics::{
    DepartureReport, departure_report, interval_workday_estimate, remaining_office_days,
    remaining_work_hours, remaining_workdays,
};
use crate::quotes::QuoteDeck;
use crate::ui::confetti;
use crate::ui::snowfall::Snowfield;
use crate::ui::span::SpanLine;
use crate::ui::theme::Theme;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Everything the dashboard shows for one instant, rebuilt on each tick.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub now: DateTime,
    pub breakdown: CountdownBreakdown,
    pub pre_launch: bool,
    pub until_start: CountdownBreakdown,
    pub workdays: u32,
    pub work_hours: f64,
    pub office_days: u32,
    pub departure: DepartureReport,
    pub interval_workdays: u64,
}

pub struct AppState {
    config: CountdownConfig,
    engine: CountdownEngine,
    end_date: Date,
    departure_civil: DateTime,

    extra_saturday: bool,
    show_tracker: bool,
    grinch: bool,

    quotes: QuoteDeck,
    snow: Snowfield,
    confetti: Vec<SpanLine>,
    width: u16,
    rng: StdRng,

    check_count: u64,
    snapshot: DashboardSnapshot,
    exit: bool,
}

const SNOW_ROWS: u16 = 5;
const CONFETTI_ROWS: usize = 3;
const INITIAL_WIDTH: u16 = 80;

impl AppState {
    pub fn new(config: CountdownConfig, check_count: u64, now: EpochMillis) -> Self {
        Self::with_rng(config, check_count, now, StdRng::from_entropy())
    }

    /// Seeded constructor so tests get reproducible cosmetics.
    pub fn with_rng(
        config: CountdownConfig,
        check_count: u64,
        now: EpochMillis,
        mut rng: StdRng,
    ) -> Self {
        let engine = CountdownEngine::new(&config);
        let offset = config.offset;
        let end_date = civil_from_epoch(config.end, offset).date;
        let departure_civil = civil_from_epoch(config.departure, offset);
        let snow = Snowfield::new(INITIAL_WIDTH, SNOW_ROWS, &mut rng);
        let mut state = Self {
            config,
            engine,
            end_date,
            departure_civil,
            extra_saturday: false,
            show_tracker: false,
            grinch: false,
            quotes: QuoteDeck::new(),
            snow,
            confetti: Vec::new(),
            width: INITIAL_WIDTH,
            rng,
            check_count,
            // Scaffold only; the tick below fills in the real values.
            snapshot: DashboardSnapshot {
                now: civil_from_epoch(now, offset),
                breakdown: CountdownBreakdown::complete(),
                pre_launch: false,
                until_start: CountdownBreakdown::complete(),
                workdays: 0,
                work_hours: 0.0,
                office_days: 0,
                departure: DepartureReport {
                    departed: false,
                    workdays_until: 0,
                    days_since: 0,
                    estimated_total: 0.0,
                },
                interval_workdays: 0,
            },
            exit: false,
        };
        state.tick(now);
        state
    }

    /// Recompute the snapshot for `now`. Returns true exactly once, on
    /// the tick that latches completion; the caller cancels the 1-second
    /// schedule on that signal.
    pub fn tick(&mut self, now: EpochMillis) -> bool {
        let was_complete = self.engine.is_complete();
        let breakdown = self.engine.tick(now);
        let civil = civil_from_epoch(now, self.config.offset);

        self.snapshot = DashboardSnapshot {
            now: civil,
            breakdown,
            pre_launch: self.engine.is_pre_launch(now),
            until_start: self.engine.time_until_start(now),
            workdays: remaining_workdays(
                civil,
                self.end_date,
                self.extra_saturday,
                &self.config.workday,
            ),
            work_hours: remaining_work_hours(
                civil,
                self.end_date,
                self.extra_saturday,
                &self.config.workday,
            ),
            office_days: remaining_office_days(civil, self.end_date, &self.config.workday),
            departure: departure_report(
                civil,
                self.departure_civil,
                self.config.departure_extra_date,
                self.config.departure_daily_rate,
                &self.config.workday,
            ),
            interval_workdays: interval_workday_estimate(self.config.start, self.config.end),
        };

        let newly_complete = self.engine.is_complete() && !was_complete;
        if newly_complete {
            self.throw_confetti();
        }
        newly_complete
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn is_complete(&self) -> bool {
        self.engine.is_complete()
    }

    // ── Toggles ──────────────────────────────────────────────────────────

    pub fn toggle_extra_saturday(&mut self) {
        self.extra_saturday = !self.extra_saturday;
    }

    pub fn toggle_tracker(&mut self) {
        self.show_tracker = !self.show_tracker;
    }

    pub fn toggle_grinch(&mut self) {
        self.grinch = !self.grinch;
        self.quotes.set_grinch(self.grinch);
    }

    pub fn extra_saturday(&self) -> bool {
        self.extra_saturday
    }

    pub fn tracker_visible(&self) -> bool {
        self.show_tracker
    }

    pub fn grinch(&self) -> bool {
        self.grinch
    }

    pub fn theme(&self) -> Theme {
        if self.grinch {
            Theme::grinch()
        } else {
            Theme::festive()
        }
    }

    // ── Cosmetics ────────────────────────────────────────────────────────

    pub fn rotate_quote(&mut self) {
        self.quotes.advance(&mut self.rng);
    }

    pub fn current_quote(&self) -> &'static str {
        self.quotes.current()
    }

    pub fn drift_snow(&mut self) {
        self.snow.drift(&mut self.rng);
    }

    pub fn snow(&self) -> &Snowfield {
        &self.snow
    }

    pub fn confetti(&self) -> &[SpanLine] {
        &self.confetti
    }

    pub fn handle_resize(&mut self, width: u16) {
        self.width = width.max(1);
        self.snow.resize(self.width, SNOW_ROWS);
        if self.engine.is_complete() {
            self.throw_confetti();
        }
    }

    fn throw_confetti(&mut self) {
        self.confetti = (0..CONFETTI_ROWS)
            .map(|_| confetti::burst_line(self.width, &mut self.rng))
            .collect();
    }

    // ── Session ──────────────────────────────────────────────────────────

    pub fn check_count(&self) -> u64 {
        self.check_count
    }

    pub fn request_exit(&mut self) {
        self.exit = true;
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::{Date, Time};
    use crate::core::clock::{UtcOffset, epoch_from_civil};
    use rand::SeedableRng;

    fn cet(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> EpochMillis {
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

    fn state_at(now: EpochMillis) -> AppState {
        AppState::with_rng(
            CountdownConfig::default(),
            3,
            now,
            StdRng::seed_from_u64(0),
        )
    }

    #[test]
    fn snapshot_reflects_the_tick_instant() {
        let state = state_at(cet(2025, 12, 1, 10, 0, 0));
        let snap = state.snapshot();
        assert!(!snap.breakdown.is_complete);
        assert!(!snap.pre_launch);
        // Mon Dec 1 through Fri Dec 19: three full workweeks.
        assert_eq!(snap.workdays, 15);
        assert_eq!(snap.office_days, 9);
        assert!(snap.departure.workdays_until > 0);
        assert_eq!(snap.interval_workdays, 29);
    }

    #[test]
    fn completion_tick_fires_once_and_spawns_confetti() {
        let mut state = state_at(cet(2025, 12, 19, 17, 59, 59));
        assert!(state.confetti().is_empty());
        assert!(state.tick(cet(2025, 12, 19, 18, 0, 0)));
        assert!(state.is_complete());
        assert!(!state.confetti().is_empty());
        // Latched: a later tick reports no fresh completion.
        assert!(!state.tick(cet(2025, 12, 19, 18, 0, 1)));
        assert!(!state.tick(cet(2025, 12, 19, 17, 0, 0)));
        assert!(state.is_complete());
    }

    #[test]
    fn confetti_tracks_the_terminal_width() {
        let mut state = state_at(cet(2025, 12, 19, 17, 59, 59));
        state.tick(cet(2025, 12, 19, 18, 0, 0));
        state.handle_resize(120);
        assert!(!state.confetti().is_empty());
        for line in state.confetti() {
            assert_eq!(crate::ui::span::line_width(line), 120);
        }
    }

    #[test]
    fn extra_saturday_toggle_shows_up_after_refresh() {
        let now = cet(2025, 12, 1, 10, 0, 0);
        let mut state = state_at(now);
        let before = state.snapshot().workdays;
        state.toggle_extra_saturday();
        state.tick(now);
        assert_eq!(state.snapshot().workdays, before + 1);
        state.toggle_extra_saturday();
        state.tick(now);
        assert_eq!(state.snapshot().workdays, before);
    }

    #[test]
    fn grinch_toggle_swaps_quotes_and_theme() {
        let mut state = state_at(cet(2025, 12, 1, 10, 0, 0));
        let festive_quote = state.current_quote();
        state.toggle_grinch();
        assert!(state.grinch());
        assert_ne!(state.current_quote(), festive_quote);
        assert!(state.theme().title.color == Some(crate::ui::style::Color::Green));
    }

    #[test]
    fn pre_launch_exposes_the_gap_until_start() {
        let state = state_at(cet(2025, 11, 1, 12, 0, 0));
        let snap = state.snapshot();
        assert!(snap.pre_launch);
        assert!(!snap.until_start.is_complete);
        assert_eq!(snap.breakdown.progress_percentage, 0);
    }
}
