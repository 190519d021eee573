//! Decomposition of a remaining duration into the display units the
//! dashboard shows, plus elapsed-percentage arithmetic.

use crate::core::clock::EpochMillis;

/// Snapshot of a remaining duration. `weeks`..`seconds` are remainders of
/// the next-larger unit (days < 7, hours < 24, minutes and seconds < 60);
/// the `total_*` fields are whole-unit counts with no modulo reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownBreakdown {
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub total_days: u64,
    pub total_hours: u64,
    pub total_minutes: u64,
    pub total_seconds: u64,
    pub is_complete: bool,
    pub progress_percentage: u8,
}

impl CountdownBreakdown {
    /// The canonical terminal value: everything zero, 100% elapsed.
    pub const fn complete() -> Self {
        Self {
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            total_days: 0,
            total_hours: 0,
            total_minutes: 0,
            total_seconds: 0,
            is_complete: true,
            progress_percentage: 100,
        }
    }

    /// Decompose a positive remaining duration. Unit order is fixed:
    /// seconds, then minutes, hours, days, weeks, each the floor of the
    /// one below it.
    pub fn from_remaining_millis(remaining_ms: i64, progress_percentage: u8) -> Self {
        if remaining_ms <= 0 {
            return Self::complete();
        }
        let total_seconds = remaining_ms as u64 / 1000;
        let total_minutes = total_seconds / 60;
        let total_hours = total_minutes / 60;
        let total_days = total_hours / 24;
        let weeks = total_days / 7;

        Self {
            weeks,
            days: total_days % 7,
            hours: total_hours % 24,
            minutes: total_minutes % 60,
            seconds: total_seconds % 60,
            total_days,
            total_hours,
            total_minutes,
            total_seconds,
            is_complete: false,
            progress_percentage,
        }
    }
}

/// Elapsed share of [start, end), rounded half up to the nearest whole
/// percent, clamped to 0 below `start` and 100 at or past `end`.
/// In the final second before `end` this reports 100 while the countdown
/// is still running; that asymmetry is deliberate and tested.
pub fn progress_percent(now: EpochMillis, start: EpochMillis, end: EpochMillis) -> u8 {
    if end <= start || now >= end {
        return 100;
    }
    if now < start {
        return 0;
    }
    let total = (end - start) as f64;
    let elapsed = (now - start) as f64;
    (elapsed / total * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 3_600_000;
    const DAY_MS: i64 = 24 * HOUR_MS;

    #[test]
    fn decomposes_in_unit_order() {
        // 2 weeks, 3 days, 4 hours, 5 minutes, 6 seconds.
        let ms = (17 * DAY_MS) + 4 * HOUR_MS + 5 * 60_000 + 6_000;
        let b = CountdownBreakdown::from_remaining_millis(ms, 42);
        assert_eq!(b.weeks, 2);
        assert_eq!(b.days, 3);
        assert_eq!(b.hours, 4);
        assert_eq!(b.minutes, 5);
        assert_eq!(b.seconds, 6);
        assert_eq!(b.total_days, 17);
        assert_eq!(b.total_hours, 17 * 24 + 4);
        assert_eq!(b.total_minutes, (17 * 24 + 4) * 60 + 5);
        assert_eq!(b.total_seconds, ((17 * 24 + 4) * 60 + 5) * 60 + 6);
        assert!(!b.is_complete);
        assert_eq!(b.progress_percentage, 42);
    }

    #[test]
    fn sub_second_remainders_floor_to_zero_seconds() {
        let b = CountdownBreakdown::from_remaining_millis(999, 99);
        assert_eq!(b.total_seconds, 0);
        assert!(!b.is_complete);
        let b = CountdownBreakdown::from_remaining_millis(1000, 99);
        assert_eq!(b.total_seconds, 1);
    }

    #[test]
    fn zero_and_negative_yield_the_terminal_value() {
        for ms in [0, -1, -DAY_MS] {
            let b = CountdownBreakdown::from_remaining_millis(ms, 7);
            assert_eq!(b, CountdownBreakdown::complete());
            assert_eq!(b.progress_percentage, 100);
        }
    }

    #[test]
    fn display_units_stay_below_their_period() {
        let mut ms = 61 * DAY_MS + 23 * HOUR_MS + 59 * 60_000 + 59_000;
        while ms > 0 {
            let b = CountdownBreakdown::from_remaining_millis(ms, 0);
            assert!(b.days < 7);
            assert!(b.hours < 24);
            assert!(b.minutes < 60);
            assert!(b.seconds < 60);
            ms -= 7 * HOUR_MS + 13_000;
        }
    }

    #[test]
    fn totals_never_increase_as_time_advances() {
        let mut prev = CountdownBreakdown::from_remaining_millis(3 * DAY_MS, 0);
        for step in 1..200 {
            let b = CountdownBreakdown::from_remaining_millis(3 * DAY_MS - step * 20_000, 0);
            assert!(b.total_seconds <= prev.total_seconds);
            assert!(b.total_minutes <= prev.total_minutes);
            assert!(b.total_hours <= prev.total_hours);
            assert!(b.total_days <= prev.total_days);
            prev = b;
        }
    }

    #[test]
    fn progress_clamps_and_rounds() {
        assert_eq!(progress_percent(-50, 0, 100), 0);
        assert_eq!(progress_percent(0, 0, 100), 0);
        assert_eq!(progress_percent(50, 0, 100), 50);
        assert_eq!(progress_percent(100, 0, 100), 100);
        assert_eq!(progress_percent(150, 0, 100), 100);
        // Half rounds up.
        assert_eq!(progress_percent(5, 0, 1000), 1);
        assert_eq!(progress_percent(4, 0, 1000), 0);
    }

    #[test]
    fn progress_is_monotone_over_the_interval() {
        let mut last = 0u8;
        for now in (0..=1_000_000).step_by(37_001) {
            let p = progress_percent(now, 0, 1_000_000);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 100);
    }
}
