//! Epoch timestamps and conversion to civil time under the one fixed
//! offset this program uses (CET, +01:00).

use crate::core::calendar::{DateTime, Time, date_from_unix_days, unix_days_of};

/// Milliseconds since the Unix epoch. Signed so pre-epoch math stays sane.
pub type EpochMillis = i64;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * MILLIS_PER_SECOND;

/// Fixed offset from UTC in whole seconds, east positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// CET without DST, the offset every configured instant carries.
    pub const CET: Self = Self { seconds: 3600 };

    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    pub fn seconds(self) -> i32 {
        self.seconds
    }
}

/// Wall-clock read. Falls back to the epoch if the system clock is
/// unreadable, matching the degrade-to-zero policy of the rest of the core.
pub fn system_now_millis() -> EpochMillis {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as EpochMillis
}

/// Epoch instant to the civil stamp a clock on the wall would show.
pub fn civil_from_epoch(ms: EpochMillis, offset: UtcOffset) -> DateTime {
    let shifted = ms.div_euclid(MILLIS_PER_SECOND) + offset.seconds() as i64;
    let days = shifted.div_euclid(SECONDS_PER_DAY);
    let sod = shifted.rem_euclid(SECONDS_PER_DAY);
    let time = Time {
        hour: (sod / 3600) as u8,
        minute: (sod % 3600 / 60) as u8,
        second: (sod % 60) as u8,
    };
    DateTime {
        date: date_from_unix_days(days),
        time,
    }
}

/// Civil stamp (interpreted in `offset`) to an epoch instant.
pub fn epoch_from_civil(stamp: DateTime, offset: UtcOffset) -> EpochMillis {
    let days = unix_days_of(stamp.date);
    let secs = days * SECONDS_PER_DAY + stamp.time.second_of_day() as i64
        - offset.seconds() as i64;
    secs * MILLIS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::{Date, Time};

    fn stamp(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> DateTime {
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
        }
    }

    #[test]
    fn civil_round_trip_under_cet() {
        let end = stamp(2025, 12, 19, 18, 0, 0);
        let ms = epoch_from_civil(end, UtcOffset::CET);
        assert_eq!(civil_from_epoch(ms, UtcOffset::CET), end);
        // 18:00 CET is 17:00 UTC.
        let utc = civil_from_epoch(ms, UtcOffset::from_seconds(0));
        assert_eq!(utc.time.hour, 17);
    }

    #[test]
    fn offset_shifts_across_midnight() {
        let just_before = stamp(2025, 12, 19, 0, 30, 0);
        let ms = epoch_from_civil(just_before, UtcOffset::CET);
        let utc = civil_from_epoch(ms, UtcOffset::from_seconds(0));
        assert_eq!(utc.date.day, 18);
        assert_eq!(utc.time.hour, 23);
    }

    #[test]
    fn millisecond_remainders_truncate_toward_the_second() {
        let base = epoch_from_civil(stamp(2025, 11, 10, 9, 0, 0), UtcOffset::CET);
        let a = civil_from_epoch(base + 999, UtcOffset::CET);
        assert_eq!(a.time.second, 0);
        let b = civil_from_epoch(base + 1000, UtcOffset::CET);
        assert_eq!(b.time.second, 1);
    }

    #[test]
    fn negative_offsets_shift_the_civil_clock_west() {
        let off = UtcOffset::from_seconds(-(5 * 3600 + 30 * 60));
        let local = stamp(2025, 11, 10, 9, 0, 0);
        let ms = epoch_from_civil(local, off);
        assert_eq!(civil_from_epoch(ms, off), local);
        // 09:00 at -05:30 is 14:30 UTC.
        let utc = civil_from_epoch(ms, UtcOffset::from_seconds(0));
        assert_eq!(utc.time.hour, 14);
        assert_eq!(utc.time.minute, 30);
    }
}
