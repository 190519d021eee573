//! Proleptic-Gregorian civil date/time values and the arithmetic the
//! countdown needs. No timezone database: every instant in this program
//! carries one fixed UTC offset (see `clock`).

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// A civil wall-clock stamp. Ordering is lexicographic (date, then time),
/// which matches chronological order for stamps in the same offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Weekday(pub u8);

impl Weekday {
    pub const MON: Self = Self(0);
    pub const TUE: Self = Self(1);
    pub const WED: Self = Self(2);
    pub const THU: Self = Self(3);
    pub const FRI: Self = Self(4);
    pub const SAT: Self = Self(5);
    pub const SUN: Self = Self(6);

    pub fn short_name(self) -> &'static str {
        ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"][self.0 as usize % 7]
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Sakamoto's method, shifted so Monday is 0.
pub fn weekday_of(date: Date) -> Weekday {
    let t: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if date.month < 3 {
        date.year - 1
    } else {
        date.year
    };
    let m = date.month as i32;
    let d = date.day as i32;
    let raw = (y + y / 4 - y / 100 + y / 400 + t[(m - 1) as usize] + d) % 7;
    Weekday(((raw + 6) % 7) as u8)
}

/// Days since 1970-01-01 to civil date (Howard Hinnant's algorithm).
pub fn date_from_unix_days(days: i64) -> Date {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    Date {
        year: y as i32,
        month: m as u8,
        day: d as u8,
    }
}

/// Civil date to days since 1970-01-01 (inverse of `date_from_unix_days`).
pub fn unix_days_of(date: Date) -> i64 {
    let y = if date.month <= 2 {
        date.year - 1
    } else {
        date.year
    } as i64;
    let m = date.month as i64;
    let d = date.day as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

pub fn validate_date(year: i32, month: u8, day: u8) -> Result<Date, String> {
    if month < 1 || month > 12 {
        return Err(format!("Invalid month: {month}"));
    }
    let max_day = days_in_month(year, month);
    if day < 1 || day > max_day {
        return Err(format!(
            "Invalid day {day} for {}/{year} (max {max_day})",
            month
        ));
    }
    Ok(Date { year, month, day })
}

pub fn validate_time(hour: u8, minute: u8, second: u8) -> Result<Time, String> {
    if hour > 23 {
        return Err(format!("Invalid hour: {hour}"));
    }
    if minute > 59 {
        return Err(format!("Invalid minute: {minute}"));
    }
    if second > 59 {
        return Err(format!("Invalid second: {second}"));
    }
    Ok(Time {
        hour,
        minute,
        second,
    })
}

impl Date {
    pub fn from_parts(year: i32, month: u8, day: u8) -> Result<Self, String> {
        validate_date(year, month, day)
    }

    pub fn weekday(self) -> Weekday {
        weekday_of(self)
    }

    pub fn next_day(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Date {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Date {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        } else {
            Date {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Time {
    pub fn from_parts(hour: u8, minute: u8, second: u8) -> Result<Self, String> {
        validate_time(hour, minute, second)
    }

    /// Hour of day as a fraction, e.g. 13:30:00 -> 13.5.
    pub fn fractional_hour(self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0
    }

    pub fn second_of_day(self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    pub fn to_iso(self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl DateTime {
    pub fn to_iso(self) -> String {
        format!("{}T{}", self.date.to_iso(), self.time.to_iso())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_of_known_dates() {
        // 2025-11-10 was a Monday, 2025-12-19 a Friday.
        let mon = Date::from_parts(2025, 11, 10).unwrap();
        let fri = Date::from_parts(2025, 12, 19).unwrap();
        assert_eq!(weekday_of(mon), Weekday::MON);
        assert_eq!(weekday_of(fri), Weekday::FRI);
        assert_eq!(
            weekday_of(Date::from_parts(2025, 11, 29).unwrap()),
            Weekday::SAT
        );
    }

    #[test]
    fn unix_day_round_trip() {
        for days in [-719468, -1, 0, 1, 19_000, 20_440, 1_000_000] {
            assert_eq!(unix_days_of(date_from_unix_days(days)), days);
        }
        let d = date_from_unix_days(20_441);
        assert_eq!((d.year, d.month, d.day), (2025, 12, 19));
    }

    #[test]
    fn next_day_rolls_months_and_years() {
        let leap = Date::from_parts(2024, 2, 28).unwrap();
        assert_eq!(leap.next_day(), Date::from_parts(2024, 2, 29).unwrap());
        let nye = Date::from_parts(2025, 12, 31).unwrap();
        assert_eq!(nye.next_day(), Date::from_parts(2026, 1, 1).unwrap());
    }

    #[test]
    fn validation_rejects_out_of_range() {
        assert!(validate_date(2025, 13, 1).is_err());
        assert!(validate_date(2025, 2, 29).is_err());
        assert!(validate_time(24, 0, 0).is_err());
        assert!(Time::from_parts(18, 0, 0).is_ok());
    }

    #[test]
    fn fractional_hour_includes_minutes_and_seconds() {
        let t = Time::from_parts(13, 30, 0).unwrap();
        assert!((t.fractional_hour() - 13.5).abs() < 1e-9);
    }
}
