//! Fixed configuration: the countdown interval, the secondary departure
//! target, the intraday work model, and the UTC offset every instant is
//! interpreted in. Defaults are compiled in; an optional YAML file can
//! override them field by field.

use crate::core::calendar::{Date, DateTime, validate_date, validate_time};
use crate::core::clock::{EpochMillis, UtcOffset, epoch_from_civil};
use regex::Regex;
use serde::Deserialize;

/// Intraday accrual boundaries, whole hours of the local day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkdayModel {
    pub day_start: u8,
    pub lunch_start: u8,
    pub lunch_end: u8,
    pub day_end: u8,
}

impl WorkdayModel {
    /// Credited hours in a full day: morning block plus afternoon block,
    /// lunch excluded.
    pub fn full_day_hours(&self) -> f64 {
        (self.lunch_start - self.day_start) as f64 + (self.day_end - self.lunch_end) as f64
    }
}

impl Default for WorkdayModel {
    fn default() -> Self {
        Self {
            day_start: 9,
            lunch_start: 12,
            lunch_end: 13,
            day_end: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountdownConfig {
    pub start: EpochMillis,
    pub end: EpochMillis,
    /// The other person's fixed departure instant.
    pub departure: EpochMillis,
    /// One designated weekend date that still counts toward the tracker.
    pub departure_extra_date: Option<Date>,
    /// Estimate multiplier: units per elapsed day since departure.
    pub departure_daily_rate: f64,
    pub offset: UtcOffset,
    pub workday: WorkdayModel,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        let offset = UtcOffset::CET;
        Self {
            start: instant(2025, 11, 10, 9, 0, 0, offset),
            end: instant(2025, 12, 19, 18, 0, 0, offset),
            departure: instant(2025, 12, 5, 17, 0, 0, offset),
            departure_extra_date: Some(Date {
                year: 2025,
                month: 11,
                day: 29,
            }),
            departure_daily_rate: 42.0,
            offset,
            workday: WorkdayModel::default(),
        }
    }
}

fn instant(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8, offset: UtcOffset) -> EpochMillis {
    epoch_from_civil(
        DateTime {
            date: Date {
                year: y,
                month: mo,
                day: d,
            },
            time: crate::core::calendar::Time {
                hour: h,
                minute: mi,
                second: s,
            },
        },
        offset,
    )
}

/// On-disk shape. Every field optional so a file can override just one.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    start: Option<String>,
    end: Option<String>,
    departure: Option<String>,
    departure_extra_date: Option<String>,
    departure_daily_rate: Option<f64>,
    utc_offset: Option<String>,
}

impl CountdownConfig {
    pub fn load_from_yaml(source: &str) -> Result<Self, String> {
        let file: ConfigFile =
            serde_yaml::from_str(source).map_err(|e| format!("invalid config: {e}"))?;
        let mut config = Self::default();
        if let Some(s) = &file.utc_offset {
            config.offset = parse_offset(s)?;
        }
        if let Some(s) = &file.start {
            config.start = parse_instant(s)?;
        }
        if let Some(s) = &file.end {
            config.end = parse_instant(s)?;
        }
        if let Some(s) = &file.departure {
            config.departure = parse_instant(s)?;
        }
        if let Some(s) = &file.departure_extra_date {
            config.departure_extra_date = Some(parse_date(s)?);
        }
        if let Some(rate) = file.departure_daily_rate {
            config.departure_daily_rate = rate;
        }
        if config.end <= config.start {
            return Err("countdown end must come after its start".to_string());
        }
        Ok(config)
    }
}

/// `YYYY-MM-DDTHH:MM:SS+HH:MM`, offset mandatory. The instant is converted
/// with the offset it carries, not the display offset.
pub fn parse_instant(text: &str) -> Result<EpochMillis, String> {
    let re = Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})([+-]\d{2}:\d{2})$",
    )
    .expect("instant pattern is valid");
    let caps = re
        .captures(text)
        .ok_or_else(|| format!("invalid instant '{text}', expected YYYY-MM-DDTHH:MM:SS+HH:MM"))?;

    let num = |i: usize| caps[i].parse::<u32>().map_err(|e| e.to_string());
    let date = validate_date(num(1)? as i32, num(2)? as u8, num(3)? as u8)?;
    let time = validate_time(num(4)? as u8, num(5)? as u8, num(6)? as u8)?;
    let offset = parse_offset(&caps[7])?;
    Ok(epoch_from_civil(DateTime { date, time }, offset))
}

pub fn parse_date(text: &str) -> Result<Date, String> {
    let re = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("date pattern is valid");
    let caps = re
        .captures(text)
        .ok_or_else(|| format!("invalid date '{text}', expected YYYY-MM-DD"))?;
    let year = caps[1].parse::<i32>().map_err(|e| e.to_string())?;
    let month = caps[2].parse::<u8>().map_err(|e| e.to_string())?;
    let day = caps[3].parse::<u8>().map_err(|e| e.to_string())?;
    validate_date(year, month, day)
}

pub fn parse_offset(text: &str) -> Result<UtcOffset, String> {
    let re = Regex::new(r"^([+-])(\d{2}):(\d{2})$").expect("offset pattern is valid");
    let caps = re
        .captures(text)
        .ok_or_else(|| format!("invalid offset '{text}', expected +HH:MM"))?;
    let hours = caps[2].parse::<i32>().map_err(|e| e.to_string())?;
    let minutes = caps[3].parse::<i32>().map_err(|e| e.to_string())?;
    if hours > 14 || minutes > 59 {
        return Err(format!("offset '{text}' out of range"));
    }
    // The sign covers the whole offset, minutes included: -00:30 exists.
    let mut seconds = hours * 3600 + minutes * 60;
    if &caps[1] == "-" {
        seconds = -seconds;
    }
    Ok(UtcOffset::from_seconds(seconds))
}
