//! Calendar-rule metrics derived from "now": remaining workdays and
//! work-hours, office-day counts, and the secondary departure tracker.
//! Everything here is pure over (civil now, fixed config) and recomputed
//! on every engine tick.

use crate::core::calendar::{Date, DateTime, Time, Weekday, unix_days_of, weekday_of};
use crate::core::clock::{EpochMillis, MILLIS_PER_DAY, SECONDS_PER_DAY};
use crate::core::config::WorkdayModel;

pub const WORKWEEK: [Weekday; 5] = [
    Weekday::MON,
    Weekday::TUE,
    Weekday::WED,
    Weekday::THU,
    Weekday::FRI,
];

pub const OFFICE_DAYS: [Weekday; 3] = [Weekday::TUE, Weekday::WED, Weekday::THU];

fn in_set(day: Date, set: &[Weekday]) -> bool {
    set.contains(&weekday_of(day))
}

/// "Today" stops counting once the working day is over: past `day_end`
/// on a day that belongs to `set`, counting starts tomorrow instead.
fn effective_start(now: DateTime, set: &[Weekday], model: &WorkdayModel) -> Date {
    if now.time.hour >= model.day_end && in_set(now.date, set) {
        now.date.next_day()
    } else {
        now.date
    }
}

/// Inclusive day walk from `from` through `to`. Empty ranges count zero.
fn count_days(from: Date, to: Date, eligible: impl Fn(Date) -> bool) -> u32 {
    let mut day = from;
    let mut count = 0;
    while day <= to {
        if eligible(day) {
            count += 1;
        }
        day = day.next_day();
    }
    count
}

/// Mon-Fri days left in [today-or-tomorrow, target], target inclusive.
/// The toggle adds the one designated Saturday being worked.
pub fn remaining_workdays(
    now: DateTime,
    target: Date,
    extra_saturday: bool,
    model: &WorkdayModel,
) -> u32 {
    let from = effective_start(now, &WORKWEEK, model);
    let count = count_days(from, target, |d| in_set(d, &WORKWEEK));
    if extra_saturday { count + 1 } else { count }
}

/// Hours already credited today under the fixed intraday model: nothing
/// before the morning, linear until lunch, flat through lunch, linear
/// through the afternoon, the full day at or past `day_end`.
pub fn hours_worked_today(time: Time, model: &WorkdayModel) -> f64 {
    let t = time.fractional_hour();
    let morning = (model.lunch_start - model.day_start) as f64;
    if t < model.day_start as f64 {
        0.0
    } else if t < model.lunch_start as f64 {
        (t - model.day_start as f64).min(morning)
    } else if t < model.lunch_end as f64 {
        morning
    } else if t < model.day_end as f64 {
        morning + (t - model.lunch_end as f64)
    } else {
        model.full_day_hours()
    }
}

/// `workdays * 8` minus today's worked hours on a weekday, floored at 0.
/// Past `day_end` today is both dropped from the day count and charged the
/// full eight hours.
pub fn remaining_work_hours(
    now: DateTime,
    target: Date,
    extra_saturday: bool,
    model: &WorkdayModel,
) -> f64 {
    let days = remaining_workdays(now, target, extra_saturday, model) as f64;
    let mut hours = days * model.full_day_hours();
    if in_set(now.date, &WORKWEEK) {
        hours -= hours_worked_today(now.time, model);
    }
    hours.max(0.0)
}

/// Same sliding window as `remaining_workdays`, restricted to the
/// Tue/Wed/Thu office days; the past-`day_end` rule tests against the
/// office-day set too.
pub fn remaining_office_days(now: DateTime, target: Date, model: &WorkdayModel) -> u32 {
    let from = effective_start(now, &OFFICE_DAYS, model);
    count_days(from, target, |d| in_set(d, &OFFICE_DAYS))
}

/// Rough Mon-Fri count over the whole configured interval: full weeks at
/// five, leftover days capped at five.
pub fn interval_workday_estimate(start: EpochMillis, end: EpochMillis) -> u64 {
    let total_days = ((end - start).max(0) / MILLIS_PER_DAY) as u64;
    total_days / 7 * 5 + (total_days % 7).min(5)
}

/// Snapshot of the secondary "other person's departure" tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepartureReport {
    pub departed: bool,
    pub workdays_until: u32,
    pub days_since: u32,
    pub estimated_total: f64,
}

/// Same day-counting as `remaining_workdays`, aimed at the departure
/// instant, with the one designated weekend date eligible as well. After
/// departure the report flips to elapsed days times the daily rate.
pub fn departure_report(
    now: DateTime,
    departure: DateTime,
    extra_date: Option<Date>,
    daily_rate: f64,
    model: &WorkdayModel,
) -> DepartureReport {
    let departed = now >= departure;

    let from = effective_start(now, &WORKWEEK, model);
    let workdays_until = count_days(from, departure.date, |d| {
        in_set(d, &WORKWEEK) || extra_date == Some(d)
    });

    let elapsed_secs = (unix_days_of(now.date) - unix_days_of(departure.date)) * SECONDS_PER_DAY
        + now.time.second_of_day() as i64
        - departure.time.second_of_day() as i64;
    let days_since = (elapsed_secs.max(0) / SECONDS_PER_DAY) as u32;

    DepartureReport {
        departed,
        workdays_until,
        days_since,
        estimated_total: days_since as f64 * daily_rate,
    }
}
