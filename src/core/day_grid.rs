//! Calendar-day sequences for the week and month grids.
//! All arithmetic is on `NaiveDate` (calendar-local, no time zone).

use chrono::{Datelike, Duration, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

/// Monday on or before `date`.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// The 7 days `[week_start, week_start + 6]`.
///
/// `week_start` is expected to be a Monday; callers holding an arbitrary
/// date go through [`week_start_of`] first.
pub fn week_days(week_start: NaiveDate) -> Vec<NaiveDate> {
    week_start
        .iter_days()
        .take(DAYS_PER_WEEK)
        .collect()
}

/// ISO week identifier (`YYYY-Www`) used to pin gestures to one grid row.
pub fn week_key(week_start: NaiveDate) -> String {
    let iso = week_start.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// Monday-anchored weeks intersecting the given month, each a full 7 days.
pub fn weeks_of_month(year: i32, month: u32) -> Vec<Vec<NaiveDate>> {
    let days = month_days(year, month);
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    let mut start = week_start_of(*first);
    while start <= *last {
        weeks.push(week_days(start));
        start += Duration::days(DAYS_PER_WEEK as i64);
    }

    weeks
}

/// Column index of `date` in the week starting at `week_start`.
pub fn day_index(week_start: NaiveDate, date: NaiveDate) -> Option<usize> {
    let diff = (date - week_start).num_days();
    if (0..DAYS_PER_WEEK as i64).contains(&diff) {
        Some(diff as usize)
    } else {
        None
    }
}
