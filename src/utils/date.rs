use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `today`, `YYYY-MM-DD`, or nothing (today).
pub fn resolve_date(s: Option<&str>) -> Option<NaiveDate> {
    match s {
        None => Some(today()),
        Some(v) if v.eq_ignore_ascii_case("today") => Some(today()),
        Some(v) => parse_date(v),
    }
}

pub fn current_year_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month())
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
