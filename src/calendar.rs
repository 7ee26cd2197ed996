//! Gregorian calendar checks over the canonical `YYYY-MM-DD` form.

use crate::consts::{
    CANONICAL_LEN, CENTURY_CYCLE, DATE_SEPARATOR, DAY_WIDTH, DAYS_IN_MONTH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MIN_DAY, MIN_YEAR,
    MONTH_WIDTH, YEAR_WIDTH,
};

pub const fn is_leap_year(year: u32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Returns true iff `(year, month, day)` exists on the Gregorian calendar.
pub const fn is_valid_ymd(year: u32, month: u32, day: u32) -> bool {
    if year < MIN_YEAR || month == 0 || month > MAX_MONTH {
        return false;
    }
    day >= MIN_DAY && day <= days_in_month(year, month)
}

/// Returns true iff `date` is a canonical `YYYY-MM-DD` string naming a real
/// calendar date.
///
/// The lexical shape is checked first: exactly four digits, a separator, a
/// month in `01..=12`, a separator and a day in `01..=31`. Only then is the
/// day checked against the month's length for that year.
pub fn is_valid_date(date: &str) -> bool {
    let Some((year, month, day)) = split_canonical(date) else {
        return false;
    };
    if !(1..=MAX_MONTH).contains(&month) || !(MIN_DAY..=MAX_DAY).contains(&day) {
        return false;
    }
    is_valid_ymd(year, month, day)
}

/// Splits a string of shape `DDDD-DD-DD` into its numeric parts.
fn split_canonical(date: &str) -> Option<(u32, u32, u32)> {
    if date.len() != CANONICAL_LEN {
        return None;
    }
    let mut parts = date.split(DATE_SEPARATOR);
    let year = parse_digits(parts.next()?, YEAR_WIDTH)?;
    let month = parse_digits(parts.next()?, MONTH_WIDTH)?;
    let day = parse_digits(parts.next()?, DAY_WIDTH)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

/// Parses exactly `width` ASCII digits. Rejects signs and whitespace that
/// `str::parse` would otherwise tolerate.
fn parse_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
