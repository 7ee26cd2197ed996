use crate::calendar::is_valid_date;
use crate::clock::{Clock, SystemClock};
use crate::format::date_string;
use crate::logging::debug;
use crate::types::{DateInput, ErrorReason, Field, ValidationResult};
use chrono::{Datelike, NaiveDate};

/// Validates a date of birth against the calendar and the clock.
///
/// At most one slot of the result is populated:
/// - missing (or zero) input, or a date that does not exist, marks `year`
///   with [`ErrorReason::InvalidDate`];
/// - a date after today marks the coarsest field that explains it with
///   [`ErrorReason::MustBeInPast`]: year, then month, then day.
///
/// The clock is read once. The candidate date is taken at local midnight,
/// so today's date is never in the future. Each outcome is traced as a
/// `debug` event alongside being returned.
pub fn check_valid_date(input: &DateInput, clock: &impl Clock) -> ValidationResult {
    let result = evaluate(input, clock);
    debug!(?input, ?result, "checked date of birth");
    result
}

/// [`check_valid_date`] against the local system clock.
pub fn check_valid_date_now(input: &DateInput) -> ValidationResult {
    check_valid_date(input, &SystemClock)
}

fn evaluate(input: &DateInput, clock: &impl Clock) -> ValidationResult {
    let invalid = ValidationResult::with(Field::Year, ErrorReason::InvalidDate);

    let Some((day, month, year)) = input.present() else {
        return invalid;
    };
    let Some(canonical) = date_string(input.day, input.month, input.year) else {
        return invalid;
    };
    if !is_valid_date(&canonical) {
        return invalid;
    }

    let (day, month, year) = (day.get(), month.get(), year.get());
    let Some(candidate) = i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
    else {
        return invalid;
    };

    let today = clock.today();
    if candidate <= today {
        return ValidationResult::valid();
    }

    let current_year = u32::try_from(today.year()).unwrap_or(0);
    let field = if year > current_year {
        Field::Year
    } else if month > today.month() {
        Field::Month
    } else {
        Field::Day
    };
    ValidationResult::with(field, ErrorReason::MustBeInPast)
}
