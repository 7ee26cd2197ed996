//! Submit flow of a three-field date-of-birth form.
//!
//! Raw text goes in; per-field reasons and, on success, the age come out.
//! Rendering is left to the caller.

use crate::age::Age;
use crate::clock::{Clock, FixedClock};
use crate::types::{DateInput, ErrorReason, Field, ValidationResult};
use crate::validate::check_valid_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parses one raw field. Blank or non-numeric text is `None`.
pub fn parse_field(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Raw text of the day, month and year inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl FormInput {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }

    pub fn is_blank(&self, field: Field) -> bool {
        self.raw(field).trim().is_empty()
    }

    pub fn to_date_input(&self) -> DateInput {
        DateInput::new(
            parse_field(&self.day),
            parse_field(&self.month),
            parse_field(&self.year),
        )
    }
}

/// What the form shows after a submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<ErrorReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<ErrorReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<ErrorReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
}

impl FormReport {
    pub const fn get(&self, field: Field) -> Option<ErrorReason> {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// Populated messages in day, month, year order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, ErrorReason)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|reason| (field, reason)))
    }
}

/// Validates the raw form and computes the age on success.
///
/// A blank input always shows [`ErrorReason::FieldRequired`]; otherwise the
/// validator's reason for that field is shown.
pub fn submit(input: &FormInput, clock: &impl Clock) -> FormReport {
    // one reading of "now" serves both validation and the age
    let now = FixedClock::new(clock.now());
    let date = input.to_date_input();
    let result = check_valid_date(&date, &now);

    let pick = |field: Field| {
        if input.is_blank(field) {
            Some(ErrorReason::FieldRequired)
        } else {
            result.get(field)
        }
    };

    let mut report = FormReport {
        day: pick(Field::Day),
        month: pick(Field::Month),
        year: pick(Field::Year),
        age: None,
    };
    if report.is_valid() {
        report.age = birth_date(&date, &result).and_then(|birth| Age::between(birth, now.today()).ok());
    }
    report
}

fn birth_date(date: &DateInput, result: &ValidationResult) -> Option<NaiveDate> {
    if !result.is_valid() {
        return None;
    }
    let (day, month, year) = date.present()?;
    NaiveDate::from_ymd_opt(i32::try_from(year.get()).ok()?, month.get(), day.get())
}
