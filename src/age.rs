//! Elapsed years, months and days between a birth date and today.
//!
//! Whole months are counted from the birth date forward, clamping to the end
//! of short months (Jan 31 plus one month is Feb 28 or 29). Remaining days
//! are counted from that anchor.

use crate::consts::MONTHS_PER_YEAR;
use crate::prelude::*;
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Error computing an [`Age`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// The birth date lies after the reference date.
    #[error("Birth date {birth} is after {today}")]
    InFuture { birth: NaiveDate, today: NaiveDate },
    /// Adding whole months to the birth date left chrono's range.
    #[error("Date out of range adding {months} months to {birth}")]
    OutOfRange { birth: NaiveDate, months: u32 },
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{years} years, {months} months, {days} days")]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Age {
    /// Computes the age on `today` of someone born on `birth`.
    ///
    /// # Errors
    /// Returns `AgeError::InFuture` if `birth` is after `today`.
    pub fn between(birth: NaiveDate, today: NaiveDate) -> Result<Self, AgeError> {
        if birth > today {
            return Err(AgeError::InFuture { birth, today });
        }

        let span = (i64::from(today.year()) - i64::from(birth.year())) * i64::from(MONTHS_PER_YEAR)
            + i64::from(today.month())
            - i64::from(birth.month());
        // birth <= today, so the span is never negative
        let mut months = u32::try_from(span).unwrap_or(0);
        let mut anchor = add_months(birth, months)?;
        if anchor > today {
            months = months.saturating_sub(1);
            anchor = add_months(birth, months)?;
        }

        let days = u32::try_from((today - anchor).num_days()).unwrap_or(0);
        Ok(Self {
            years: months / MONTHS_PER_YEAR,
            months: months % MONTHS_PER_YEAR,
            days,
        })
    }
}

fn add_months(birth: NaiveDate, months: u32) -> Result<NaiveDate, AgeError> {
    birth
        .checked_add_months(Months::new(months))
        .ok_or(AgeError::OutOfRange { birth, months })
}
