//! Date-of-birth validation with field-specific error reasons.
//!
//! [`check_valid_date`] takes raw day, month and year values and tells the
//! caller which field, if any, makes them unusable as a date of birth: a
//! missing or impossible date, or one that lies in the future.
//!
//! ```
//! use chrono::NaiveDate;
//! use dob_check::{check_valid_date, DateInput, ErrorReason, FixedClock};
//!
//! let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
//!
//! let result = check_valid_date(&DateInput::new(Some(15), Some(8), Some(1991)), &clock);
//! assert!(result.is_valid());
//!
//! let result = check_valid_date(&DateInput::new(Some(1), Some(11), Some(2026)), &clock);
//! assert_eq!(result.month, Some(ErrorReason::MustBeInPast));
//! ```

mod age;
mod calendar;
mod clock;
mod consts;
mod form;
mod format;
pub mod logging;
mod prelude;
mod types;
mod validate;

pub use age::{Age, AgeError};
pub use calendar::{days_in_month, is_leap_year, is_valid_date, is_valid_ymd};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use form::{FormInput, FormReport, parse_field, submit};
pub use format::{CanonicalDate, date_string};
pub use types::{DateInput, ErrorReason, Field, ValidationResult};
pub use validate::{check_valid_date, check_valid_date_now};
