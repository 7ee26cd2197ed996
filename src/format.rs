use crate::consts::{DATE_SEPARATOR, DAY_WIDTH, MONTH_WIDTH, YEAR_WIDTH};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A zero-padded `YYYY-MM-DD` string built from numeric inputs.
///
/// The string is only shaped, not checked: `2023-02-31` is a perfectly good
/// `CanonicalDate`. Use [`crate::is_valid_date`] to check it.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CanonicalDate(String);

impl CanonicalDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Builds the canonical string, or `None` if any component is absent or zero.
pub fn date_string(day: Option<u32>, month: Option<u32>, year: Option<u32>) -> Option<CanonicalDate> {
    let (day, month, year) = (
        day.filter(|&d| d != 0)?,
        month.filter(|&m| m != 0)?,
        year.filter(|&y| y != 0)?,
    );
    Some(CanonicalDate(format!(
        "{year:0YEAR_WIDTH$}{DATE_SEPARATOR}{month:0MONTH_WIDTH$}{DATE_SEPARATOR}{day:0DAY_WIDTH$}"
    )))
}
