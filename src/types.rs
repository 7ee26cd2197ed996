use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// One of the three inputs of a date-of-birth form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];
}

/// Raw numeric date input. `None` and `Some(0)` both mean "not provided".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInput {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
}

impl DateInput {
    pub const fn new(day: Option<u32>, month: Option<u32>, year: Option<u32>) -> Self {
        Self { day, month, year }
    }

    /// Returns `(day, month, year)` only when all three are present and non-zero.
    pub fn present(&self) -> Option<(NonZeroU32, NonZeroU32, NonZeroU32)> {
        let day = self.day.and_then(NonZeroU32::new)?;
        let month = self.month.and_then(NonZeroU32::new)?;
        let year = self.year.and_then(NonZeroU32::new)?;
        Some((day, month, year))
    }
}

/// Classification of why a field failed validation.
///
/// `Display` yields the user-facing message for the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ErrorReason {
    #[display(fmt = "Must be a valid date")]
    InvalidDate,
    #[display(fmt = "Must be a valid day")]
    InvalidDay,
    #[display(fmt = "Must be a valid month")]
    InvalidMonth,
    #[display(fmt = "Must be a valid year")]
    InvalidYear,
    #[display(fmt = "This field is required")]
    FieldRequired,
    #[display(fmt = "Must be in the past")]
    MustBeInPast,
}

/// Per-field outcome of a validation pass. All slots empty means valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<ErrorReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<ErrorReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<ErrorReason>,
}

impl ValidationResult {
    /// A result with every slot empty.
    pub const fn valid() -> Self {
        Self {
            day: None,
            month: None,
            year: None,
        }
    }

    /// A result with exactly one slot populated.
    pub const fn with(field: Field, reason: ErrorReason) -> Self {
        let mut result = Self::valid();
        match field {
            Field::Day => result.day = Some(reason),
            Field::Month => result.month = Some(reason),
            Field::Year => result.year = Some(reason),
        }
        result
    }

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

    /// Populated slots in day, month, year order.
    pub fn errors(&self) -> impl Iterator<Item = (Field, ErrorReason)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|reason| (field, reason)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_all_set() {
        let input = DateInput::new(Some(15), Some(8), Some(1991));
        let (d, m, y) = input.present().unwrap();
        assert_eq!((d.get(), m.get(), y.get()), (15, 8, 1991));
    }

    #[test]
    fn test_present_zero_counts_as_absent() {
        assert!(DateInput::new(Some(0), Some(1), Some(2023)).present().is_none());
        assert!(DateInput::new(Some(1), Some(0), Some(2023)).present().is_none());
        assert!(DateInput::new(Some(1), Some(1), Some(0)).present().is_none());
    }

    #[test]
    fn test_present_missing() {
        assert!(DateInput::new(None, Some(1), Some(2023)).present().is_none());
        assert!(DateInput::default().present().is_none());
    }

    #[test]
    fn test_error_reason_display() {
        let cases = [
            (ErrorReason::InvalidDate, "Must be a valid date"),
            (ErrorReason::InvalidDay, "Must be a valid day"),
            (ErrorReason::InvalidMonth, "Must be a valid month"),
            (ErrorReason::InvalidYear, "Must be a valid year"),
            (ErrorReason::FieldRequired, "This field is required"),
            (ErrorReason::MustBeInPast, "Must be in the past"),
        ];
        for (reason, text) in cases {
            assert_eq!(reason.to_string(), text, "{reason:?}");
        }
    }

    #[test]
    fn test_validation_result_with() {
        let result = ValidationResult::with(Field::Month, ErrorReason::MustBeInPast);
        assert_eq!(result.day, None);
        assert_eq!(result.month, Some(ErrorReason::MustBeInPast));
        assert_eq!(result.year, None);
        assert!(!result.is_valid());
        assert_eq!(result.get(Field::Month), Some(ErrorReason::MustBeInPast));
    }

    #[test]
    fn test_validation_result_errors_order() {
        let result = ValidationResult {
            day: Some(ErrorReason::FieldRequired),
            month: None,
            year: Some(ErrorReason::InvalidDate),
        };
        let errors: Vec<_> = result.errors().collect();
        assert_eq!(
            errors,
            vec![
                (Field::Day, ErrorReason::FieldRequired),
                (Field::Year, ErrorReason::InvalidDate)
            ]
        );
        assert_eq!(ValidationResult::valid().errors().count(), 0);
    }

    #[test]
    fn test_validation_result_serde() {
        let result = ValidationResult::with(Field::Year, ErrorReason::InvalidDate);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"year":"InvalidDate"}"#);

        let parsed: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);

        assert_eq!(serde_json::to_string(&ValidationResult::valid()).unwrap(), "{}");
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Day.to_string(), "day");
        assert_eq!(Field::Month.to_string(), "month");
        assert_eq!(Field::Year.to_string(), "year");
        assert_eq!(serde_json::to_string(&Field::Year).unwrap(), r#""year""#);
    }
}
