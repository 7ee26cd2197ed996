use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the current local wall-clock time.
///
/// Validation reads "now" through this trait so callers can pin it; tests
/// use [`FixedClock`] to stay clear of day and month boundaries.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub const fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// A clock stopped at local midnight starting `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_given_instant() {
        let now = NaiveDate::from_ymd_opt(2025, 10, 2)
            .unwrap()
            .and_hms_opt(13, 45, 0)
            .unwrap();
        let clock = FixedClock::new(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 10, 2).unwrap());
    }

    #[test]
    fn fixed_clock_at_date_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let clock = FixedClock::at_date(date);
        assert_eq!(clock.now(), date.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn clock_trait_object_works() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock::at_date(date));
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn today_is_date_of_now() {
        let now = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let clock = FixedClock::new(now);
        assert_eq!(clock.today(), clock.now().date());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }
}
