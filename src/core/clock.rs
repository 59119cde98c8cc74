//! Calendar date source.
//!
//! The daily-reset rule compares calendar dates, never times of day, so the
//! clock seam only exposes "today".

use chrono::NaiveDate;

/// Supplies the current calendar date.
pub trait Clock {
    /// Today's date in the local timezone.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_is_stable_within_a_call() {
        let clock = SystemClock;
        // Two immediate reads land on the same calendar date.
        assert_eq!(clock.today(), clock.today());
    }
}
