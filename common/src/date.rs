//! Calendar date utilities.

use std::{fmt, str::FromStr};

use time::macros::format_description;

/// Calendar date without a time component.
///
/// Its wire form is an ISO `YYYY-MM-DD` string.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date(time::Date);

impl Date {
    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_calendar_date(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }

    /// Counts the nights between this [`Date`] and the `later` one.
    ///
    /// [`None`] is returned if the `later` [`Date`] is not strictly after
    /// this one.
    #[must_use]
    pub fn nights_until(self, later: Self) -> Option<u16> {
        u16::try_from((later.0 - self.0).whole_days())
            .ok()
            .filter(|nights| *nights > 0)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .0
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(|_| fmt::Error)?;
        write!(f, "{formatted}")
    }
}

impl FromStr for Date {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::Date::parse(s, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|_| "invalid date")
    }
}

/// Period between two [`Date`]s.
///
/// The end [`Date`] is always strictly after the start one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Period {
    /// First day of this [`Period`].
    start: Date,

    /// Last day of this [`Period`].
    end: Date,
}

impl Period {
    /// Creates a new [`Period`] if the provided [`Date`]s form one.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Option<Self> {
        start.nights_until(end).map(|_| Self { start, end })
    }

    /// Returns the first day of this [`Period`].
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of this [`Period`].
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Counts the nights this [`Period`] spans.
    #[expect(clippy::missing_panics_doc, reason = "validated on creation")]
    #[must_use]
    pub fn nights(&self) -> u16 {
        self.start.nights_until(self.end).expect("validated")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Date, Period};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_formats_iso() {
        let d = date("2024-06-01");
        assert_eq!(d, Date::from_calendar_date(2024, 6, 1).unwrap());
        assert_eq!(d.to_string(), "2024-06-01");

        assert!(Date::from_str("2024-13-01").is_err());
        assert!(Date::from_str("01/06/2024").is_err());
    }

    #[test]
    fn counts_nights() {
        assert_eq!(
            date("2024-06-01").nights_until(date("2024-06-04")),
            Some(3),
        );
        assert_eq!(
            date("2024-06-28").nights_until(date("2024-07-02")),
            Some(4),
        );
        assert_eq!(date("2024-06-01").nights_until(date("2024-06-01")), None);
        assert_eq!(date("2024-06-04").nights_until(date("2024-06-01")), None);
    }

    #[test]
    fn period_invariants() {
        let period =
            Period::new(date("2024-06-01"), date("2024-06-04")).unwrap();
        assert_eq!(period.nights(), 3);
        assert_eq!(period.start(), date("2024-06-01"));
        assert_eq!(period.end(), date("2024-06-04"));

        assert!(Period::new(date("2024-06-04"), date("2024-06-01")).is_none());
        assert!(Period::new(date("2024-06-01"), date("2024-06-01")).is_none());
    }
}
