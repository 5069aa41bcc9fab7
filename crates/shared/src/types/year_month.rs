//! Calendar month key.
//!
//! Budgets are keyed by calendar month. The key is a `(year, month)` pair
//! normalized to the month's first and last day, so comparisons never go
//! through formatted text.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing a `YYYYMM` month identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearMonthParseError {
    /// Identifier is not exactly six ASCII digits.
    #[error("Invalid month identifier '{0}': expected YYYYMM")]
    InvalidFormat(String),

    /// Month number outside 1-12.
    #[error("Invalid month number {month} in '{raw}'")]
    InvalidMonth {
        /// Raw identifier.
        raw: String,
        /// Parsed month number.
        month: u32,
    },

    /// Year outside 0-9999.
    #[error("Year {0} is out of range")]
    YearOutOfRange(i32),
}

/// A calendar month, identified by year and month number.
///
/// Ordering is chronological. The text form is `YYYYMM`, so years are
/// limited to 0-9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl YearMonth {
    /// Creates a month key from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns `YearMonthParseError::InvalidMonth` if `month` is not 1-12 and
    /// `YearMonthParseError::YearOutOfRange` if the year is outside 0-9999.
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthParseError::InvalidMonth {
                raw: format!("{year:04}{month:02}"),
                month,
            });
        }

        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(YearMonthParseError::YearOutOfRange(year))
            .and_then(Self::from_date)
    }

    /// Returns the month containing `date`.
    ///
    /// # Errors
    ///
    /// Returns `YearMonthParseError::YearOutOfRange` if the year has no
    /// four-digit `YYYYMM` form.
    pub fn from_date(date: NaiveDate) -> Result<Self, YearMonthParseError> {
        if !YEARS.contains(&date.year()) {
            return Err(YearMonthParseError::YearOutOfRange(date.year()));
        }

        let first_day = date - Days::new(u64::from(date.day0()));
        let days = days_in_month(date.year(), date.month());
        let last_day = first_day + Days::new(u64::from(days - 1));
        Ok(Self {
            first_day,
            last_day,
        })
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Month number (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First calendar day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last calendar day of the month.
    #[must_use]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Number of days in the month (28-31).
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        self.last_day.day()
    }

    /// The following month, or `None` after December 9999.
    #[must_use]
    pub fn succ(&self) -> Option<Self> {
        self.last_day
            .succ_opt()
            .and_then(|next| Self::from_date(next).ok())
    }
}

/// Years with a four-digit `YYYYMM` form.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(YearMonthParseError::InvalidFormat(s.to_string()));
        }

        let (year, month) = s.split_at(4);
        let year: i32 = year
            .parse()
            .map_err(|_| YearMonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| YearMonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(YearMonthParseError::InvalidMonth {
                raw: s.to_string(),
                month,
            });
        }

        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = YearMonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_identifier() {
        let ym: YearMonth = "202303".parse().unwrap();
        assert_eq!(ym.year(), 2023);
        assert_eq!(ym.month(), 3);
        assert_eq!(ym.first_day(), date(2023, 3, 1));
        assert_eq!(ym.last_day(), date(2023, 3, 31));
    }

    #[rstest]
    #[case("")]
    #[case("2023")]
    #[case("2023-03")]
    #[case("20230301")]
    #[case("2023ab")]
    #[case("+20233")]
    fn test_parse_rejects_bad_format(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<YearMonth>(),
            Err(YearMonthParseError::InvalidFormat(raw.to_string()))
        );
    }

    #[rstest]
    #[case("202300", 0)]
    #[case("202313", 13)]
    #[case("202399", 99)]
    fn test_parse_rejects_bad_month(#[case] raw: &str, #[case] month: u32) {
        assert_eq!(
            raw.parse::<YearMonth>(),
            Err(YearMonthParseError::InvalidMonth {
                raw: raw.to_string(),
                month,
            })
        );
    }

    #[rstest]
    #[case(2023, 1, 31)]
    #[case(2023, 2, 28)]
    #[case(2024, 2, 29)]
    #[case(1900, 2, 28)]
    #[case(2000, 2, 29)]
    #[case(2023, 4, 30)]
    #[case(2023, 12, 31)]
    fn test_days_in_month(#[case] year: i32, #[case] month: u32, #[case] expected: u32) {
        let ym = YearMonth::new(year, month).unwrap();
        assert_eq!(ym.days_in_month(), expected);
        assert_eq!(ym.last_day(), date(year, month, expected));
    }

    #[test]
    fn test_from_date_normalizes_to_month() {
        let ym = YearMonth::from_date(date(2024, 2, 17)).unwrap();
        assert_eq!(ym, YearMonth::new(2024, 2).unwrap());
        assert_eq!(ym.first_day(), date(2024, 2, 1));
        assert_eq!(ym.last_day(), date(2024, 2, 29));
    }

    #[test]
    fn test_succ_rolls_year() {
        let dec = YearMonth::new(2023, 12).unwrap();
        assert_eq!(dec.succ(), Some(YearMonth::new(2024, 1).unwrap()));

        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.succ(), Some(YearMonth::new(2024, 2).unwrap()));
    }

    #[test]
    fn test_succ_stops_after_year_9999() {
        let last = YearMonth::new(9999, 12).unwrap();
        assert_eq!(last.succ(), None);
    }

    #[rstest]
    #[case(0, 1, "000001")]
    #[case(9999, 12, "999912")]
    fn test_identifier_round_trip(#[case] year: i32, #[case] month: u32, #[case] raw: &str) {
        let ym = YearMonth::new(year, month).unwrap();
        assert_eq!(ym.to_string(), raw);
        assert_eq!(raw.parse::<YearMonth>(), Ok(ym));

        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(serde_json::from_str::<YearMonth>(&json).unwrap(), ym);
    }

    #[rstest]
    #[case(10000)]
    #[case(-1)]
    fn test_year_without_six_digit_identifier_rejected(#[case] year: i32) {
        assert_eq!(
            YearMonth::new(year, 1),
            Err(YearMonthParseError::YearOutOfRange(year))
        );
        assert_eq!(
            YearMonth::from_date(date(year, 6, 15)),
            Err(YearMonthParseError::YearOutOfRange(year))
        );
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = YearMonth::new(2023, 12).unwrap();
        let b = YearMonth::new(2024, 1).unwrap();
        let c = YearMonth::new(2024, 11).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_display() {
        assert_eq!(YearMonth::new(2023, 3).unwrap().to_string(), "202303");
        assert_eq!(YearMonth::new(987, 11).unwrap().to_string(), "098711");
    }

    #[test]
    fn test_serde_as_identifier_string() {
        let ym = YearMonth::new(2023, 5).unwrap();
        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(json, "\"202305\"");

        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym);

        assert!(serde_json::from_str::<YearMonth>("\"202313\"").is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            YearMonthParseError::InvalidFormat("x".into()).to_string(),
            "Invalid month identifier 'x': expected YYYYMM"
        );
        assert_eq!(
            YearMonthParseError::InvalidMonth {
                raw: "202313".into(),
                month: 13
            }
            .to_string(),
            "Invalid month number 13 in '202313'"
        );
    }
}
