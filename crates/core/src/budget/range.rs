//! Inclusive date range used by budget queries.

use chrono::NaiveDate;
use prorata_shared::types::{YearMonth, YearMonthParseError};

/// Inclusive `[start, end]` span of calendar dates.
///
/// Built fresh for every query and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    start_month: YearMonth,
    end_month: YearMonth,
}

impl DateRange {
    /// Creates a range. `start <= end` is not checked here.
    ///
    /// # Errors
    ///
    /// Returns `YearMonthParseError::YearOutOfRange` if either date falls
    /// outside years 0-9999.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, YearMonthParseError> {
        Ok(Self {
            start,
            end,
            start_month: YearMonth::from_date(start)?,
            end_month: YearMonth::from_date(end)?,
        })
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Month containing the start date.
    #[must_use]
    pub const fn start_month(&self) -> YearMonth {
        self.start_month
    }

    /// Month containing the end date.
    #[must_use]
    pub const fn end_month(&self) -> YearMonth {
        self.end_month
    }

    /// True if start and end fall in the same calendar month.
    #[must_use]
    pub fn same_month(&self) -> bool {
        self.start_month == self.end_month
    }

    /// True if start is the first day of its month and end is the last day
    /// of its month.
    #[must_use]
    pub fn full_month(&self) -> bool {
        self.start == self.start_month.first_day() && self.end == self.end_month.last_day()
    }

    /// Inclusive day count.
    #[must_use]
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Months strictly between the start month and the end month.
    pub fn months_between(&self) -> impl Iterator<Item = YearMonth> {
        let end_month = self.end_month;
        std::iter::successors(self.start_month.succ(), YearMonth::succ)
            .take_while(move |month| *month < end_month)
    }
}
