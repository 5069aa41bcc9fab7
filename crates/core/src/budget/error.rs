//! Budget proration error types.

use chrono::NaiveDate;
use prorata_shared::AppError;
use prorata_shared::types::{YearMonth, YearMonthParseError};
use thiserror::Error;

/// Proration-related errors.
#[derive(Debug, Error)]
pub enum ProrationError {
    /// Range start is after its end.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// A query date has no `YYYYMM` month key.
    #[error("Date out of supported range: {0}")]
    DateOutOfRange(YearMonthParseError),

    /// A month strictly inside a multi-month range has no budget record.
    #[error("No budget recorded for middle month {month}")]
    MissingMiddleMonth {
        /// The missing month.
        month: YearMonth,
    },

    /// A budget record carries an unparseable month identifier.
    #[error("Malformed month identifier: {0}")]
    MalformedYearMonth(#[from] YearMonthParseError),

    /// A prorated amount or total does not fit in a `Decimal`.
    #[error("Prorated amount overflowed")]
    AmountOverflow,

    /// The budget source failed.
    #[error("Budget source error: {0}")]
    Source(String),
}

impl From<ProrationError> for AppError {
    fn from(err: ProrationError) -> Self {
        match err {
            ProrationError::InvalidRange { .. }
            | ProrationError::DateOutOfRange(_)
            | ProrationError::MalformedYearMonth(_)
            | ProrationError::AmountOverflow => Self::Validation(err.to_string()),
            ProrationError::MissingMiddleMonth { .. } => Self::NotFound(err.to_string()),
            ProrationError::Source(_) => Self::ExternalService(err.to_string()),
        }
    }
}
