//! Budget proration data types.

use prorata_shared::types::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ProrationError;

/// Total budget allocated to one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBudget {
    /// Month the amount belongs to.
    pub year_month: YearMonth,
    /// Allocated amount for the whole month.
    pub amount: Decimal,
}

impl MonthBudget {
    /// Creates a month budget.
    #[must_use]
    pub const fn new(year_month: YearMonth, amount: Decimal) -> Self {
        Self { year_month, amount }
    }

    /// Creates a month budget from a raw `YYYYMM` identifier.
    ///
    /// # Errors
    ///
    /// Returns `ProrationError::MalformedYearMonth` if the identifier does not
    /// name a valid calendar month.
    pub fn parse(year_month: &str, amount: Decimal) -> Result<Self, ProrationError> {
        Ok(Self::new(year_month.parse()?, amount))
    }
}

/// How a month participates in a query range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortionKind {
    /// Range covers exactly this one month.
    Full,
    /// Range lies inside this one month without covering it.
    Partial,
    /// First month of a multi-month range.
    First,
    /// Month wholly inside a multi-month range.
    Middle,
    /// Last month of a multi-month range.
    Last,
}

/// One month's contribution to a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPortion {
    /// Month contributing the amount.
    pub month: YearMonth,
    /// Role of the month in the range.
    pub kind: PortionKind,
    /// Days of the month covered by the range.
    pub days: i64,
    /// Prorated amount.
    pub amount: Decimal,
}

/// Per-month decomposition of a query result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProrationBreakdown {
    /// Contributions in calendar order.
    pub portions: Vec<MonthPortion>,
    /// Sum of all portion amounts.
    pub total: Decimal,
}

impl ProrationBreakdown {
    /// Builds a breakdown, summing the portions into the total.
    ///
    /// # Errors
    ///
    /// Returns `ProrationError::AmountOverflow` if the total does not fit in
    /// a `Decimal`.
    pub fn from_portions(portions: Vec<MonthPortion>) -> Result<Self, ProrationError> {
        let total = portions
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.amount))
            .ok_or(ProrationError::AmountOverflow)?;
        Ok(Self { portions, total })
    }
}
