//! Month budget lookup.

use rust_decimal::Decimal;

use super::error::ProrationError;
use super::types::MonthBudget;

/// Source of month budgets.
///
/// Implemented outside this crate by whatever stores budgets. `Ok(None)`
/// means the source has nothing at all, which callers treat the same as an
/// empty list.
#[cfg_attr(test, mockall::automock)]
pub trait MonthBudgetSource: Send + Sync {
    /// Returns every known month budget.
    fn all_budgets(&self) -> Result<Option<Vec<MonthBudget>>, ProrationError>;
}

/// Read-only source backed by an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBudgetSource {
    budgets: Option<Vec<MonthBudget>>,
}

impl InMemoryBudgetSource {
    /// Creates a source holding `budgets`.
    #[must_use]
    pub const fn new(budgets: Vec<MonthBudget>) -> Self {
        Self {
            budgets: Some(budgets),
        }
    }

    /// Creates a source that reports no data at all.
    #[must_use]
    pub const fn absent() -> Self {
        Self { budgets: None }
    }

    /// Creates a source from raw `(YYYYMM, amount)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `ProrationError::MalformedYearMonth` on the first identifier
    /// that is not a valid month.
    pub fn from_raw(records: &[(&str, Decimal)]) -> Result<Self, ProrationError> {
        let budgets = records
            .iter()
            .map(|(year_month, amount)| MonthBudget::parse(year_month, *amount))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(budgets))
    }
}

impl MonthBudgetSource for InMemoryBudgetSource {
    fn all_budgets(&self) -> Result<Option<Vec<MonthBudget>>, ProrationError> {
        Ok(self.budgets.clone())
    }
}
