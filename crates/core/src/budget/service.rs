//! Budget proration over arbitrary date ranges.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use prorata_shared::ProrationConfig;
use prorata_shared::types::YearMonth;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use super::error::ProrationError;
use super::range::DateRange;
use super::source::MonthBudgetSource;
use super::types::{MonthBudget, MonthPortion, PortionKind, ProrationBreakdown};

/// Prorates monthly budgets across date ranges.
///
/// Holds no per-query state, so one instance can serve concurrent callers.
pub struct BudgetProrator<S: MonthBudgetSource> {
    source: Arc<S>,
    per_day_scale: u32,
}

impl<S: MonthBudgetSource> BudgetProrator<S> {
    /// Creates a prorator with default configuration.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self::with_config(source, &ProrationConfig::default())
    }

    /// Creates a prorator with the given configuration.
    #[must_use]
    pub fn with_config(source: Arc<S>, config: &ProrationConfig) -> Self {
        Self {
            source,
            per_day_scale: config.per_day_scale,
        }
    }

    /// Returns the budget attributable to the inclusive range `[start, end]`.
    ///
    /// A range covering exactly one calendar month yields that month's full
    /// amount. A range inside one month yields `amount * days / days_in_month`.
    /// A range spanning months sums a per-day share of the first and last
    /// months with the full amount of every month in between. Per-day shares
    /// are truncated, so a split month may sum to less than its amount.
    ///
    /// Missing first or last months contribute zero. No budgets at all
    /// yields zero for any well-formed range.
    ///
    /// # Errors
    ///
    /// The range is checked before the source is read, so these take
    /// precedence over the empty-source zero:
    /// - `ProrationError::InvalidRange` if `start > end`.
    /// - `ProrationError::DateOutOfRange` if either date is outside years
    ///   0-9999.
    ///
    /// After the read:
    /// - `ProrationError::MissingMiddleMonth` if a month strictly inside the
    ///   range has no budget.
    /// - `ProrationError::AmountOverflow` if a prorated amount or the total
    ///   does not fit in a `Decimal`.
    /// - Any error from the budget source.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn query(&self, start: NaiveDate, end: NaiveDate) -> Result<Decimal, ProrationError> {
        Ok(self.breakdown(start, end)?.total)
    }

    /// Same as [`query`](Self::query), but keeps each month's contribution.
    ///
    /// # Errors
    ///
    /// See [`query`](Self::query).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn breakdown(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ProrationBreakdown, ProrationError> {
        if start > end {
            return Err(ProrationError::InvalidRange { start, end });
        }
        let range = DateRange::new(start, end).map_err(ProrationError::DateOutOfRange)?;

        let Some(index) = self.load_index()? else {
            debug!("No budgets available");
            return Ok(ProrationBreakdown::default());
        };

        let portions = if range.same_month() {
            vec![self.same_month_portion(&range, &index)?]
        } else {
            self.multi_month_portions(&range, &index)?
        };

        let breakdown = ProrationBreakdown::from_portions(portions)?;
        debug!(total = %breakdown.total, months = breakdown.portions.len(), "Proration complete");
        Ok(breakdown)
    }

    fn load_index(&self) -> Result<Option<BudgetIndex>, ProrationError> {
        match self.source.all_budgets()? {
            Some(budgets) if !budgets.is_empty() => Ok(Some(BudgetIndex::build(budgets))),
            _ => Ok(None),
        }
    }

    fn same_month_portion(
        &self,
        range: &DateRange,
        index: &BudgetIndex,
    ) -> Result<MonthPortion, ProrationError> {
        let month = range.start_month();
        let total = index.amount_or_zero(month);

        if range.full_month() {
            debug!(%month, "Range covers a full month");
            return Ok(MonthPortion {
                month,
                kind: PortionKind::Full,
                days: i64::from(month.days_in_month()),
                amount: total,
            });
        }

        let days = range.total_days();
        let amount = self.truncate(
            checked_mul(total, days)? / Decimal::from(month.days_in_month()),
        );
        debug!(%month, days, "Range covers part of one month");

        Ok(MonthPortion {
            month,
            kind: PortionKind::Partial,
            days,
            amount,
        })
    }

    fn multi_month_portions(
        &self,
        range: &DateRange,
        index: &BudgetIndex,
    ) -> Result<Vec<MonthPortion>, ProrationError> {
        let first_month = range.start_month();
        let last_month = range.end_month();
        debug!(first = %first_month, last = %last_month, "Range spans multiple months");

        let mut portions = Vec::new();

        let first_days = i64::from(first_month.days_in_month() - range.start().day0());
        portions.push(MonthPortion {
            month: first_month,
            kind: PortionKind::First,
            days: first_days,
            amount: checked_mul(
                self.per_day(index.amount_or_zero(first_month), first_month),
                first_days,
            )?,
        });

        for month in range.months_between() {
            portions.push(MonthPortion {
                month,
                kind: PortionKind::Middle,
                days: i64::from(month.days_in_month()),
                amount: index.require(month)?,
            });
        }

        let last_days = i64::from(range.end().day());
        portions.push(MonthPortion {
            month: last_month,
            kind: PortionKind::Last,
            days: last_days,
            amount: checked_mul(
                self.per_day(index.amount_or_zero(last_month), last_month),
                last_days,
            )?,
        });

        Ok(portions)
    }

    fn per_day(&self, amount: Decimal, month: YearMonth) -> Decimal {
        self.truncate(amount / Decimal::from(month.days_in_month()))
    }

    fn truncate(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(self.per_day_scale, RoundingStrategy::ToZero)
    }
}

fn checked_mul(amount: Decimal, days: i64) -> Result<Decimal, ProrationError> {
    amount
        .checked_mul(Decimal::from(days))
        .ok_or(ProrationError::AmountOverflow)
}

/// Month budgets keyed by month. First record wins on duplicates.
struct BudgetIndex {
    amounts: BTreeMap<YearMonth, Decimal>,
}

impl BudgetIndex {
    fn build(budgets: Vec<MonthBudget>) -> Self {
        let mut amounts = BTreeMap::new();
        for budget in budgets {
            match amounts.entry(budget.year_month) {
                Entry::Vacant(slot) => {
                    slot.insert(budget.amount);
                }
                Entry::Occupied(_) => {
                    warn!(month = %budget.year_month, "Duplicate month budget ignored");
                }
            }
        }
        Self { amounts }
    }

    /// Boundary lookup: a missing month counts as zero.
    fn amount_or_zero(&self, month: YearMonth) -> Decimal {
        self.amounts.get(&month).copied().unwrap_or_else(|| {
            warn!(%month, "No budget for boundary month, using zero");
            Decimal::ZERO
        })
    }

    /// Middle lookup: a missing month is an error.
    fn require(&self, month: YearMonth) -> Result<Decimal, ProrationError> {
        self.amounts
            .get(&month)
            .copied()
            .ok_or(ProrationError::MissingMiddleMonth { month })
    }
}
