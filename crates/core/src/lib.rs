//! Core business logic for Prorata.
//!
//! This crate contains pure business logic with ZERO storage or web dependencies.
//! Budgets come in through the `MonthBudgetSource` trait; everything else is
//! calendar arithmetic on `Decimal` amounts.
//!
//! # Modules
//!
//! - `budget` - Month budget lookup and date-range proration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use prorata_core::budget::{BudgetProrator, InMemoryBudgetSource};
//! use rust_decimal_macros::dec;
//!
//! let source = InMemoryBudgetSource::from_raw(&[("202303", dec!(31000))]).unwrap();
//! let prorator = BudgetProrator::new(Arc::new(source));
//!
//! let start = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2023, 3, 5).unwrap();
//! assert_eq!(prorator.query(start, end).unwrap(), dec!(5000));
//! ```

pub mod budget;

pub use budget::{BudgetProrator, MonthBudgetSource, ProrationError};
