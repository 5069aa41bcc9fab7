//! Monthly budget proration over date ranges.

pub mod error;
pub mod range;
pub mod service;
pub mod source;
pub mod types;


pub use error::ProrationError;
pub use range::DateRange;
pub use service::BudgetProrator;
pub use source::{InMemoryBudgetSource, MonthBudgetSource};
pub use types::{MonthBudget, MonthPortion, PortionKind, ProrationBreakdown};
