//! Core data models for NestEgg
//!
//! Plain value records read by the derivation engine: income sources,
//! per-month income entries, savings records, goals, and the savings
//! configuration values.

pub mod entry;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod savings;

pub use entry::MonthlyIncomeEntry;
pub use goal::Goal;
pub use ids::{GoalId, IncomeEntryId, IncomeSourceId, SavingsRecordId};
pub use income::{Frequency, IncomeCategory, IncomeSource};
pub use money::{Money, MoneyParseError};
pub use period::{MonthPeriod, PeriodParseError};
pub use savings::{MonthlySavingsRecord, SavingsBaseline, SavingsPercentage};
