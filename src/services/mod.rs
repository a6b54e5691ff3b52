//! Service layer for NestEgg
//!
//! Services validate input, mutate the repositories, persist, and write the
//! audit trail. `DashboardService` is read-only and drives the engine.

pub mod dashboard;
pub mod goal;
pub mod income;
pub mod savings;

pub use dashboard::{DashboardService, MonthSummary, SavingsSummary};
pub use goal::GoalService;
pub use income::IncomeService;
pub use savings::SavingsService;
