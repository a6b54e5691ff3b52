//! Reports module for NestEgg
//!
//! Terminal renderings of the engine's results: the monthly dashboard,
//! what-if scenarios, goal progress and a year-in-review.

pub mod dashboard;
pub mod goals;
pub mod scenarios;
pub mod year;

pub use dashboard::DashboardReport;
pub use goals::GoalReport;
pub use scenarios::ScenarioReport;
pub use year::YearReport;
