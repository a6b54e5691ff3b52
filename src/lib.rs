//! NestEgg - income, savings and goal tracking from the command line
//!
//! Records where income comes from, how much of it is saved each month and
//! what the savings are for, then derives the figures a saver cares about:
//! monthly and yearly income, savings targets, flat projections, what-if
//! comparisons across savings percentages and time-to-goal estimates.
//!
//! # Architecture
//!
//! - `config`: data directory resolution and user settings
//! - `error`: the crate error type
//! - `models`: income sources, income entries, savings records, goals, money
//! - `engine`: pure derivation functions over model snapshots
//! - `storage`: JSON file repositories with atomic writes
//! - `audit`: append-only log of every data change
//! - `services`: validated mutations and the dashboard façade over the engine
//! - `reports`, `display`: terminal and CSV renderings
//! - `export`: full snapshots as JSON or YAML
//! - `cli`: clap command handlers used by the `nestegg` binary
//!
//! # Example
//!
//! ```
//! use nestegg::engine::{compose, CalculationInput, IncomeBasis};
//! use nestegg::models::{IncomeCategory, IncomeSource, Money, MonthPeriod, SavingsBaseline, SavingsPercentage};
//!
//! let sources = vec![IncomeSource::monthly("Job", Money::from_dollars(3000), IncomeCategory::Salary)];
//! let result = compose(&CalculationInput {
//!     period: MonthPeriod::new(2025, 1),
//!     income: IncomeBasis::Sources(&sources),
//!     baseline: SavingsBaseline::default(),
//!     savings_percentage: SavingsPercentage::new(20.0),
//! });
//! assert_eq!(result.monthly_savings_target, Money::from_dollars(600));
//! ```

use std::sync::Once;

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{NestEggError, NestEggResult};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr, `RUST_LOG` or `nestegg=warn`)
///
/// Safe to call more than once.
pub fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("nestegg=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
