//! Configuration module for NestEgg
//!
//! - Data directory resolution
//! - User settings persistence (savings percentage, baseline, scenarios)

pub mod paths;
pub mod settings;

pub use paths::NestEggPaths;
pub use settings::{IncomeMode, Settings};
