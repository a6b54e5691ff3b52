//! Display formatting for terminal output

pub mod income;
pub mod report;

pub use income::{format_entry_list, format_goal_list, format_savings_list, format_source_list};
pub use report::{double_separator, format_bar, format_header, format_money, format_percentage, separator, truncate};
