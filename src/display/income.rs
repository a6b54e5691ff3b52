//! Income, savings and goal list formatting

use crate::engine::to_monthly;
use crate::models::{Goal, IncomeSource, Money, MonthlyIncomeEntry, MonthlySavingsRecord};

use super::report::{format_money, truncate};

const NAME_WIDTH: usize = 24;

/// Income sources with their monthly equivalent
pub fn format_source_list(sources: &[IncomeSource], symbol: &str) -> String {
    if sources.is_empty() {
        return "No income sources found.".to_string();
    }

    let mut output = format!(
        "{:<13}  {:<NAME_WIDTH$}  {:<12}  {:<10}  {:>12}  {:>12}  {}\n",
        "ID", "Name", "Category", "Frequency", "Amount", "Per month", "Status"
    );
    output.push_str(&format!(
        "{:-<13}  {:-<NAME_WIDTH$}  {:-<12}  {:-<10}  {:->12}  {:->12}  {:-<6}\n",
        "", "", "", "", "", "", ""
    ));

    for source in sources {
        output.push_str(&format!(
            "{:<13}  {:<NAME_WIDTH$}  {:<12}  {:<10}  {:>12}  {:>12}  {}\n",
            source.id.to_string(),
            truncate(&source.name, NAME_WIDTH),
            source.category,
            source.frequency,
            format_money(source.amount, symbol),
            format_money(to_monthly(source.amount, source.frequency), symbol),
            if source.active { "" } else { "Paused" },
        ));
    }

    output
}

/// Entries grouped under their month
pub fn format_entry_list(entries: &[MonthlyIncomeEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No income entries found.".to_string();
    }

    let mut output = String::new();
    let mut current = None;

    for entry in entries {
        let period = entry.period();
        if current != Some(period) {
            if current.is_some() {
                output.push('\n');
            }
            output.push_str(&format!("{}\n", period.display_long()));
            current = Some(period);
        }

        output.push_str(&format!(
            "  {:<13}  {:<NAME_WIDTH$}  {:<12}  {:>12}  {}\n",
            entry.id.to_string(),
            truncate(&entry.name, NAME_WIDTH),
            entry.category,
            format_money(entry.amount, symbol),
            if entry.recurring { "recurring" } else { "one-off" },
        ));
    }

    let total: Money = entries.iter().filter(|e| e.active).map(|e| e.amount).sum();
    output.push_str(&format!("\nTotal: {}\n", format_money(total, symbol)));
    output
}

pub fn format_savings_list(records: &[MonthlySavingsRecord], symbol: &str) -> String {
    if records.is_empty() {
        return "No savings recorded.".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            "{}  {:>12}  {}\n",
            record.period(),
            format_money(record.saved, symbol),
            record.note.as_deref().unwrap_or(""),
        ));
    }

    let total: Money = records.iter().map(|r| r.saved).sum();
    output.push_str(&format!("Total    {:>12}\n", format_money(total, symbol)));
    output
}

pub fn format_goal_list(goals: &[Goal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No goals found.".to_string();
    }

    goals
        .iter()
        .map(|goal| {
            let deadline = goal
                .deadline
                .map(|d| format!("  due {}", d))
                .unwrap_or_default();
            format!(
                "{:<13}  {:<NAME_WIDTH$}  {:>12} of {:>12}{}\n",
                goal.id.to_string(),
                truncate(&goal.name, NAME_WIDTH),
                format_money(goal.current, symbol),
                format_money(goal.target, symbol),
                deadline,
            )
        })
        .collect()
}
