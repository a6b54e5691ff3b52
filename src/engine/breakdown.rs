//! Income breakdown by category
//!
//! Categories come out in order of first occurrence in the input. That
//! order only keeps output deterministic; callers that display a ranking
//! should use [`sorted_by_amount`].

use serde::Serialize;

use super::income::IncomeRecord;
use crate::models::{IncomeCategory, Money};

/// One category's share of monthly income
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: IncomeCategory,
    pub amount: Money,
    /// Share of the total in percent; 0 when the total is 0
    pub percentage_of_total: f64,
}

/// Insertion-ordered category accumulator
#[derive(Debug, Default)]
struct CategoryTotals(Vec<(IncomeCategory, Money)>);

impl CategoryTotals {
    fn add(&mut self, category: IncomeCategory, amount: Money) {
        match self.0.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => self.0.push((category, amount)),
        }
    }

    fn grand_total(&self) -> Money {
        self.0.iter().map(|(_, amount)| *amount).sum()
    }
}

/// Group the active records by category and compute each category's share
pub fn category_breakdown<R, I>(records: I) -> Vec<CategoryBreakdown>
where
    R: IncomeRecord,
    I: IntoIterator<Item = R>,
{
    let mut totals = CategoryTotals::default();
    for record in records.into_iter().filter(|r| r.is_active()) {
        totals.add(record.category(), record.monthly_amount());
    }

    let grand_total = totals.grand_total();

    totals
        .0
        .into_iter()
        .map(|(category, amount)| CategoryBreakdown {
            category,
            amount,
            percentage_of_total: amount.ratio_of(grand_total) * 100.0,
        })
        .collect()
}

/// Largest category first; ties keep their input order
pub fn sorted_by_amount(mut breakdown: Vec<CategoryBreakdown>) -> Vec<CategoryBreakdown> {
    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown
}
