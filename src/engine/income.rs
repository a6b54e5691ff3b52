//! Income aggregation
//!
//! Two interchangeable input shapes feed the same sums: recurring
//! `IncomeSource` definitions (normalized by frequency) and month-scoped
//! `MonthlyIncomeEntry` records (summed as-is). Both implement
//! [`IncomeRecord`], which is also what the breakdown aggregator groups.

use super::frequency::to_monthly;
use crate::models::{IncomeCategory, IncomeSource, Money, MonthPeriod, MonthlyIncomeEntry};

/// Anything that contributes a monthly income amount under a category
pub trait IncomeRecord {
    fn category(&self) -> IncomeCategory;

    /// Amount this record adds to one month's income
    fn monthly_amount(&self) -> Money;

    fn is_active(&self) -> bool;
}

impl IncomeRecord for IncomeSource {
    fn category(&self) -> IncomeCategory {
        self.category
    }

    fn monthly_amount(&self) -> Money {
        to_monthly(self.amount, self.frequency)
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl IncomeRecord for MonthlyIncomeEntry {
    fn category(&self) -> IncomeCategory {
        self.category
    }

    fn monthly_amount(&self) -> Money {
        self.amount
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

impl<T: IncomeRecord + ?Sized> IncomeRecord for &T {
    fn category(&self) -> IncomeCategory {
        (**self).category()
    }

    fn monthly_amount(&self) -> Money {
        (**self).monthly_amount()
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

/// Sum of the monthly amounts of the active records
pub fn active_monthly_total<R, I>(records: I) -> Money
where
    R: IncomeRecord,
    I: IntoIterator<Item = R>,
{
    records
        .into_iter()
        .filter(|r| r.is_active())
        .map(|r| r.monthly_amount())
        .sum()
}

/// Monthly income projected from recurring source definitions
pub fn monthly_income_from_sources(sources: &[IncomeSource]) -> Money {
    active_monthly_total(sources)
}

/// Monthly income actually recorded in one month's entries
pub fn monthly_income_from_entries<'a, I>(entries: I) -> Money
where
    I: IntoIterator<Item = &'a MonthlyIncomeEntry>,
{
    active_monthly_total(entries)
}

/// The entries that belong to `period`
pub fn entries_for_month(
    entries: &[MonthlyIncomeEntry],
    period: MonthPeriod,
) -> impl Iterator<Item = &MonthlyIncomeEntry> {
    entries.iter().filter(move |e| e.is_in(period))
}

/// Recorded income for every month of `year`, January first
///
/// Months without entries are zero.
pub fn monthly_income_series(entries: &[MonthlyIncomeEntry], year: i32) -> Vec<(MonthPeriod, Money)> {
    MonthPeriod::months_of_year(year)
        .map(|period| {
            (
                period,
                monthly_income_from_entries(entries_for_month(entries, period)),
            )
        })
        .collect()
}

/// Recorded income for `year`: the sum of its twelve monthly totals
pub fn yearly_income_from_entries(entries: &[MonthlyIncomeEntry], year: i32) -> Money {
    monthly_income_series(entries, year)
        .into_iter()
        .map(|(_, total)| total)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(period: MonthPeriod, dollars: i64) -> MonthlyIncomeEntry {
        MonthlyIncomeEntry::one_off(period, "Gig", Money::from_dollars(dollars), IncomeCategory::Freelance)
    }

    #[test]
    fn test_sources_are_normalized_and_filtered() {
        let mut paused = IncomeSource::monthly("Old job", Money::from_dollars(9999), IncomeCategory::Salary);
        paused.set_active(false);

        let sources = vec![
            IncomeSource::monthly("Job", Money::from_dollars(3000), IncomeCategory::Salary),
            IncomeSource::yearly("Dividends", Money::from_dollars(1200), IncomeCategory::Investment),
            IncomeSource::new("Bonus", Money::from_dollars(5000), IncomeCategory::Other, crate::models::Frequency::OneTime),
            paused,
        ];

        assert_eq!(monthly_income_from_sources(&sources), Money::from_dollars(3100));
    }

    #[test]
    fn test_empty_inputs_are_zero() {
        assert!(monthly_income_from_sources(&[]).is_zero());
        assert!(monthly_income_from_entries(&[]).is_zero());
        assert!(yearly_income_from_entries(&[], 2025).is_zero());
    }

    #[test]
    fn test_entries_sum_without_conversion() {
        let period = MonthPeriod::new(2025, 3);
        let mut inactive = entry(period, 400);
        inactive.active = false;

        let entries = vec![entry(period, 1000), entry(period, 250), inactive];
        assert_eq!(monthly_income_from_entries(&entries), Money::from_dollars(1250));
    }

    #[test]
    fn test_yearly_from_entries_sums_only_that_year() {
        let entries = vec![
            entry(MonthPeriod::new(2025, 1), 1000),
            entry(MonthPeriod::new(2025, 1), 500),
            entry(MonthPeriod::new(2025, 7), 2000),
            entry(MonthPeriod::new(2024, 12), 9000),
        ];

        assert_eq!(yearly_income_from_entries(&entries, 2025), Money::from_dollars(3500));
        assert_eq!(yearly_income_from_entries(&entries, 2024), Money::from_dollars(9000));
    }

    #[test]
    fn test_monthly_series_has_twelve_points() {
        let entries = vec![entry(MonthPeriod::new(2025, 2), 700)];
        let series = monthly_income_series(&entries, 2025);

        assert_eq!(series.len(), 12);
        assert!(series[0].1.is_zero());
        assert_eq!(series[1], (MonthPeriod::new(2025, 2), Money::from_dollars(700)));
    }

    #[test]
    fn test_entries_for_month() {
        let march = MonthPeriod::new(2025, 3);
        let entries = vec![entry(march, 1), entry(march.next(), 2), entry(march, 3)];
        assert_eq!(entries_for_month(&entries, march).count(), 2);
    }
}
