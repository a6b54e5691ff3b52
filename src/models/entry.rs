//! Monthly income entry model
//!
//! An entry is income counted in one specific month. Recurring entries are
//! materialized from an `IncomeSource`; one-off entries stand alone. Any
//! number of entries may share a month.

use serde::{Deserialize, Serialize};

use super::ids::{IncomeEntryId, IncomeSourceId};
use super::income::{IncomeCategory, IncomeSource};
use super::money::Money;
use super::period::MonthPeriod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncomeEntry {
    pub id: IncomeEntryId,
    pub year: i32,
    pub month: u32,
    /// Backing source; `None` for one-off entries
    #[serde(default)]
    pub source_id: Option<IncomeSourceId>,
    pub amount: Money,
    pub name: String,
    pub category: IncomeCategory,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub recurring: bool,
}

fn default_active() -> bool {
    true
}

impl MonthlyIncomeEntry {
    /// A one-off entry that has no backing source
    pub fn one_off(
        period: MonthPeriod,
        name: impl Into<String>,
        amount: Money,
        category: IncomeCategory,
    ) -> Self {
        Self {
            id: IncomeEntryId::new(),
            year: period.year,
            month: period.month,
            source_id: None,
            amount,
            name: name.into(),
            category,
            active: true,
            recurring: false,
        }
    }

    /// Materialize `source` into `period` with an already-normalized amount
    pub fn from_source(source: &IncomeSource, period: MonthPeriod, monthly_amount: Money) -> Self {
        Self {
            id: IncomeEntryId::new(),
            year: period.year,
            month: period.month,
            source_id: Some(source.id),
            amount: monthly_amount,
            name: source.name.clone(),
            category: source.category,
            active: source.active,
            recurring: true,
        }
    }

    pub fn period(&self) -> MonthPeriod {
        MonthPeriod::new(self.year, self.month)
    }

    pub fn is_in(&self, period: MonthPeriod) -> bool {
        self.year == period.year && self.month == period.month
    }
}
