//! Income source model
//!
//! An income source is a recurring (or one-time) stream the user declares:
//! a salary, a freelance retainer, dividends. Sources are materialized into
//! per-month `MonthlyIncomeEntry` records; see `models::entry`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::IncomeSourceId;
use super::money::Money;

/// Closed set of income categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeCategory {
    Salary,
    Freelance,
    SideHustle,
    Investment,
    Passive,
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 6] = [
        Self::Salary,
        Self::Freelance,
        Self::SideHustle,
        Self::Investment,
        Self::Passive,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Freelance => "freelance",
            Self::SideHustle => "side-hustle",
            Self::Investment => "investment",
            Self::Passive => "passive",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::SideHustle => "Side Hustle",
            Self::Investment => "Investment",
            Self::Passive => "Passive",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for IncomeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}'. Expected one of: salary, freelance, side-hustle, investment, passive, other",
                    s
                )
            })
    }
}

/// How often an income source pays out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Monthly,
    Weekly,
    Yearly,
    OneTime,
    /// A stored value this version does not know; normalizes to zero
    #[serde(other)]
    Unrecognized,
}

impl Frequency {
    /// True for frequencies that contribute to a recurring monthly rate
    pub fn is_recurring(&self) -> bool {
        matches!(self, Self::Monthly | Self::Weekly | Self::Yearly)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Weekly => "Weekly",
            Self::Yearly => "Yearly",
            Self::OneTime => "One-time",
            Self::Unrecognized => "Unknown",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "monthly" => Ok(Self::Monthly),
            "weekly" => Ok(Self::Weekly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            "one-time" | "once" => Ok(Self::OneTime),
            _ => Err(format!(
                "Unknown frequency '{}'. Expected monthly, weekly, yearly or one-time",
                s
            )),
        }
    }
}

/// A user-declared income stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeSourceId,
    pub name: String,
    pub amount: Money,
    pub category: IncomeCategory,
    pub frequency: Frequency,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl IncomeSource {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: IncomeCategory,
        frequency: Frequency,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: IncomeSourceId::new(),
            name: name.into(),
            amount,
            category,
            frequency,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn monthly(name: impl Into<String>, amount: Money, category: IncomeCategory) -> Self {
        Self::new(name, amount, category, Frequency::Monthly)
    }

    pub fn yearly(name: impl Into<String>, amount: Money, category: IncomeCategory) -> Self {
        Self::new(name, amount, category, Frequency::Yearly)
    }

    pub fn weekly(name: impl Into<String>, amount: Money, category: IncomeCategory) -> Self {
        Self::new(name, amount, category, Frequency::Weekly)
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.amount, self.frequency)
    }
}
