//! Savings records and savings configuration values

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SavingsRecordId;
use super::money::Money;
use super::period::MonthPeriod;

/// Amount actually set aside in one month
///
/// At most one record exists per (year, month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySavingsRecord {
    pub id: SavingsRecordId,
    pub year: i32,
    pub month: u32,
    pub saved: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MonthlySavingsRecord {
    pub fn new(period: MonthPeriod, saved: Money) -> Self {
        Self {
            id: SavingsRecordId::new(),
            year: period.year,
            month: period.month,
            saved,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn period(&self) -> MonthPeriod {
        MonthPeriod::new(self.year, self.month)
    }
}

/// Savings that exist independently of the tracked months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavingsBaseline {
    /// Liquid savings on hand today
    pub current_savings: Money,
    /// Savings accumulated before tracking started
    pub already_saved: Money,
}

impl SavingsBaseline {
    pub fn new(current_savings: Money, already_saved: Money) -> Self {
        Self {
            current_savings,
            already_saved,
        }
    }

    pub fn total(&self) -> Money {
        self.current_savings + self.already_saved
    }
}

/// Target share of income to save, in percent (0 to 100)
///
/// Deserialized values go through [`SavingsPercentage::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SavingsPercentage(f64);

impl SavingsPercentage {
    /// Values outside 0..=100 (and NaN) are clamped into range
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self(0.0);
        }
        Self(percent.clamp(0.0, 100.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for SavingsPercentage {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}

impl From<SavingsPercentage> for f64 {
    fn from(percent: SavingsPercentage) -> Self {
        percent.0
    }
}

impl Default for SavingsPercentage {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for SavingsPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            f.pad(&format!("{:.0}%", self.0))
        } else {
            f.pad(&format!("{:.1}%", self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(SavingsPercentage::new(150.0).value(), 100.0);
        assert_eq!(SavingsPercentage::new(-5.0).value(), 0.0);
        assert_eq!(SavingsPercentage::new(f64::NAN).value(), 0.0);
        assert_eq!(SavingsPercentage::new(22.5).value(), 22.5);
    }

    #[test]
    fn test_percentage_deserialize_clamps() {
        let high: SavingsPercentage = serde_json::from_str("250.0").unwrap();
        assert_eq!(high.value(), 100.0);
        let low: SavingsPercentage = serde_json::from_str("-3").unwrap();
        assert_eq!(low.value(), 0.0);
        assert_eq!(serde_json::to_string(&SavingsPercentage::new(12.5)).unwrap(), "12.5");
    }

    #[test]
    fn test_percentage_display() {
        assert_eq!(SavingsPercentage::new(20.0).to_string(), "20%");
        assert_eq!(SavingsPercentage::new(12.5).to_string(), "12.5%");
    }

    #[test]
    fn test_baseline_total() {
        let baseline = SavingsBaseline::new(Money::from_dollars(2000), Money::from_dollars(500));
        assert_eq!(baseline.total(), Money::from_dollars(2500));
    }

    #[test]
    fn test_record_with_note() {
        let record = MonthlySavingsRecord::new(MonthPeriod::new(2025, 6), Money::from_dollars(400))
            .with_note("skipped vacation");
        assert_eq!(record.period(), MonthPeriod::new(2025, 6));
        assert_eq!(record.note.as_deref(), Some("skipped vacation"));
    }
}
