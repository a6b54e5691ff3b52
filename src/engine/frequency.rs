//! Frequency normalization
//!
//! Converts an amount paid at some recurrence into its monthly and yearly
//! equivalents.

use crate::models::{Frequency, Money};

pub const WEEKS_PER_YEAR: i64 = 52;
pub const MONTHS_PER_YEAR: i64 = 12;

/// Monthly equivalent of `amount` paid at `frequency`
///
/// Weekly uses the average of 52/12 weeks per month. One-time amounts never
/// contribute to a recurring rate, so they normalize to zero. A frequency
/// this build does not recognize also yields zero, with a warning.
pub fn to_monthly(amount: Money, frequency: Frequency) -> Money {
    match frequency {
        Frequency::Monthly => amount,
        Frequency::Weekly => amount.scale(WEEKS_PER_YEAR as f64 / MONTHS_PER_YEAR as f64),
        Frequency::Yearly => amount.scale(1.0 / MONTHS_PER_YEAR as f64),
        Frequency::OneTime => Money::zero(),
        Frequency::Unrecognized => {
            tracing::warn!(
                amount = amount.cents(),
                "unrecognized income frequency, treating amount as zero"
            );
            Money::zero()
        }
    }
}

/// Yearly equivalent: always exactly twelve times the monthly equivalent
pub fn to_yearly(amount: Money, frequency: Frequency) -> Money {
    to_monthly(amount, frequency) * MONTHS_PER_YEAR
}
