//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, half-up.
///
/// All published amounts carry exactly 2 fractional digits. Rounding is
/// applied once per output value, at the final step of a calculation;
/// intermediate values stay at full precision so multi-night totals do not
/// accumulate rounding error.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("210.005").unwrap();
/// assert_eq!(round_money(amount), Decimal::from_str("210.01").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
