//! The peak / off-peak rate pair for a hotel room type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The nightly rates for one (hotel, room type) pair.
///
/// Both values are non-negative monetary amounts carried as exact decimals.
/// The season rules in [`crate::calculation`] pick which of the two applies
/// to a stay; the Double occupancy surcharge always derives from
/// `peak_rate` regardless of the season actually selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePair {
    /// The nightly rate charged during peak season.
    pub peak_rate: Decimal,
    /// The nightly rate charged outside peak season.
    pub off_peak_rate: Decimal,
}
