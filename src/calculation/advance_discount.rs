//! Advance-booking discount tiers.
//!
//! Bookings made well before check-in earn a percentage discount on the stay
//! total. Tiers are half-open on the lower bound, so a boundary day always
//! belongs to the higher tier: exactly 80 days ahead earns 30%, exactly 60
//! earns 20%, exactly 45 earns 10%.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The advance-booking discount tier applied to a stay.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::DiscountTier;
///
/// assert_eq!(DiscountTier::for_days_advance(91), DiscountTier::Tier30);
/// assert_eq!(DiscountTier::for_days_advance(45), DiscountTier::Tier10);
/// assert_eq!(DiscountTier::for_days_advance(44), DiscountTier::None);
/// assert_eq!(DiscountTier::Tier20.percent(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTier {
    /// Fewer than 45 days ahead (including same-day and late bookings).
    None,
    /// 45-59 days ahead - 10% off.
    Tier10,
    /// 60-79 days ahead - 20% off.
    Tier20,
    /// 80 or more days ahead - 30% off.
    Tier30,
}

impl DiscountTier {
    /// Resolves the tier for a number of days between booking and check-in.
    ///
    /// Negative values are legal (a booking recorded after the check-in date)
    /// and fall into the zero-discount tier.
    pub fn for_days_advance(days_advance: i64) -> Self {
        if days_advance >= 80 {
            DiscountTier::Tier30
        } else if days_advance >= 60 {
            DiscountTier::Tier20
        } else if days_advance >= 45 {
            DiscountTier::Tier10
        } else {
            DiscountTier::None
        }
    }

    /// Returns the discount as a whole percentage (0, 10, 20 or 30).
    pub fn percent(&self) -> u32 {
        match self {
            DiscountTier::None => 0,
            DiscountTier::Tier10 => 10,
            DiscountTier::Tier20 => 20,
            DiscountTier::Tier30 => 30,
        }
    }

    /// Returns the factor the base price is multiplied by (1 - percent/100).
    pub fn price_factor(&self) -> Decimal {
        Decimal::ONE - Decimal::new(self.percent() as i64, 2)
    }
}
