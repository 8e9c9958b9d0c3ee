//! Nightly rate calculation.
//!
//! Combines the seasonal daily rate with the room-type multiplier and the
//! Double occupancy surcharge into the rate charged per night.

use rust_decimal::Decimal;

use crate::models::{RatePair, RoomType};

use super::Season;

/// The occupancy surcharge factor for a Double room with exactly 2 guests.
const DOUBLE_OCCUPANCY_SURCHARGE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Computes the rate charged per night for a stay.
///
/// The seasonal daily rate (peak or off-peak from `rates`) is multiplied by
/// the room-type multiplier. For a Double room with exactly 2 guests, a flat
/// surcharge of `peak_rate * 0.1` is then added to the multiplied rate. The
/// surcharge derives from the peak rate even for an off-peak stay.
///
/// The result is left at full precision; rounding happens once, on the stay
/// total.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::{Season, nightly_rate};
/// use pricing_engine::models::{RatePair, RoomType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RatePair {
///     peak_rate: Decimal::from_str("100.00").unwrap(),
///     off_peak_rate: Decimal::from_str("70.00").unwrap(),
/// };
///
/// // Double with 2 guests in peak season: 100 x 1.2 + 100 x 0.1 = 130.00
/// let rate = nightly_rate(Season::Peak, RoomType::Double, 2, &rates);
/// assert_eq!(rate, Decimal::from_str("130.00").unwrap());
/// ```
pub fn nightly_rate(
    season: Season,
    room_type: RoomType,
    guest_count: u32,
    rates: &RatePair,
) -> Decimal {
    let daily_rate = if season.is_peak() {
        rates.peak_rate
    } else {
        rates.off_peak_rate
    };

    let mut rate = daily_rate * room_type.multiplier();

    // Surcharge for exactly 2 guests in a Double, always keyed on the peak rate.
    if room_type == RoomType::Double && guest_count == 2 {
        rate += rates.peak_rate * DOUBLE_OCCUPANCY_SURCHARGE;
    }

    rate
}
