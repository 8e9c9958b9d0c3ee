//! Stay price calculation.
//!
//! Ties the season, nightly rate and discount rules together into the
//! `compute_price` contract: nightly rate x nights, rounded once, then the
//! advance-booking discount applied to the rounded base so the published
//! identity `discounted == round2(base x (1 - pct/100))` holds exactly.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{PricingRequest, PricingResult};

use super::{DiscountTier, Season, nightly_rate, round_money};

/// Computes the base and discounted price for a stay.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`] when `check_out` is not strictly
/// after `check_in`. Rate lookup failures are the caller's concern: a
/// [`PricingRequest`] already carries a resolved rate pair.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::compute_price;
/// use pricing_engine::models::{PricingRequest, RatePair, RoomType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 3 peak nights at 100.00, booked 91 days ahead: 300.00 less 30%.
/// let request = PricingRequest {
///     check_in: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
///     check_out: NaiveDate::from_ymd_opt(2024, 7, 13).unwrap(),
///     booking_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
///     room_type: RoomType::Standard,
///     guest_count: 1,
///     rates: RatePair {
///         peak_rate: Decimal::from_str("100.00").unwrap(),
///         off_peak_rate: Decimal::from_str("70.00").unwrap(),
///     },
/// };
///
/// let result = compute_price(&request).unwrap();
/// assert_eq!(result.base_price, Decimal::from_str("300.00").unwrap());
/// assert_eq!(result.discounted_price, Decimal::from_str("210.00").unwrap());
/// assert_eq!(result.discount_percent, 30);
/// ```
pub fn compute_price(request: &PricingRequest) -> EngineResult<PricingResult> {
    let nights = (request.check_out - request.check_in).num_days();
    if nights < 1 {
        return Err(EngineError::InvalidDateRange {
            check_in: request.check_in,
            check_out: request.check_out,
        });
    }

    let season = Season::for_check_in(request.check_in);
    let rate = nightly_rate(season, request.room_type, request.guest_count, &request.rates);

    // Full precision until the stay total; one rounding step per output.
    let base_price = round_money(rate * Decimal::from(nights));

    let days_advance = (request.check_in - request.booking_date).num_days();
    let tier = DiscountTier::for_days_advance(days_advance);
    let discounted_price = round_money(base_price * tier.price_factor());

    Ok(PricingResult {
        base_price,
        discounted_price,
        discount_percent: tier.percent(),
        nights: nights as u32,
        season,
    })
}
