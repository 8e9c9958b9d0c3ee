//! Pricing request and result value types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::Season;

use super::{RatePair, RoomType};

/// Everything the price calculator needs for one stay.
///
/// The caller has already resolved the hotel and room type to a [`RatePair`]
/// (via the tariff book or its own storage); the calculator itself never
/// performs lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRequest {
    /// The first night of the stay.
    pub check_in: NaiveDate,
    /// The day of departure (exclusive; must be strictly after `check_in`).
    pub check_out: NaiveDate,
    /// The date the booking is being made.
    pub booking_date: NaiveDate,
    /// The room type being booked.
    pub room_type: RoomType,
    /// The number of guests (at least 1).
    pub guest_count: u32,
    /// The peak / off-peak rates for the hotel and room type.
    pub rates: RatePair,
}

/// The priced stay.
///
/// `base_price` and `discounted_price` are rounded to 2 decimal places;
/// `discounted_price <= base_price` always holds. `nights` and `season`
/// are carried for quote and receipt display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    /// The undiscounted total for the stay.
    pub base_price: Decimal,
    /// The total after the advance-booking discount.
    pub discounted_price: Decimal,
    /// The discount applied, as a whole percentage (0, 10, 20 or 30).
    pub discount_percent: u32,
    /// The number of nights in the stay.
    pub nights: u32,
    /// The season the stay was priced under (selected by check-in month).
    pub season: Season,
}
