//! Calculation logic for the Stay Pricing Engine.
//!
//! This module contains the pricing and cancellation rule tables: season
//! selection by check-in month, room-type rate multipliers with the Double
//! occupancy surcharge, advance-booking discount tiers, the stay price
//! calculation itself, and the time-banded cancellation fee schedule.
//! Everything here is a pure function of its inputs plus the fixed rule
//! constants; no storage, no clock, no logging.

mod advance_discount;
mod cancellation_fee;
mod money;
mod nightly_rate;
mod season;
mod stay_price;

pub use advance_discount::DiscountTier;
pub use cancellation_fee::compute_cancellation_fee;
pub use money::round_money;
pub use nightly_rate::nightly_rate;
pub use season::{PEAK_MONTHS, Season};
pub use stay_price::compute_price;
