//! Tariff book file structures.
//!
//! Strongly-typed structures deserialized from the YAML tariff files.
//! Monetary rates deserialize as exact decimals, never binary floats.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// A hotel listed in the tariff book.
#[derive(Debug, Clone, Deserialize)]
pub struct Hotel {
    /// The hotel's display name.
    pub name: String,
    /// The city the hotel is in.
    pub city: String,
}

/// The `hotels.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HotelsConfig {
    /// Map of hotel id to hotel details.
    pub hotels: HashMap<u32, Hotel>,
}

/// One rate row: the peak / off-peak pair for a hotel room type.
#[derive(Debug, Clone, Deserialize)]
pub struct RateEntry {
    /// The hotel this rate belongs to.
    pub hotel_id: u32,
    /// The numeric room type id (1 = Standard, 2 = Double, 3 = Suite).
    pub room_type_id: u32,
    /// The nightly rate during peak season.
    pub peak_rate: Decimal,
    /// The nightly rate outside peak season.
    pub off_peak_rate: Decimal,
}

/// The `rates.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSheet {
    /// All rate rows in the book.
    pub rates: Vec<RateEntry>,
}
