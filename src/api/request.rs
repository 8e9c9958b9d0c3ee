//! Request types for the Stay Pricing Engine API.
//!
//! This module defines the JSON request structures for the quote endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/quote/price` endpoint.
///
/// The hotel and room type arrive as the numeric ids the booking storage
/// uses; the handler resolves them to a rate pair before pricing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuoteRequest {
    /// The hotel being booked.
    pub hotel_id: u32,
    /// The numeric room type id (1 = Standard, 2 = Double, 3 = Suite).
    pub room_type_id: u32,
    /// The first night of the stay.
    pub check_in: NaiveDate,
    /// The day of departure (must be strictly after `check_in`).
    pub check_out: NaiveDate,
    /// The date the booking is being made; defaults to today when omitted,
    /// which is what an interactive quote wants.
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
    /// The number of guests.
    pub guest_count: u32,
}

/// Request body for the `/quote/cancellation-fee` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationQuoteRequest {
    /// The first night of the booked stay.
    pub check_in: NaiveDate,
    /// The date the booking was made (carried from the stored booking).
    pub booking_date: NaiveDate,
    /// The effective cancellation date; defaults to today when omitted.
    #[serde(default)]
    pub cancellation_date: Option<NaiveDate>,
    /// The total price paid for the booking.
    pub total_price: Decimal,
}
