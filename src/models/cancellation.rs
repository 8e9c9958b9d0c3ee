//! Cancellation fee request and result value types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything the cancellation fee calculator needs for one booking.
///
/// The fee schedule is keyed on how far `cancellation_date` falls before
/// `check_in`. `booking_date` is carried because stored bookings have one and
/// callers pass the full record through, but the schedule never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationRequest {
    /// The date the booking was originally made.
    pub booking_date: NaiveDate,
    /// The first night of the booked stay.
    pub check_in: NaiveDate,
    /// The date the cancellation is taking effect (usually "today").
    pub cancellation_date: NaiveDate,
    /// The total price paid for the booking (non-negative).
    pub total_price: Decimal,
}

/// The fee owed for a cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationResult {
    /// The fee, rounded to 2 decimal places, within `[0, total_price]`.
    pub fee: Decimal,
}
