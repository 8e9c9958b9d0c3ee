//! Cancellation fee schedule.
//!
//! The fee is banded on how many days remain before check-in at the moment of
//! cancellation: more than 60 days out cancels free, 30 to 60 days out
//! forfeits half the total, under 30 days forfeits everything. The gap
//! between booking date and cancellation date plays no part in the schedule.

use rust_decimal::Decimal;

use crate::models::{CancellationRequest, CancellationResult};

use super::round_money;

/// Days before check-in above which cancellation is free.
const FREE_CANCELLATION_DAYS: i64 = 60;

/// Days before check-in below which the full total is forfeited.
const FULL_FORFEIT_DAYS: i64 = 30;

/// The half-refund factor for the middle band.
const HALF_FORFEIT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Computes the fee owed for cancelling a booking.
///
/// This is a total function: any well-formed request yields a fee. The
/// result is rounded to 2 decimal places and clamped to
/// `[0, total_price]`.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::compute_cancellation_fee;
/// use pricing_engine::models::CancellationRequest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // Cancelling 45 days before check-in forfeits half the total.
/// let request = CancellationRequest {
///     booking_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     check_in: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
///     cancellation_date: NaiveDate::from_ymd_opt(2024, 5, 26).unwrap(),
///     total_price: Decimal::from_str("300.00").unwrap(),
/// };
///
/// let result = compute_cancellation_fee(&request);
/// assert_eq!(result.fee, Decimal::from_str("150.00").unwrap());
/// ```
pub fn compute_cancellation_fee(request: &CancellationRequest) -> CancellationResult {
    let days_before_check_in = (request.check_in - request.cancellation_date).num_days();

    let fee = if days_before_check_in > FREE_CANCELLATION_DAYS {
        Decimal::ZERO
    } else if days_before_check_in >= FULL_FORFEIT_DAYS {
        request.total_price * HALF_FORFEIT
    } else {
        request.total_price
    };

    // Half-up rounding of an odd-cent total could otherwise tip the fee a
    // cent past the amount actually paid.
    let fee = round_money(fee).min(request.total_price);

    CancellationResult { fee }
}
