//! Error types for the Stay Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while quoting a stay.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Stay Pricing Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pricing_engine::error::EngineError;
///
/// let error = EngineError::TariffNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tariff file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A tariff book file was not found at the specified path.
    #[error("Tariff file not found: {path}")]
    TariffNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A tariff book file could not be parsed.
    #[error("Failed to parse tariff file '{path}': {message}")]
    TariffParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The hotel id was not found in the tariff book.
    #[error("Hotel not found: {hotel_id}")]
    HotelNotFound {
        /// The hotel id that was not found.
        hotel_id: u32,
    },

    /// No rate pair exists for the given hotel and room type.
    #[error("Rate not found for hotel {hotel_id}, room type {room_type_id}")]
    RateNotFound {
        /// The hotel id.
        hotel_id: u32,
        /// The numeric room type id.
        room_type_id: u32,
    },

    /// The check-out date is not strictly after the check-in date.
    #[error("Invalid date range: check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The requested check-out date.
        check_out: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
