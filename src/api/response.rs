//! Response types for the Stay Pricing Engine API.
//!
//! This module defines the quote response bodies, the error response
//! structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::Season;
use crate::error::EngineError;
use crate::models::PricingResult;

/// The currency all quotes are expressed in.
pub const QUOTE_CURRENCY: &str = "GBP";

/// Response body for the `/quote/price` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuoteResponse {
    /// The undiscounted total for the stay.
    pub base_price: Decimal,
    /// The total after the advance-booking discount.
    pub discounted_price: Decimal,
    /// The discount applied, as a whole percentage.
    pub discount_percent: u32,
    /// The number of nights in the stay.
    pub nights: u32,
    /// The season the stay was priced under.
    pub season: Season,
    /// The quote currency.
    pub currency: String,
}

impl From<PricingResult> for PriceQuoteResponse {
    fn from(result: PricingResult) -> Self {
        Self {
            base_price: result.base_price,
            discounted_price: result.discounted_price,
            discount_percent: result.discount_percent,
            nights: result.nights,
            season: result.season,
            currency: QUOTE_CURRENCY.to_string(),
        }
    }
}

/// Response body for the `/quote/cancellation-fee` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationQuoteResponse {
    /// The fee owed for cancelling now.
    pub fee: Decimal,
    /// The quote currency.
    pub currency: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::TariffNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "TARIFF_ERROR",
                    "Tariff configuration error",
                    format!("Tariff file not found: {}", path),
                ),
            },
            EngineError::TariffParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "TARIFF_ERROR",
                    "Tariff configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::HotelNotFound { hotel_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "HOTEL_NOT_FOUND",
                    format!("Hotel not found: {}", hotel_id),
                    "The requested hotel id is not in the tariff book",
                ),
            },
            EngineError::RateNotFound {
                hotel_id,
                room_type_id,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATE_NOT_FOUND",
                    format!(
                        "Rate not found for hotel {}, room type {}",
                        hotel_id, room_type_id
                    ),
                    "No rate pair exists for the selected hotel and room type",
                ),
            },
            EngineError::InvalidDateRange {
                check_in,
                check_out,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    format!(
                        "Invalid date range: check-out {} must be after check-in {}",
                        check_out, check_in
                    ),
                    "A stay must be at least one night",
                ),
            },
        }
    }
}
