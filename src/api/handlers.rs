//! HTTP request handlers for the Stay Pricing Engine API.
//!
//! This module contains the handler functions for the quote endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_cancellation_fee, compute_price};
use crate::models::{CancellationRequest, PricingRequest, RoomType};

use super::request::{CancellationQuoteRequest, PriceQuoteRequest};
use super::response::{
    ApiError, ApiErrorResponse, CancellationQuoteResponse, PriceQuoteResponse, QUOTE_CURRENCY,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote/price", post(price_quote_handler))
        .route("/quote/cancellation-fee", post(cancellation_quote_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into a 400 error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /quote/price.
///
/// Resolves the hotel and room type to a rate pair, then prices the stay.
/// Lookup and date-range failures surface as 400-class errors.
async fn price_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceQuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing price quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let book = state.tariffs();

    // Hotel existence first, so an unknown hotel reads as its own error
    // rather than a missing rate.
    if let Err(err) = book.hotel(request.hotel_id) {
        warn!(
            correlation_id = %correlation_id,
            hotel_id = request.hotel_id,
            "Hotel not found"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    let rates = match book.rate_pair(request.hotel_id, request.room_type_id) {
        Ok(rates) => rates,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                hotel_id = request.hotel_id,
                room_type_id = request.room_type_id,
                "Rate not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    // An interactive quote is priced as if booked today.
    let booking_date = request
        .booking_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let pricing_request = PricingRequest {
        check_in: request.check_in,
        check_out: request.check_out,
        booking_date,
        room_type: RoomType::from_id(request.room_type_id),
        guest_count: request.guest_count,
        rates,
    };

    match compute_price(&pricing_request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                hotel_id = request.hotel_id,
                nights = result.nights,
                base_price = %result.base_price,
                discounted_price = %result.discounted_price,
                discount_percent = result.discount_percent,
                "Price quote completed"
            );
            let response: PriceQuoteResponse = result.into();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Price quote failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /quote/cancellation-fee.
///
/// The fee is advisory: the caller separately updates booking status once the
/// customer confirms.
async fn cancellation_quote_handler(
    payload: Result<Json<CancellationQuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cancellation fee quote");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let cancellation_date = request
        .cancellation_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let result = compute_cancellation_fee(&CancellationRequest {
        booking_date: request.booking_date,
        check_in: request.check_in,
        cancellation_date,
        total_price: request.total_price,
    });

    info!(
        correlation_id = %correlation_id,
        fee = %result.fee,
        "Cancellation fee quote completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CancellationQuoteResponse {
            fee: result.fee,
            currency: QUOTE_CURRENCY.to_string(),
        }),
    )
        .into_response()
}
