//! Integration tests for the Stay Pricing Engine.
//!
//! This test suite exercises the quote API end to end:
//! - Peak and off-peak pricing
//! - Room-type multipliers and the Double occupancy surcharge
//! - Advance-booking discount tiers and their boundaries
//! - Cancellation fee bands and their boundaries
//! - Error cases and their HTTP status mapping

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use pricing_engine::api::{AppState, create_router};
use pricing_engine::config::TariffBook;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let tariffs = TariffBook::load("./config/tariffs").expect("Failed to load tariff book");
    AppState::new(tariffs)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn price_request(
    hotel_id: u32,
    room_type_id: u32,
    check_in: &str,
    check_out: &str,
    booking_date: &str,
    guest_count: u32,
) -> Value {
    json!({
        "hotel_id": hotel_id,
        "room_type_id": room_type_id,
        "check_in": check_in,
        "check_out": check_out,
        "booking_date": booking_date,
        "guest_count": guest_count
    })
}

fn assert_money(result: &Value, field: &str, expected: &str) {
    let actual = decimal(result[field].as_str().unwrap());
    assert_eq!(
        actual,
        decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// Price Quotes
// =============================================================================

/// Spec scenario: 3 peak nights at 100.00, 91 days ahead, standard room.
#[tokio::test]
async fn test_standard_peak_stay_with_30_percent_discount() {
    let router = create_router_for_test();
    let request = price_request(1, 1, "2024-07-10", "2024-07-13", "2024-04-10", 1);

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&result, "base_price", "300.00");
    assert_money(&result, "discounted_price", "210.00");
    assert_eq!(result["discount_percent"].as_u64().unwrap(), 30);
    assert_eq!(result["nights"].as_u64().unwrap(), 3);
    assert_eq!(result["season"].as_str().unwrap(), "peak");
}

/// Spec scenario: Double with exactly 2 guests, 1 peak night at 100.00.
#[tokio::test]
async fn test_double_occupancy_surcharge() {
    let router = create_router_for_test();
    let request = price_request(1, 2, "2024-07-10", "2024-07-11", "2024-07-01", 2);

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::OK);
    // 100 x 1.2 + 100 x 0.1 = 130.00 per night
    assert_money(&result, "base_price", "130.00");
    assert_eq!(result["discount_percent"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_double_with_one_guest_has_no_surcharge() {
    let router = create_router_for_test();
    let request = price_request(1, 2, "2024-07-10", "2024-07-11", "2024-07-01", 1);

    let (_, result) = post_json(router, "/quote/price", request).await;

    assert_money(&result, "base_price", "120.00");
}

#[tokio::test]
async fn test_off_peak_stay_uses_off_peak_rate() {
    let router = create_router_for_test();
    let request = price_request(1, 1, "2024-10-10", "2024-10-13", "2024-10-01", 1);

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&result, "base_price", "210.00");
    assert_eq!(result["season"].as_str().unwrap(), "off_peak");
}

#[tokio::test]
async fn test_suite_multiplier_on_second_hotel() {
    let router = create_router_for_test();
    // Hotel 2 suite: peak 240.00, 2 nights, no discount
    let request = price_request(2, 3, "2024-12-20", "2024-12-22", "2024-12-10", 2);

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::OK);
    // 240 x 1.5 x 2 nights
    assert_money(&result, "base_price", "720.00");
}

#[tokio::test]
async fn test_discount_tier_boundaries() {
    // check-in 2024-07-10; booking dates chosen for exact day gaps
    let cases = [
        ("2024-04-21", 30u64), // 80 days
        ("2024-04-22", 20),    // 79 days
        ("2024-05-11", 20),    // 60 days
        ("2024-05-12", 10),    // 59 days
        ("2024-05-26", 10),    // 45 days
        ("2024-05-27", 0),     // 44 days
    ];

    for (booking_date, expected) in cases {
        let router = create_router_for_test();
        let request = price_request(1, 1, "2024-07-10", "2024-07-11", booking_date, 1);

        let (status, result) = post_json(router, "/quote/price", request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            result["discount_percent"].as_u64().unwrap(),
            expected,
            "booking date {}",
            booking_date
        );
    }
}

#[tokio::test]
async fn test_quote_without_booking_date_defaults_to_today() {
    let router = create_router_for_test();
    // Far-future check-in so the default "today" booking date lands in the
    // 30% tier regardless of when the test runs relative to 2030.
    let request = json!({
        "hotel_id": 1,
        "room_type_id": 1,
        "check_in": "2030-07-10",
        "check_out": "2030-07-11",
        "guest_count": 1
    });

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["discount_percent"].as_u64().unwrap(), 30);
}

// =============================================================================
// Price Quote Errors
// =============================================================================

#[tokio::test]
async fn test_check_out_equal_to_check_in_returns_400() {
    let router = create_router_for_test();
    let request = price_request(1, 1, "2024-07-10", "2024-07-10", "2024-07-01", 1);

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_check_out_before_check_in_returns_400() {
    let router = create_router_for_test();
    let request = price_request(1, 1, "2024-07-10", "2024-07-08", "2024-07-01", 1);

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_unknown_hotel_returns_400() {
    let router = create_router_for_test();
    let request = price_request(77, 1, "2024-07-10", "2024-07-13", "2024-07-01", 1);

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "HOTEL_NOT_FOUND");
}

#[tokio::test]
async fn test_known_hotel_without_rate_returns_400() {
    let router = create_router_for_test();
    // Hotel 3 exists but ships no suite rate
    let request = price_request(3, 3, "2024-07-10", "2024-07-13", "2024-07-01", 1);

    let (status, result) = post_json(router, "/quote/price", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"].as_str().unwrap(), "RATE_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/quote/price")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Cancellation Fee Quotes
// =============================================================================

fn cancellation_request(check_in: &str, cancellation_date: &str, total_price: &str) -> Value {
    json!({
        "check_in": check_in,
        "booking_date": "2024-01-05",
        "cancellation_date": cancellation_date,
        "total_price": total_price
    })
}

#[tokio::test]
async fn test_cancellation_more_than_60_days_out_is_free() {
    let router = create_router_for_test();
    // 2024-05-10 is 61 days before 2024-07-10
    let request = cancellation_request("2024-07-10", "2024-05-10", "300.00");

    let (status, result) = post_json(router, "/quote/cancellation-fee", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&result, "fee", "0.00");
}

#[tokio::test]
async fn test_cancellation_at_60_days_forfeits_half() {
    let router = create_router_for_test();
    // 2024-05-11 is 60 days before 2024-07-10
    let request = cancellation_request("2024-07-10", "2024-05-11", "300.00");

    let (_, result) = post_json(router, "/quote/cancellation-fee", request).await;

    assert_money(&result, "fee", "150.00");
}

#[tokio::test]
async fn test_cancellation_at_30_days_forfeits_half() {
    let router = create_router_for_test();
    // 2024-06-10 is 30 days before 2024-07-10
    let request = cancellation_request("2024-07-10", "2024-06-10", "300.00");

    let (_, result) = post_json(router, "/quote/cancellation-fee", request).await;

    assert_money(&result, "fee", "150.00");
}

#[tokio::test]
async fn test_cancellation_at_29_days_forfeits_everything() {
    let router = create_router_for_test();
    // 2024-06-11 is 29 days before 2024-07-10
    let request = cancellation_request("2024-07-10", "2024-06-11", "300.00");

    let (_, result) = post_json(router, "/quote/cancellation-fee", request).await;

    assert_money(&result, "fee", "300.00");
}

#[tokio::test]
async fn test_cancellation_quote_defaults_to_today() {
    let router = create_router_for_test();
    // Check-in far in the future: cancelling today must be free.
    let request = json!({
        "check_in": "2030-07-10",
        "booking_date": "2024-01-05",
        "total_price": "300.00"
    });

    let (status, result) = post_json(router, "/quote/cancellation-fee", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_money(&result, "fee", "0.00");
}

#[tokio::test]
async fn test_cancellation_missing_total_price_returns_400() {
    let router = create_router_for_test();
    let request = json!({
        "check_in": "2024-07-10",
        "booking_date": "2024-01-05",
        "cancellation_date": "2024-05-26"
    });

    let (status, _) = post_json(router, "/quote/cancellation-fee", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Full Journey
// =============================================================================

/// Quote a stay, then quote cancelling it at several points in time; the fee
/// must never exceed what was quoted and must shrink with more notice.
#[tokio::test]
async fn test_quote_then_cancellation_fees_are_consistent() {
    let router = create_router_for_test();
    let request = price_request(2, 2, "2024-08-15", "2024-08-20", "2024-05-01", 2);

    let (status, quote) = post_json(router, "/quote/price", request).await;
    assert_eq!(status, StatusCode::OK);

    let total = quote["discounted_price"].as_str().unwrap().to_string();
    let mut previous_fee = Decimal::ZERO;

    // 90, 60, 45 and 10 days of notice before the 2024-08-15 check-in,
    // latest notice last: each fee must be at least the one before it.
    for cancellation_date in ["2024-05-17", "2024-06-16", "2024-07-01", "2024-08-05"] {
        let router = create_router_for_test();
        let request = cancellation_request("2024-08-15", cancellation_date, &total);

        let (status, result) = post_json(router, "/quote/cancellation-fee", request).await;
        assert_eq!(status, StatusCode::OK);

        let fee = decimal(result["fee"].as_str().unwrap());
        assert!(fee >= Decimal::ZERO);
        assert!(fee <= decimal(&total));
        assert!(
            fee >= previous_fee,
            "fee {} at {} should not be less than {}",
            fee,
            cancellation_date,
            previous_fee
        );
        previous_fee = fee;
    }
}
