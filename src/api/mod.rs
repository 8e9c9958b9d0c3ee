//! HTTP API module for the Stay Pricing Engine.
//!
//! This module provides the quote endpoints callers use to price a stay and
//! to preview a cancellation fee. It is purely advisory: nothing here
//! persists a booking. A caller that does persist bookings must, within one
//! atomic storage transaction, verify room availability, insert the booking
//! and mark the room unavailable, so two concurrent attempts cannot both
//! succeed for the same room; that discipline lives entirely on the caller's
//! side of these endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CancellationQuoteRequest, PriceQuoteRequest};
pub use response::{ApiError, CancellationQuoteResponse, PriceQuoteResponse};
pub use state::AppState;
