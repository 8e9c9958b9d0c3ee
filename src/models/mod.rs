//! Core data models for the Stay Pricing Engine.
//!
//! This module contains the value types consumed and produced by the
//! pricing and cancellation calculators.

mod cancellation;
mod pricing;
mod rate_pair;
mod room_type;

pub use cancellation::{CancellationRequest, CancellationResult};
pub use pricing::{PricingRequest, PricingResult};
pub use rate_pair::RatePair;
pub use room_type::RoomType;
