//! Tariff book loading for the Stay Pricing Engine.
//!
//! This module provides the types and loader for the YAML tariff book: the
//! hotel directory and the per-(hotel, room type) rate pairs that back the
//! pricing contract's rate lookups.

mod loader;
mod types;

pub use loader::TariffBook;
pub use types::{Hotel, HotelsConfig, RateEntry, RateSheet};
