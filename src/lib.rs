//! Stay Pricing & Cancellation Engine for hotel bookings
//!
//! This crate computes the price of a hotel stay from seasonal rates, room-type
//! multipliers, group-size surcharges and advance-booking discounts, and the
//! time-banded fee owed when a booking is cancelled. The rule tables live in
//! [`calculation`]; rate pairs are resolved from a YAML tariff book
//! ([`config`]) and both contracts are exposed to callers through a small HTTP
//! quote API ([`api`]).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
