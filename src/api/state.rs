//! Application state for the Stay Pricing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TariffBook;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the loaded tariff book.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tariff book.
    tariffs: Arc<TariffBook>,
}

impl AppState {
    /// Creates a new application state with the given tariff book.
    pub fn new(tariffs: TariffBook) -> Self {
        Self {
            tariffs: Arc::new(tariffs),
        }
    }

    /// Returns a reference to the tariff book.
    pub fn tariffs(&self) -> &TariffBook {
        &self.tariffs
    }
}
