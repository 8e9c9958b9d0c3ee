//! Tariff book loading functionality.
//!
//! This module provides the [`TariffBook`] type for loading hotel and rate
//! data from YAML files and resolving rate pairs for pricing.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RatePair;

use super::types::{Hotel, HotelsConfig, RateSheet};

/// Loads and provides access to the tariff book.
///
/// The `TariffBook` reads YAML files from a directory and answers the two
/// lookups the quote layer needs: hotel existence and the rate pair for a
/// (hotel, room type) combination.
///
/// # Directory Structure
///
/// ```text
/// config/tariffs/
/// ├── hotels.yaml   # hotel id -> name, city
/// └── rates.yaml    # per (hotel, room type) peak / off-peak rates
/// ```
///
/// # Example
///
/// ```no_run
/// use pricing_engine::config::TariffBook;
///
/// let book = TariffBook::load("./config/tariffs").unwrap();
///
/// let hotel = book.hotel(1).unwrap();
/// println!("Hotel: {}", hotel.name);
///
/// let rates = book.rate_pair(1, 2).unwrap();
/// println!("Peak rate: {}", rates.peak_rate);
/// ```
#[derive(Debug, Clone)]
pub struct TariffBook {
    hotels: HashMap<u32, Hotel>,
    rates: HashMap<(u32, u32), RatePair>,
}

impl TariffBook {
    /// Loads the tariff book from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TariffNotFound`] when either file is missing
    /// and [`EngineError::TariffParseError`] when a file contains invalid
    /// YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let hotels_config = Self::load_yaml::<HotelsConfig>(&path.join("hotels.yaml"))?;
        let rate_sheet = Self::load_yaml::<RateSheet>(&path.join("rates.yaml"))?;

        let rates = rate_sheet
            .rates
            .into_iter()
            .map(|entry| {
                (
                    (entry.hotel_id, entry.room_type_id),
                    RatePair {
                        peak_rate: entry.peak_rate,
                        off_peak_rate: entry.off_peak_rate,
                    },
                )
            })
            .collect();

        Ok(Self {
            hotels: hotels_config.hotels,
            rates,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::TariffNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::TariffParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Gets a hotel by its id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::HotelNotFound`] for an unknown id.
    pub fn hotel(&self, hotel_id: u32) -> EngineResult<&Hotel> {
        self.hotels
            .get(&hotel_id)
            .ok_or(EngineError::HotelNotFound { hotel_id })
    }

    /// Resolves the rate pair for a hotel and room type.
    ///
    /// This is the lookup the pricing contract delegates to its caller: a
    /// missing pair surfaces as a distinct precondition failure rather than
    /// an error inside the calculator.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RateNotFound`] when no rate row exists for the
    /// combination.
    pub fn rate_pair(&self, hotel_id: u32, room_type_id: u32) -> EngineResult<RatePair> {
        self.rates
            .get(&(hotel_id, room_type_id))
            .copied()
            .ok_or(EngineError::RateNotFound {
                hotel_id,
                room_type_id,
            })
    }

    /// Returns the number of hotels in the book.
    pub fn hotel_count(&self) -> usize {
        self.hotels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn book_path() -> &'static str {
        "./config/tariffs"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_tariff_book() {
        let result = TariffBook::load(book_path());
        assert!(result.is_ok(), "Failed to load book: {:?}", result.err());

        let book = result.unwrap();
        assert!(book.hotel_count() >= 1);
    }

    #[test]
    fn test_hotel_lookup() {
        let book = TariffBook::load(book_path()).unwrap();

        let hotel = book.hotel(1).unwrap();
        assert_eq!(hotel.name, "Harbourview Hotel");
        assert_eq!(hotel.city, "Bristol");
    }

    #[test]
    fn test_unknown_hotel_returns_error() {
        let book = TariffBook::load(book_path()).unwrap();

        match book.hotel(999) {
            Err(EngineError::HotelNotFound { hotel_id }) => assert_eq!(hotel_id, 999),
            other => panic!("Expected HotelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_pair_lookup() {
        let book = TariffBook::load(book_path()).unwrap();

        let rates = book.rate_pair(1, 1).unwrap();
        assert_eq!(rates.peak_rate, dec("100.00"));
        assert_eq!(rates.off_peak_rate, dec("70.00"));
    }

    #[test]
    fn test_missing_rate_pair_returns_error() {
        let book = TariffBook::load(book_path()).unwrap();

        match book.rate_pair(1, 42) {
            Err(EngineError::RateNotFound {
                hotel_id,
                room_type_id,
            }) => {
                assert_eq!(hotel_id, 1);
                assert_eq!(room_type_id, 42);
            }
            other => panic!("Expected RateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = TariffBook::load("/nonexistent/path");

        match result {
            Err(EngineError::TariffNotFound { path }) => {
                assert!(path.contains("hotels.yaml"));
            }
            _ => panic!("Expected TariffNotFound error"),
        }
    }
}
