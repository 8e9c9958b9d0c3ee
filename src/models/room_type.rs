//! Room type enumeration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The type of room being priced.
///
/// Room types are exchanged with callers as numeric ids (the ids the booking
/// storage uses): 1 = Standard, 2 = Double, 3 = Suite. Any other id is kept
/// as [`RoomType::Other`] and priced with the standard multiplier, so pricing
/// stays a total function over ids the storage may grow in the future.
///
/// # Example
///
/// ```
/// use pricing_engine::models::RoomType;
///
/// assert_eq!(RoomType::from_id(2), RoomType::Double);
/// assert_eq!(RoomType::from_id(7), RoomType::Other(7));
/// assert_eq!(RoomType::Suite.id(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum RoomType {
    /// Standard room (id 1) - base rate, no adjustment.
    Standard,
    /// Double room (id 2) - 1.2x rate, occupancy surcharge for exactly 2 guests.
    Double,
    /// Suite (id 3) - 1.5x rate.
    Suite,
    /// Any id outside the known set - priced as a standard room.
    Other(u32),
}

impl RoomType {
    /// Resolves a numeric room type id to a `RoomType`.
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => RoomType::Standard,
            2 => RoomType::Double,
            3 => RoomType::Suite,
            other => RoomType::Other(other),
        }
    }

    /// Returns the numeric id for this room type.
    pub fn id(&self) -> u32 {
        match self {
            RoomType::Standard => 1,
            RoomType::Double => 2,
            RoomType::Suite => 3,
            RoomType::Other(id) => *id,
        }
    }

    /// Returns the rate multiplier for this room type.
    ///
    /// The multiplier applies to the daily rate before the nightly total is
    /// taken. The Double occupancy surcharge is separate (see
    /// [`crate::calculation::nightly_rate`]).
    pub fn multiplier(&self) -> Decimal {
        match self {
            RoomType::Standard | RoomType::Other(_) => Decimal::ONE,
            RoomType::Double => Decimal::new(12, 1),
            RoomType::Suite => Decimal::new(15, 1),
        }
    }
}

impl From<u32> for RoomType {
    fn from(id: u32) -> Self {
        RoomType::from_id(id)
    }
}

impl From<RoomType> for u32 {
    fn from(room_type: RoomType) -> Self {
        room_type.id()
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomType::Standard => write!(f, "Standard"),
            RoomType::Double => write!(f, "Double"),
            RoomType::Suite => write!(f, "Suite"),
            RoomType::Other(id) => write!(f, "Other({})", id),
        }
    }
}
