//! Season selection for a stay.
//!
//! A fixed set of calendar months is "peak"; the season for a stay is
//! determined solely by the check-in month. Check-out and the individual
//! nights of the stay play no part, so a stay that starts in August and runs
//! into September is priced entirely at the peak rate.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The calendar months (1-12) priced at the peak rate.
pub const PEAK_MONTHS: [u32; 7] = [4, 5, 6, 7, 8, 11, 12];

/// The pricing season a stay falls under.
///
/// # Example
///
/// ```
/// use pricing_engine::calculation::Season;
/// use chrono::NaiveDate;
///
/// let july = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
/// assert_eq!(Season::for_check_in(july), Season::Peak);
///
/// let october = NaiveDate::from_ymd_opt(2024, 10, 10).unwrap();
/// assert_eq!(Season::for_check_in(october), Season::OffPeak);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// April-August and November-December - peak rate applies.
    Peak,
    /// All other months - off-peak rate applies.
    OffPeak,
}

impl Season {
    /// Determines the season for a stay from its check-in date.
    pub fn for_check_in(check_in: NaiveDate) -> Self {
        if PEAK_MONTHS.contains(&check_in.month()) {
            Season::Peak
        } else {
            Season::OffPeak
        }
    }

    /// Returns `true` for [`Season::Peak`].
    pub fn is_peak(&self) -> bool {
        matches!(self, Season::Peak)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Peak => write!(f, "peak"),
            Season::OffPeak => write!(f, "off-peak"),
        }
    }
}
