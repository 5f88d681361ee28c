//! Stock status classification.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quantities at or below this value, but above zero, count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 15;

/// Derived stock status of a medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicineStatus {
    Available,
    Low,
    OutOfStock,
    Expired,
}

impl MedicineStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 4] = [Self::Available, Self::Low, Self::OutOfStock, Self::Expired];

    /// Wire representation used in query strings and payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Low => "low",
            Self::OutOfStock => "out_of_stock",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for MedicineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown medicine status: {0}")]
pub struct ParseMedicineStatusError(pub String);

impl FromStr for MedicineStatus {
    type Err = ParseMedicineStatusError;

    /// Accepts the wire names case-insensitively, with spaces or hyphens in
    /// place of underscores (`Out of Stock`, `out-of-stock`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised: String = value
            .trim()
            .chars()
            .map(|ch| match ch {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalised)
            .ok_or_else(|| ParseMedicineStatusError(value.to_owned()))
    }
}

/// Classify a medicine by quantity and expiry date.
///
/// The first matching rule wins:
/// 1. expiring on or before `today` is [`MedicineStatus::Expired`];
/// 2. a zero quantity is [`MedicineStatus::OutOfStock`];
/// 3. a quantity up to [`LOW_STOCK_THRESHOLD`] is [`MedicineStatus::Low`];
/// 4. anything else is [`MedicineStatus::Available`].
///
/// ```
/// use chrono::NaiveDate;
/// use pharmacy_backend::domain::{MedicineStatus, classify};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
/// let next_year = NaiveDate::from_ymd_opt(2027, 3, 1).expect("valid date");
/// assert_eq!(classify(16, next_year, today), MedicineStatus::Available);
/// assert_eq!(classify(15, next_year, today), MedicineStatus::Low);
/// assert_eq!(classify(0, today, today), MedicineStatus::Expired);
/// ```
pub fn classify(quantity: u32, expiry_date: NaiveDate, today: NaiveDate) -> MedicineStatus {
    if expiry_date <= today {
        MedicineStatus::Expired
    } else if quantity == 0 {
        MedicineStatus::OutOfStock
    } else if quantity <= LOW_STOCK_THRESHOLD {
        MedicineStatus::Low
    } else {
        MedicineStatus::Available
    }
}
