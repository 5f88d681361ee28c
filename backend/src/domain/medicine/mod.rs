//! Medicine inventory records and their derived stock status.
//!
//! A [`MedicineRecord`] is one stocked product. Its [`MedicineStatus`] is
//! never stored; it is recomputed from quantity, expiry date and the current
//! day every time the record is read.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

mod draft;
mod status;

pub use draft::{
    MedicineDraft, MedicineField, MedicineFieldError, MedicineFieldErrorKind,
    MedicineValidationErrors, NewMedicine,
};
pub use status::{LOW_STOCK_THRESHOLD, MedicineStatus, ParseMedicineStatusError, classify};

/// Label shown in place of an absent category or manufacturer.
pub const UNSPECIFIED_LABEL: &str = "unspecified";

/// Stable medicine identifier assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MedicineId(Uuid);

impl MedicineId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MedicineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stocked medicine.
///
/// ## Invariants
/// - `name` and `barcode` are non-empty.
/// - `barcode` is unique across the store.
/// - `price` is non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineRecord {
    pub id: MedicineId,
    pub name: String,
    pub barcode: String,
    pub price: Decimal,
    pub quantity: u32,
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub expiry_date: NaiveDate,
    pub prescription_required: bool,
}

impl MedicineRecord {
    /// Assign an identifier to a validated medicine.
    pub fn create(id: MedicineId, medicine: NewMedicine) -> Self {
        let NewMedicine {
            name,
            barcode,
            price,
            quantity,
            category,
            manufacturer,
            expiry_date,
            prescription_required,
        } = medicine;
        Self {
            id,
            name,
            barcode,
            price,
            quantity,
            category: Some(category),
            manufacturer: Some(manufacturer),
            expiry_date,
            prescription_required,
        }
    }

    /// Stock status of this record on `today`.
    pub fn status(&self, today: NaiveDate) -> MedicineStatus {
        classify(self.quantity, self.expiry_date, today)
    }

    /// Category for display, or [`UNSPECIFIED_LABEL`] when absent.
    pub fn category_label(&self) -> &str {
        label_or_unspecified(self.category.as_deref())
    }

    /// Manufacturer for display, or [`UNSPECIFIED_LABEL`] when absent.
    pub fn manufacturer_label(&self) -> &str {
        label_or_unspecified(self.manufacturer.as_deref())
    }
}

fn label_or_unspecified(value: Option<&str>) -> &str {
    match value {
        Some(label) if !label.trim().is_empty() => label,
        _ => UNSPECIFIED_LABEL,
    }
}
