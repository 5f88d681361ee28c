//! Validation of incoming medicine payloads.
//!
//! Every field is checked and all failures are reported together, so callers
//! can surface the complete list in one response.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::Error;

const MIN_NAME_CHARS: usize = 2;
const MIN_MANUFACTURER_CHARS: usize = 2;

/// Unvalidated medicine fields as received from a client.
///
/// Numeric fields are carried as text so that both JSON numbers and numeric
/// strings reach the same parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineDraft {
    pub name: Option<String>,
    pub barcode: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub expiry_date: Option<String>,
    pub prescription_required: Option<bool>,
}

/// Medicine fields that passed validation and are ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMedicine {
    pub name: String,
    pub barcode: String,
    pub price: Decimal,
    pub quantity: u32,
    pub category: String,
    pub manufacturer: String,
    pub expiry_date: NaiveDate,
    pub prescription_required: bool,
}

/// Medicine payload fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MedicineField {
    Name,
    Barcode,
    Price,
    Quantity,
    Category,
    Manufacturer,
    ExpiryDate,
}

impl MedicineField {
    /// Field name as it appears in JSON payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Barcode => "barcode",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::Category => "category",
            Self::Manufacturer => "manufacturer",
            Self::ExpiryDate => "expiryDate",
        }
    }
}

impl fmt::Display for MedicineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MedicineFieldErrorKind {
    MissingField,
    TooShort { min: usize },
    InvalidNumber,
    NotAnInteger,
    BelowMinimum { min: Decimal },
    TooLarge,
    InvalidDate,
}

impl MedicineFieldErrorKind {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::TooShort { .. } => "too_short",
            Self::InvalidNumber => "invalid_number",
            Self::NotAnInteger => "not_an_integer",
            Self::BelowMinimum { .. } => "below_minimum",
            Self::TooLarge => "too_large",
            Self::InvalidDate => "invalid_date",
        }
    }
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineFieldError {
    pub field: MedicineField,
    pub kind: MedicineFieldErrorKind,
}

impl MedicineFieldError {
    fn new(field: MedicineField, kind: MedicineFieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> String {
        let field = self.field;
        match &self.kind {
            MedicineFieldErrorKind::MissingField => format!("{field} is required"),
            MedicineFieldErrorKind::TooShort { min } => {
                format!("{field} must be at least {min} characters")
            }
            MedicineFieldErrorKind::InvalidNumber => format!("{field} must be a number"),
            MedicineFieldErrorKind::NotAnInteger => format!("{field} must be a whole number"),
            MedicineFieldErrorKind::BelowMinimum { min } => {
                format!("{field} must be at least {min}")
            }
            MedicineFieldErrorKind::TooLarge => format!("{field} is too large"),
            MedicineFieldErrorKind::InvalidDate => {
                format!("{field} must be a date (YYYY-MM-DD) or an RFC 3339 timestamp")
            }
        }
    }
}

/// All field failures for one payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("medicine payload failed validation on {} field(s)", .0.len())]
pub struct MedicineValidationErrors(Vec<MedicineFieldError>);

impl MedicineValidationErrors {
    /// The individual failures in field order.
    pub fn errors(&self) -> &[MedicineFieldError] {
        &self.0
    }

    /// Return `true` when `field` is among the failures.
    pub fn contains(&self, field: MedicineField) -> bool {
        self.0.iter().any(|error| error.field == field)
    }
}

impl From<MedicineValidationErrors> for Error {
    fn from(value: MedicineValidationErrors) -> Self {
        let fields: Vec<_> = value
            .errors()
            .iter()
            .map(|error| {
                json!({
                    "field": error.field.as_str(),
                    "code": error.kind.code(),
                    "message": error.message(),
                })
            })
            .collect();
        Error::invalid_request("medicine validation failed").with_details(json!({ "fields": fields }))
    }
}

impl MedicineDraft {
    /// Validate every field and build a [`NewMedicine`].
    ///
    /// # Examples
    /// ```
    /// use pharmacy_backend::domain::{MedicineDraft, MedicineField};
    ///
    /// let draft = MedicineDraft {
    ///     name: Some("P".into()),
    ///     ..MedicineDraft::default()
    /// };
    /// let errors = draft.validate().expect_err("draft is incomplete");
    /// assert!(errors.contains(MedicineField::Name));
    /// assert!(errors.contains(MedicineField::ExpiryDate));
    /// ```
    pub fn validate(&self) -> Result<NewMedicine, MedicineValidationErrors> {
        let mut errors = Vec::new();

        let name = collect(
            &mut errors,
            MedicineField::Name,
            text_with_min(self.name.as_deref(), MIN_NAME_CHARS),
        );
        let barcode = collect(
            &mut errors,
            MedicineField::Barcode,
            text_with_min(self.barcode.as_deref(), 1),
        );
        let price = collect(&mut errors, MedicineField::Price, price(self.price.as_deref()));
        let quantity = collect(
            &mut errors,
            MedicineField::Quantity,
            quantity(self.quantity.as_deref()),
        );
        let category = collect(
            &mut errors,
            MedicineField::Category,
            text_with_min(self.category.as_deref(), 1),
        );
        let manufacturer = collect(
            &mut errors,
            MedicineField::Manufacturer,
            text_with_min(self.manufacturer.as_deref(), MIN_MANUFACTURER_CHARS),
        );
        let expiry_date = collect(
            &mut errors,
            MedicineField::ExpiryDate,
            expiry_date(self.expiry_date.as_deref()),
        );

        match (name, barcode, price, quantity, category, manufacturer, expiry_date) {
            (
                Some(name),
                Some(barcode),
                Some(price),
                Some(quantity),
                Some(category),
                Some(manufacturer),
                Some(expiry_date),
            ) => Ok(NewMedicine {
                name,
                barcode,
                price,
                quantity,
                category,
                manufacturer,
                expiry_date,
                prescription_required: self.prescription_required.unwrap_or(false),
            }),
            _ => Err(MedicineValidationErrors(errors)),
        }
    }
}

fn collect<T>(
    errors: &mut Vec<MedicineFieldError>,
    field: MedicineField,
    result: Result<T, MedicineFieldErrorKind>,
) -> Option<T> {
    result
        .map_err(|kind| errors.push(MedicineFieldError::new(field, kind)))
        .ok()
}

fn present(value: Option<&str>) -> Result<&str, MedicineFieldErrorKind> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(MedicineFieldErrorKind::MissingField),
    }
}

/// Surrounding whitespace is ignored by the checks but kept in the result.
fn text_with_min(value: Option<&str>, min: usize) -> Result<String, MedicineFieldErrorKind> {
    let trimmed = present(value)?;
    if trimmed.chars().count() < min {
        return Err(MedicineFieldErrorKind::TooShort { min });
    }
    Ok(value.unwrap_or(trimmed).to_owned())
}

fn number(value: Option<&str>) -> Result<Decimal, MedicineFieldErrorKind> {
    let raw = present(value)?;
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| MedicineFieldErrorKind::InvalidNumber)
}

fn price(value: Option<&str>) -> Result<Decimal, MedicineFieldErrorKind> {
    let min = Decimal::new(1, 2);
    let price = number(value)?;
    if price < min {
        return Err(MedicineFieldErrorKind::BelowMinimum { min });
    }
    Ok(price)
}

fn quantity(value: Option<&str>) -> Result<u32, MedicineFieldErrorKind> {
    let quantity = number(value)?;
    if !quantity.fract().is_zero() {
        return Err(MedicineFieldErrorKind::NotAnInteger);
    }
    if quantity < Decimal::ONE {
        return Err(MedicineFieldErrorKind::BelowMinimum { min: Decimal::ONE });
    }
    u32::try_from(quantity).map_err(|_| MedicineFieldErrorKind::TooLarge)
}

fn expiry_date(value: Option<&str>) -> Result<NaiveDate, MedicineFieldErrorKind> {
    let raw = present(value)?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| {
            DateTime::parse_from_rfc3339(raw).map(|stamp| stamp.with_timezone(&Utc).date_naive())
        })
        .map_err(|_| MedicineFieldErrorKind::InvalidDate)
}
