//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::schema::{categories, medicines};

/// Row struct for reading from the medicines table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = medicines)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MedicineRow {
    pub id: Uuid,
    pub name: String,
    pub barcode: String,
    pub price: Decimal,
    pub quantity: i32,
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub expiry_date: NaiveDate,
    pub prescription_required: bool,
}

/// Insertable struct for creating medicine records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = medicines)]
pub(crate) struct NewMedicineRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub barcode: &'a str,
    pub price: Decimal,
    pub quantity: i32,
    pub category: Option<&'a str>,
    pub manufacturer: Option<&'a str>,
    pub expiry_date: NaiveDate,
    pub prescription_required: bool,
}

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub status: String,
}

/// Insertable struct for creating category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub slug: &'a str,
    pub status: &'a str,
}
