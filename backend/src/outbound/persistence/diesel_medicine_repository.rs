//! PostgreSQL-backed `MedicineRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MedicineRepository, MedicineRepositoryError};
use crate::domain::{MedicineId, MedicineRecord};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{MedicineRow, NewMedicineRow};
use super::pool::{DbPool, PoolError};
use super::schema::medicines;

const BARCODE_CONSTRAINT: &str = "medicines_barcode_key";

/// Diesel-backed implementation of the `MedicineRepository` port.
#[derive(Clone)]
pub struct DieselMedicineRepository {
    pool: DbPool,
}

impl DieselMedicineRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MedicineRepositoryError {
    MedicineRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error, barcode: &str) -> MedicineRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::UniqueViolation { constraint }
            if constraint.as_deref().is_none_or(|name| name == BARCODE_CONSTRAINT) =>
        {
            MedicineRepositoryError::duplicate_barcode(barcode)
        }
        DieselFailure::UniqueViolation { .. } => {
            MedicineRepositoryError::query("unique constraint violated")
        }
        DieselFailure::Connection(message) => MedicineRepositoryError::connection(message),
        DieselFailure::Query(message) => MedicineRepositoryError::query(message),
    }
}

fn map_read_error(error: diesel::result::Error) -> MedicineRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => MedicineRepositoryError::connection(message),
        DieselFailure::Query(message) => MedicineRepositoryError::query(message),
        DieselFailure::UniqueViolation { .. } => {
            MedicineRepositoryError::query("unexpected unique violation on read")
        }
    }
}

fn row_to_record(row: MedicineRow) -> Result<MedicineRecord, MedicineRepositoryError> {
    let quantity = u32::try_from(row.quantity).map_err(|_| {
        MedicineRepositoryError::query(format!(
            "medicine {} has negative quantity {}",
            row.id, row.quantity
        ))
    })?;
    Ok(MedicineRecord {
        id: MedicineId::from_uuid(row.id),
        name: row.name,
        barcode: row.barcode,
        price: row.price,
        quantity,
        category: row.category,
        manufacturer: row.manufacturer,
        expiry_date: row.expiry_date,
        prescription_required: row.prescription_required,
    })
}

#[async_trait]
impl MedicineRepository for DieselMedicineRepository {
    async fn insert(&self, record: &MedicineRecord) -> Result<(), MedicineRepositoryError> {
        let quantity = i32::try_from(record.quantity).map_err(|_| {
            MedicineRepositoryError::query(format!(
                "quantity {} exceeds the storable range",
                record.quantity
            ))
        })?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewMedicineRow {
            id: *record.id.as_uuid(),
            name: &record.name,
            barcode: &record.barcode,
            price: record.price,
            quantity,
            category: record.category.as_deref(),
            manufacturer: record.manufacturer.as_deref(),
            expiry_date: record.expiry_date,
            prescription_required: record.prescription_required,
        };

        diesel::insert_into(medicines::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, &record.barcode))
    }

    async fn list_all(&self) -> Result<Vec<MedicineRecord>, MedicineRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MedicineRow> = medicines::table
            .order((medicines::created_at.asc(), medicines::id.asc()))
            .select(MedicineRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows.into_iter().map(row_to_record).collect()
    }
}
