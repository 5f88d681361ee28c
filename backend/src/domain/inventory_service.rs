//! Inventory domain service.
//!
//! Implements the medicine command and inventory query driving ports on top
//! of a [`MedicineRepository`]. "Today" comes from the injected clock.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use pagination::PageError;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    InventoryQuery, MedicineCommand, MedicineRepository, MedicineRepositoryError,
};
use crate::domain::{
    Error, InventoryRow, InventoryStats, InventoryView, InventoryViewRequest, MedicineDraft,
    MedicineId, MedicineRecord, aggregate, build_view,
};

fn map_repository_error(error: MedicineRepositoryError) -> Error {
    match error {
        MedicineRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("medicine repository unavailable: {message}"))
        }
        MedicineRepositoryError::Query { message } => {
            Error::internal(format!("medicine repository error: {message}"))
        }
        MedicineRepositoryError::DuplicateBarcode { barcode } => {
            Error::conflict(format!("a medicine with barcode {barcode} already exists"))
                .with_details(json!({ "field": "barcode", "code": "duplicate_barcode" }))
        }
    }
}

fn map_page_error(error: PageError) -> Error {
    let message = error.to_string();
    match error {
        PageError::OutOfRange {
            requested,
            total_pages,
        } => Error::invalid_request(message).with_details(json!({
            "code": "page_out_of_range",
            "page": requested,
            "totalPages": total_pages,
        })),
        PageError::ZeroPage | PageError::ZeroPageSize => Error::invalid_request(message),
    }
}

/// Medicine inventory service implementing the inventory driving ports.
#[derive(Clone)]
pub struct InventoryService<R> {
    medicine_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> InventoryService<R> {
    /// Create a new service over the medicine repository.
    pub fn new(medicine_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            medicine_repo,
            clock,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

impl<R> InventoryService<R>
where
    R: MedicineRepository,
{
    async fn snapshot(&self) -> Result<Vec<MedicineRecord>, Error> {
        self.medicine_repo
            .list_all()
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> MedicineCommand for InventoryService<R>
where
    R: MedicineRepository,
{
    async fn create_medicine(&self, draft: MedicineDraft) -> Result<MedicineRecord, Error> {
        let medicine = draft.validate()?;
        let record = MedicineRecord::create(MedicineId::random(), medicine);

        self.medicine_repo
            .insert(&record)
            .await
            .map_err(map_repository_error)?;

        info!(id = %record.id, barcode = %record.barcode, "medicine created");
        Ok(record)
    }
}

#[async_trait]
impl<R> InventoryQuery for InventoryService<R>
where
    R: MedicineRepository,
{
    async fn list_medicines(&self) -> Result<Vec<InventoryRow>, Error> {
        let today = self.today();
        let rows = self
            .snapshot()
            .await?
            .into_iter()
            .map(|medicine| InventoryRow {
                status: medicine.status(today),
                medicine,
            })
            .collect();
        Ok(rows)
    }

    async fn inventory_stats(&self) -> Result<InventoryStats, Error> {
        let records = self.snapshot().await?;
        Ok(aggregate(&records, self.today()))
    }

    async fn inventory_view(&self, request: InventoryViewRequest) -> Result<InventoryView, Error> {
        let records = self.snapshot().await?;
        let view = build_view(&records, &request, self.today()).map_err(map_page_error)?;
        debug!(
            page = view.rows.current_page(),
            matched = view.rows.total_items(),
            total = view.stats.total,
            "inventory view derived"
        );
        Ok(view)
    }
}

#[cfg(test)]
#[path = "inventory_service_tests.rs"]
mod tests;
