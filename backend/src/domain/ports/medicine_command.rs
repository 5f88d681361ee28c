//! Driving port for adding medicines to the inventory.

use async_trait::async_trait;

use crate::domain::{Error, MedicineDraft, MedicineRecord};

/// Domain use-case port for creating medicines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MedicineCommand: Send + Sync {
    /// Validate `draft`, assign an identifier and store the medicine.
    ///
    /// Validation failures are reported together as one
    /// `invalid_request` error; a taken barcode is a `conflict`.
    async fn create_medicine(&self, draft: MedicineDraft) -> Result<MedicineRecord, Error>;
}
