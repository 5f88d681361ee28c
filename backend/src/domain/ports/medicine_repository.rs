//! Port for medicine persistence.
//!
//! The store only needs to append records and return the full collection;
//! every derived value is recomputed from that snapshot in the domain.

use async_trait::async_trait;

use crate::domain::MedicineRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by medicine repository adapters.
    pub enum MedicineRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "medicine repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "medicine repository query failed: {message}",
        /// Another medicine already uses this barcode.
        DuplicateBarcode { barcode: String } =>
            "a medicine with barcode {barcode} already exists",
    }
}

/// Port for storing and listing medicines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MedicineRepository: Send + Sync {
    /// Persist a new medicine.
    ///
    /// Fails with [`MedicineRepositoryError::DuplicateBarcode`] when the
    /// barcode is already taken; the store is left unchanged in that case.
    async fn insert(&self, record: &MedicineRecord) -> Result<(), MedicineRepositoryError>;

    /// Return every stored medicine in insertion order.
    async fn list_all(&self) -> Result<Vec<MedicineRecord>, MedicineRepositoryError>;
}
