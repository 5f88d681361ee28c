//! In-process repositories used when no database is configured.
//!
//! Records live in insertion order behind a tokio `RwLock`. The medicine
//! store checks barcode uniqueness while holding the write lock, so two
//! concurrent inserts with the same barcode cannot both succeed.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, MedicineRepository, MedicineRepositoryError,
};
use crate::domain::{Category, MedicineRecord};

/// Memory-backed `MedicineRepository`.
#[derive(Debug, Default)]
pub struct InMemoryMedicineRepository {
    records: RwLock<Vec<MedicineRecord>>,
}

impl InMemoryMedicineRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of records.
    pub fn with_records(records: Vec<MedicineRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl MedicineRepository for InMemoryMedicineRepository {
    async fn insert(&self, record: &MedicineRecord) -> Result<(), MedicineRepositoryError> {
        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.barcode == record.barcode) {
            return Err(MedicineRepositoryError::duplicate_barcode(
                record.barcode.as_str(),
            ));
        }
        records.push(record.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<MedicineRecord>, MedicineRepositoryError> {
        Ok(self.records.read().await.clone())
    }
}

/// Memory-backed `CategoryRepository`.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), CategoryRepositoryError> {
        self.categories.write().await.push(category.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(self.categories.read().await.clone())
    }
}
