//! Driving port for reading the inventory.
//!
//! Each call fetches a fresh snapshot from the store and derives statuses
//! and statistics for the current day.

use async_trait::async_trait;

use crate::domain::{Error, InventoryRow, InventoryStats, InventoryView, InventoryViewRequest};

/// Domain use-case port for inventory reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryQuery: Send + Sync {
    /// Every medicine with its current status.
    async fn list_medicines(&self) -> Result<Vec<InventoryRow>, Error>;

    /// Summary statistics over every medicine.
    async fn inventory_stats(&self) -> Result<InventoryStats, Error>;

    /// One filtered page of medicines together with the full statistics.
    async fn inventory_view(&self, request: InventoryViewRequest) -> Result<InventoryView, Error>;
}
