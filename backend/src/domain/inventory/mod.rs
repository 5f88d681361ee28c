//! Inventory aggregation, filtering and view derivation.
//!
//! Everything here is pure: callers pass a record snapshot and the current
//! day, and receive derived values back.

mod filter;
mod stats;
mod view;

pub use filter::{CategoryFilter, InventoryFilter, StatusFilter, filter_records};
pub use stats::{InventoryStats, aggregate};
pub use view::{InventoryRow, InventoryView, InventoryViewRequest, InventoryViewState, build_view};
