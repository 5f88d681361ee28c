//! Inventory view state and the paginated view derived from it.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use pagination::{Page, PageError, PageMarker, PageRequest, navigate, page_window, paginate};

use super::{InventoryFilter, InventoryStats, aggregate, filter_records};
use crate::domain::{MedicineRecord, MedicineStatus};

/// Filters and page number of an inventory screen.
///
/// Every transition returns a new state. Changing or clearing the filters
/// moves back to the first page; page navigation outside the known range
/// leaves the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryViewState {
    filter: InventoryFilter,
    page: NonZeroUsize,
}

impl Default for InventoryViewState {
    fn default() -> Self {
        Self {
            filter: InventoryFilter::default(),
            page: NonZeroUsize::MIN,
        }
    }
}

impl InventoryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &InventoryFilter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    /// Apply a new filter and return to the first page.
    #[must_use]
    pub fn with_filter(self, filter: InventoryFilter) -> Self {
        Self {
            filter,
            page: NonZeroUsize::MIN,
        }
    }

    /// Drop every constraint at once and return to the first page.
    #[must_use]
    pub fn clear_filters(self) -> Self {
        Self::default()
    }

    /// Move to `requested` when it lies within `1..=total_pages`.
    #[must_use]
    pub fn go_to_page(self, requested: usize, total_pages: usize) -> Self {
        let page = NonZeroUsize::new(navigate(self.page.get(), requested, total_pages))
            .unwrap_or(self.page);
        Self { page, ..self }
    }

    /// Build the request for this state with the given page size.
    pub fn request(&self, page_size: usize) -> Result<InventoryViewRequest, PageError> {
        Ok(InventoryViewRequest {
            filter: self.filter.clone(),
            page: PageRequest::new(self.page.get(), page_size)?,
        })
    }
}

/// Filter plus page selection for one inventory view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryViewRequest {
    pub filter: InventoryFilter,
    pub page: PageRequest,
}

/// One displayed record with its status for the current day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub medicine: MedicineRecord,
    pub status: MedicineStatus,
}

/// Stats over the full collection plus one page of filtered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub stats: InventoryStats,
    pub rows: Page<InventoryRow>,
    pub window: Vec<PageMarker>,
}

/// Derive the inventory view for `request` from a full record snapshot.
///
/// Stats cover every record regardless of the filter. Only the requested
/// page of the filtered records is labelled with its status.
pub fn build_view(
    records: &[MedicineRecord],
    request: &InventoryViewRequest,
    today: NaiveDate,
) -> Result<InventoryView, PageError> {
    let stats = aggregate(records, today);
    let filtered = filter_records(records, &request.filter, today);
    let rows = paginate(filtered, request.page)?.map(|record| InventoryRow {
        medicine: record.clone(),
        status: record.status(today),
    });
    let window = page_window(rows.current_page(), rows.total_pages());
    Ok(InventoryView {
        stats,
        rows,
        window,
    })
}
