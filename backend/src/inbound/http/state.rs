//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CategoryCommand, CategoryQuery, InventoryQuery, MedicineCommand};

/// Parameter object bundling the port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub medicines: Arc<dyn MedicineCommand>,
    pub inventory: Arc<dyn InventoryQuery>,
    pub categories: Arc<dyn CategoryCommand>,
    pub categories_query: Arc<dyn CategoryQuery>,
}

/// Page-size limits applied to paginated endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeLimits {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PageSizeLimits {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub medicines: Arc<dyn MedicineCommand>,
    pub inventory: Arc<dyn InventoryQuery>,
    pub categories: Arc<dyn CategoryCommand>,
    pub categories_query: Arc<dyn CategoryQuery>,
    pub page_limits: PageSizeLimits,
}

impl HttpState {
    /// Construct state from a ports bundle with default page limits.
    pub fn new(ports: HttpStatePorts) -> Self {
        Self::with_page_limits(ports, PageSizeLimits::default())
    }

    /// Construct state from a ports bundle and explicit page limits.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use pharmacy_backend::domain::{CategoryService, InventoryService};
    /// use pharmacy_backend::inbound::http::state::{HttpState, HttpStatePorts, PageSizeLimits};
    /// use pharmacy_backend::outbound::memory::{
    ///     InMemoryCategoryRepository, InMemoryMedicineRepository,
    /// };
    ///
    /// let inventory = Arc::new(InventoryService::new(
    ///     Arc::new(InMemoryMedicineRepository::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let categories = Arc::new(CategoryService::new(Arc::new(
    ///     InMemoryCategoryRepository::new(),
    /// )));
    /// let state = HttpState::with_page_limits(
    ///     HttpStatePorts {
    ///         medicines: inventory.clone(),
    ///         inventory,
    ///         categories: categories.clone(),
    ///         categories_query: categories,
    ///     },
    ///     PageSizeLimits {
    ///         default_page_size: 20,
    ///         max_page_size: 50,
    ///     },
    /// );
    /// assert_eq!(state.page_limits.default_page_size, 20);
    /// ```
    pub fn with_page_limits(ports: HttpStatePorts, page_limits: PageSizeLimits) -> Self {
        let HttpStatePorts {
            medicines,
            inventory,
            categories,
            categories_query,
        } = ports;
        Self {
            medicines,
            inventory,
            categories,
            categories_query,
            page_limits,
        }
    }
}
