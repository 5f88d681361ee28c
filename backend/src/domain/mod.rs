//! Domain primitives, pure inventory logic and services.
//!
//! Purpose: define the medicine and category entities, derive stock status
//! and inventory statistics, and expose the use cases behind driving ports.
//! Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - MedicineRecord, MedicineStatus and `classify`: stock classification.
//! - InventoryStats, InventoryFilter, InventoryView: aggregation, filtering
//!   and paginated views.
//! - Category and CategoryDraft: categories with derived slugs.
//! - InventoryService and CategoryService: driving port implementations.

pub mod category;
pub mod category_service;
pub mod error;
pub mod inventory;
pub mod inventory_service;
pub mod medicine;
pub mod ports;
pub mod slug;
pub mod trace_id;

pub use self::category::{
    Category, CategoryDraft, CategoryId, CategoryStatus, CategoryValidationError, NewCategory,
};
pub use self::category_service::CategoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::inventory::{
    CategoryFilter, InventoryFilter, InventoryRow, InventoryStats, InventoryView,
    InventoryViewRequest, InventoryViewState, StatusFilter, aggregate, build_view,
    filter_records,
};
pub use self::inventory_service::InventoryService;
pub use self::medicine::{
    LOW_STOCK_THRESHOLD, MedicineDraft, MedicineField, MedicineFieldError,
    MedicineFieldErrorKind, MedicineId, MedicineRecord, MedicineStatus,
    MedicineValidationErrors, NewMedicine, ParseMedicineStatusError, UNSPECIFIED_LABEL,
    classify,
};
pub use self::slug::derive_slug;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use pharmacy_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such medicine"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
