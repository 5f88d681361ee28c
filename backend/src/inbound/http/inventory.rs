//! Inventory view HTTP handlers.
//!
//! ```text
//! GET /api/v1/inventory?q=&category=&status=&page=&pageSize=
//! GET /api/v1/inventory/stats
//! ```

use actix_web::{HttpRequest, get, web};
use pagination::{PageLinks, PageMarker, PageRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    CategoryFilter, Error, InventoryFilter, InventoryStats, InventoryView, InventoryViewRequest,
    StatusFilter,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::medicines::MedicineBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::{HttpState, PageSizeLimits};
use crate::inbound::http::validation::{
    FieldName, invalid_page_error, invalid_status_error, parse_positive,
};

/// Query parameters for the inventory view.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryQueryParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Summary statistics payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStatsBody {
    pub total: usize,
    pub available: usize,
    pub low: usize,
    pub out_of_stock: usize,
    pub expired: usize,
    /// Sum of unit prices, not weighted by quantity.
    #[schema(value_type = f64)]
    pub total_value: Decimal,
}

impl From<InventoryStats> for InventoryStatsBody {
    fn from(value: InventoryStats) -> Self {
        Self {
            total: value.total,
            available: value.available,
            low: value.low,
            out_of_stock: value.out_of_stock,
            expired: value.expired,
            total_value: value.total_value,
        }
    }
}

/// One slot of the page-number window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageMarkerBody {
    Page { number: usize },
    Gap,
}

impl From<PageMarker> for PageMarkerBody {
    fn from(value: PageMarker) -> Self {
        match value {
            PageMarker::Page { number } => Self::Page { number },
            PageMarker::Gap => Self::Gap,
        }
    }
}

/// Navigation links; only the `page` query parameter differs between them.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PageLinksBody {
    #[serde(rename = "self")]
    pub self_: String,
    pub first: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub last: String,
}

impl From<PageLinks> for PageLinksBody {
    fn from(value: PageLinks) -> Self {
        Self {
            self_: value.self_,
            first: value.first,
            prev: value.prev,
            next: value.next,
            last: value.last,
        }
    }
}

/// Position of the returned page within the filtered collection.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBody {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub window: Vec<PageMarkerBody>,
    pub links: PageLinksBody,
}

/// Response payload for the inventory view.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponseBody {
    /// Statistics over every medicine, ignoring the filters.
    pub stats: InventoryStatsBody,
    /// The requested page of filtered medicines.
    pub medicines: Vec<MedicineBody>,
    pub pagination: PaginationBody,
}

fn page_size(raw: Option<&str>, limits: PageSizeLimits) -> Result<usize, Error> {
    let requested = parse_positive(
        raw,
        FieldName::new("pageSize"),
        limits.default_page_size,
    )?;
    Ok(requested.min(limits.max_page_size))
}

fn parse_view_request(
    params: &InventoryQueryParams,
    limits: PageSizeLimits,
) -> Result<InventoryViewRequest, Error> {
    let status_field = FieldName::new("status");
    let status = StatusFilter::parse(params.status.as_deref()).map_err(|_| {
        invalid_status_error(status_field, params.status.as_deref().unwrap_or_default())
    })?;
    let filter = InventoryFilter::new()
        .with_text(params.q.as_deref().unwrap_or_default())
        .with_category(CategoryFilter::parse(params.category.as_deref()))
        .with_status(status);

    let page_field = FieldName::new("page");
    let page = parse_positive(params.page.as_deref(), page_field, 1)?;
    let page_request = PageRequest::new(page, page_size(params.page_size.as_deref(), limits)?)
        .map_err(|_| invalid_page_error(page_field, &page.to_string()))?;

    Ok(InventoryViewRequest {
        filter,
        page: page_request,
    })
}

fn view_body(view: InventoryView, links: PageLinks) -> InventoryResponseBody {
    let InventoryView {
        stats,
        rows,
        window,
    } = view;
    let pagination = PaginationBody {
        current_page: rows.current_page(),
        page_size: rows.page_size(),
        total_items: rows.total_items(),
        total_pages: rows.total_pages(),
        window: window.into_iter().map(PageMarkerBody::from).collect(),
        links: links.into(),
    };
    InventoryResponseBody {
        stats: stats.into(),
        medicines: rows.into_items().into_iter().map(MedicineBody::from).collect(),
        pagination,
    }
}

/// Filtered, paginated inventory view with full statistics.
#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive text matched against name and barcode"),
        ("category" = Option<String>, Query, description = "Exact category, or `all`"),
        ("status" = Option<String>, Query, description = "available, low, out_of_stock, expired or all"),
        ("page" = Option<u32>, Query, description = "One-based page number"),
        ("pageSize" = Option<u32>, Query, description = "Rows per page, capped by the server")
    ),
    responses(
        (status = 200, description = "Inventory view", body = InventoryResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["inventory"],
    operation_id = "getInventory"
)]
#[get("/inventory")]
pub async fn inventory_view(
    state: web::Data<HttpState>,
    request: HttpRequest,
    query: web::Query<InventoryQueryParams>,
) -> ApiResult<web::Json<InventoryResponseBody>> {
    let view_request = parse_view_request(&query, state.page_limits)?;
    let view = state.inventory.inventory_view(view_request).await?;
    let links = PageLinks::new(
        &request.full_url(),
        view.rows.current_page(),
        view.rows.total_pages(),
    );

    Ok(web::Json(view_body(view, links)))
}

/// Summary statistics over every medicine.
#[utoipa::path(
    get,
    path = "/api/v1/inventory/stats",
    responses(
        (status = 200, description = "Inventory statistics", body = InventoryStatsBody),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["inventory"],
    operation_id = "getInventoryStats"
)]
#[get("/inventory/stats")]
pub async fn inventory_stats(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<InventoryStatsBody>> {
    let stats = state.inventory.inventory_stats().await?;
    Ok(web::Json(stats.into()))
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
