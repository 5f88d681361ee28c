//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers for domain types ([`ErrorSchema`],
//! [`ErrorCodeSchema`]), so domain types never depend on utoipa.
//!
//! The generated document is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::categories::{CategoryBody, CreateCategoryRequestBody};
use crate::inbound::http::inventory::{
    InventoryResponseBody, InventoryStatsBody, PageLinksBody, PageMarkerBody, PaginationBody,
};
use crate::inbound::http::medicines::{
    CreateMedicineRequestBody, CreateMedicineResponseBody, ListMedicinesResponseBody,
    MedicineBody, MedicineStatusBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pharmacy inventory API",
        description = "Medicine inventory with derived stock status, statistics and categories.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::medicines::create_medicine,
        crate::inbound::http::medicines::list_medicines,
        crate::inbound::http::inventory::inventory_view,
        crate::inbound::http::inventory::inventory_stats,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CreateMedicineRequestBody,
        CreateMedicineResponseBody,
        ListMedicinesResponseBody,
        MedicineBody,
        MedicineStatusBody,
        InventoryResponseBody,
        InventoryStatsBody,
        PaginationBody,
        PageMarkerBody,
        PageLinksBody,
        CategoryBody,
        CreateCategoryRequestBody,
    )),
    tags(
        (name = "medicines", description = "Adding and listing medicines"),
        (name = "inventory", description = "Filtered inventory views and statistics"),
        (name = "categories", description = "Medicine categories"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
