//! Medicine HTTP handlers.
//!
//! ```text
//! POST /api/v1/medicines
//! GET  /api/v1/medicines
//! ```

use actix_web::{HttpResponse, get, post, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{InventoryRow, MedicineDraft, MedicineRecord, MedicineStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::NumberOrText;

const CREATED_MESSAGE: &str = "Medicine added successfully";

/// Request payload for adding a medicine.
///
/// Every field is optional at the wire level so that missing fields are
/// reported alongside the other validation failures.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicineRequestBody {
    #[schema(example = "Paracetamol 500mg")]
    pub name: Option<String>,
    #[schema(example = "6221000001")]
    pub barcode: Option<String>,
    /// Unit price as a number or numeric string.
    #[schema(value_type = Option<f64>, example = 12.5)]
    pub price: Option<NumberOrText>,
    /// Units in stock as a number or numeric string.
    #[schema(value_type = Option<u32>, example = 40)]
    pub quantity: Option<NumberOrText>,
    #[schema(example = "Analgesics")]
    pub category: Option<String>,
    #[schema(example = "Acme Pharma")]
    pub manufacturer: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[schema(format = "date", example = "2027-01-31")]
    pub expiry_date: Option<String>,
    pub prescription_required: Option<bool>,
}

impl From<CreateMedicineRequestBody> for MedicineDraft {
    fn from(body: CreateMedicineRequestBody) -> Self {
        Self {
            name: body.name,
            barcode: body.barcode,
            price: body.price.map(NumberOrText::into_text),
            quantity: body.quantity.map(NumberOrText::into_text),
            category: body.category,
            manufacturer: body.manufacturer,
            expiry_date: body.expiry_date,
            prescription_required: body.prescription_required,
        }
    }
}

/// Derived stock status of a medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MedicineStatusBody {
    Available,
    Low,
    OutOfStock,
    Expired,
}

impl From<MedicineStatus> for MedicineStatusBody {
    fn from(value: MedicineStatus) -> Self {
        match value {
            MedicineStatus::Available => Self::Available,
            MedicineStatus::Low => Self::Low,
            MedicineStatus::OutOfStock => Self::OutOfStock,
            MedicineStatus::Expired => Self::Expired,
        }
    }
}

/// Medicine as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicineBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub barcode: String,
    #[schema(value_type = f64, example = 12.5)]
    pub price: Decimal,
    pub quantity: u32,
    /// Category, or `unspecified` when none was recorded.
    pub category: String,
    /// Manufacturer, or `unspecified` when none was recorded.
    pub manufacturer: String,
    #[schema(format = "date")]
    pub expiry_date: String,
    pub prescription_required: bool,
    /// Status for the current day; omitted on creation responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicineStatusBody>,
}

impl From<&MedicineRecord> for MedicineBody {
    fn from(value: &MedicineRecord) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            barcode: value.barcode.clone(),
            price: value.price,
            quantity: value.quantity,
            category: value.category_label().to_owned(),
            manufacturer: value.manufacturer_label().to_owned(),
            expiry_date: value.expiry_date.format("%Y-%m-%d").to_string(),
            prescription_required: value.prescription_required,
            status: None,
        }
    }
}

impl From<InventoryRow> for MedicineBody {
    fn from(value: InventoryRow) -> Self {
        Self {
            status: Some(value.status.into()),
            ..Self::from(&value.medicine)
        }
    }
}

/// Response payload for medicine creation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicineResponseBody {
    #[schema(example = "Medicine added successfully")]
    pub message: String,
    pub medicine: MedicineBody,
}

/// Response payload listing every medicine.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListMedicinesResponseBody {
    pub medicines: Vec<MedicineBody>,
}

/// Add a medicine to the inventory.
#[utoipa::path(
    post,
    path = "/api/v1/medicines",
    request_body = CreateMedicineRequestBody,
    responses(
        (status = 201, description = "Medicine added", body = CreateMedicineResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Barcode already in use", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["medicines"],
    operation_id = "createMedicine"
)]
#[post("/medicines")]
pub async fn create_medicine(
    state: web::Data<HttpState>,
    payload: web::Json<CreateMedicineRequestBody>,
) -> ApiResult<HttpResponse> {
    let medicine = state
        .medicines
        .create_medicine(payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(CreateMedicineResponseBody {
        message: CREATED_MESSAGE.to_owned(),
        medicine: MedicineBody::from(&medicine),
    }))
}

/// List every medicine with its current status.
#[utoipa::path(
    get,
    path = "/api/v1/medicines",
    responses(
        (status = 200, description = "Medicines", body = ListMedicinesResponseBody),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["medicines"],
    operation_id = "listMedicines"
)]
#[get("/medicines")]
pub async fn list_medicines(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ListMedicinesResponseBody>> {
    let rows = state.inventory.list_medicines().await?;

    Ok(web::Json(ListMedicinesResponseBody {
        medicines: rows.into_iter().map(MedicineBody::from).collect(),
    }))
}

#[cfg(test)]
#[path = "medicines_tests.rs"]
mod tests;
