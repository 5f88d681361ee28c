//! Category HTTP handlers.
//!
//! ```text
//! GET  /api/v1/categories
//! POST /api/v1/categories
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Category, CategoryDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for creating a category.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequestBody {
    #[schema(example = "Pain Relief")]
    pub name: Option<String>,
    /// Lowercase and without whitespace; derived from the name when absent.
    #[schema(example = "pain-relief")]
    pub slug: Option<String>,
    /// `active` (default) or `inactive`.
    #[schema(example = "active")]
    pub status: Option<String>,
}

impl From<CreateCategoryRequestBody> for CategoryDraft {
    fn from(body: CreateCategoryRequestBody) -> Self {
        Self {
            name: body.name,
            slug: body.slug,
            status: body.status,
        }
    }
}

/// Category as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[schema(example = "active")]
    pub status: String,
}

impl From<Category> for CategoryBody {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            slug: value.slug,
            status: value.status.as_str().to_owned(),
        }
    }
}

/// List every category in creation order.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories", body = Vec<CategoryBody>),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CategoryBody>>> {
    let categories = state.categories_query.list_categories().await?;
    Ok(web::Json(
        categories.into_iter().map(CategoryBody::from).collect(),
    ))
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateCategoryRequestBody,
    responses(
        (status = 201, description = "Category created", body = CategoryBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
#[post("/categories")]
pub async fn create_category(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCategoryRequestBody>,
) -> ApiResult<HttpResponse> {
    let category = state
        .categories
        .create_category(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(CategoryBody::from(category)))
}
