//! PostgreSQL-backed `CategoryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryId, CategoryStatus};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{CategoryRow, NewCategoryRow};
use super::pool::{DbPool, PoolError};
use super::schema::categories;

/// Diesel-backed implementation of the `CategoryRepository` port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CategoryRepositoryError {
    CategoryRepositoryError::connection(pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> CategoryRepositoryError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => CategoryRepositoryError::connection(message),
        DieselFailure::Query(message) => CategoryRepositoryError::query(message),
        DieselFailure::UniqueViolation { .. } => {
            CategoryRepositoryError::query("unique constraint violated")
        }
    }
}

fn row_to_category(row: CategoryRow) -> Category {
    let status = row.status.parse().unwrap_or_else(|_| {
        warn!(
            value = %row.status,
            id = %row.id,
            "unrecognised category status, defaulting to active"
        );
        CategoryStatus::Active
    });
    Category {
        id: CategoryId::from_uuid(row.id),
        name: row.name,
        slug: row.slug,
        status,
    }
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn insert(&self, category: &Category) -> Result<(), CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCategoryRow {
            id: *category.id.as_uuid(),
            name: &category.name,
            slug: &category.slug,
            status: category.status.as_str(),
        };

        diesel::insert_into(categories::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CategoryRow> = categories::table
            .order((categories::created_at.asc(), categories::id.asc()))
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_category).collect())
    }
}
