//! Driving port for creating categories.

use async_trait::async_trait;

use crate::domain::{Category, CategoryDraft, Error};

/// Domain use-case port for category creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryCommand: Send + Sync {
    /// Validate `draft` and store the resulting category.
    async fn create_category(&self, draft: CategoryDraft) -> Result<Category, Error>;
}
