//! Port for category persistence.

use async_trait::async_trait;

use crate::domain::Category;

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "category repository query failed: {message}",
    }
}

/// Port for storing and listing categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a new category.
    async fn insert(&self, category: &Category) -> Result<(), CategoryRepositoryError>;

    /// Return every stored category in insertion order.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;
}
