//! Category domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    CategoryCommand, CategoryQuery, CategoryRepository, CategoryRepositoryError,
};
use crate::domain::{Category, CategoryDraft, CategoryId, Error};

fn map_repository_error(error: CategoryRepositoryError) -> Error {
    match error {
        CategoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("category repository unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            Error::internal(format!("category repository error: {message}"))
        }
    }
}

/// Category service implementing the category driving ports.
#[derive(Clone)]
pub struct CategoryService<R> {
    category_repo: Arc<R>,
}

impl<R> CategoryService<R> {
    /// Create a new service over the category repository.
    pub fn new(category_repo: Arc<R>) -> Self {
        Self { category_repo }
    }
}

#[async_trait]
impl<R> CategoryCommand for CategoryService<R>
where
    R: CategoryRepository,
{
    async fn create_category(&self, draft: CategoryDraft) -> Result<Category, Error> {
        let category = Category::create(CategoryId::random(), draft.validate()?);

        self.category_repo
            .insert(&category)
            .await
            .map_err(map_repository_error)?;

        info!(id = %category.id, slug = %category.slug, "category created");
        Ok(category)
    }
}

#[async_trait]
impl<R> CategoryQuery for CategoryService<R>
where
    R: CategoryRepository,
{
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.category_repo
            .list_all()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockCategoryRepository;
    use crate::domain::{CategoryStatus, ErrorCode};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn create_category_derives_slug_and_status() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_insert()
            .withf(|category: &Category| category.slug == "pain-relief")
            .times(1)
            .return_once(|_| Ok(()));

        let service = CategoryService::new(Arc::new(repo));
        let category = service
            .create_category(CategoryDraft {
                name: Some("Pain Relief".into()),
                ..CategoryDraft::default()
            })
            .await
            .expect("create succeeds");

        assert_eq!(category.name, "Pain Relief");
        assert_eq!(category.slug, "pain-relief");
        assert_eq!(category.status, CategoryStatus::Active);
    }

    #[rstest]
    #[tokio::test]
    async fn create_category_rejects_missing_name() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_insert().times(0);

        let err = CategoryService::new(Arc::new(repo))
            .create_category(CategoryDraft::default())
            .await
            .expect_err("name is required");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[case(CategoryRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(CategoryRepositoryError::query("bad column"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn list_categories_maps_repository_errors(
        #[case] failure: CategoryRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list_all()
            .times(1)
            .return_once(move || Err(failure));

        let err = CategoryService::new(Arc::new(repo))
            .list_categories()
            .await
            .expect_err("repository fails");
        assert_eq!(err.code(), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn list_categories_returns_stored_categories() {
        let stored = Category {
            id: CategoryId::random(),
            name: "Antibiotics".into(),
            slug: "antibiotics".into(),
            status: CategoryStatus::Inactive,
        };
        let expected = stored.clone();
        let mut repo = MockCategoryRepository::new();
        repo.expect_list_all()
            .times(1)
            .return_once(move || Ok(vec![stored]));

        let categories = CategoryService::new(Arc::new(repo))
            .list_categories()
            .await
            .expect("list succeeds");
        assert_eq!(categories, vec![expected]);
    }
}
