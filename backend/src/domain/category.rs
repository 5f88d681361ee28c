//! Medicine categories.
//!
//! A category has a display name, a URL-safe slug and an activity status.
//! The slug is derived from the name unless the client supplies one, and new
//! categories start out active.

use std::fmt;
use std::str::FromStr;

use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, derive_slug};

/// Stable category identifier assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a category is offered for new medicines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl CategoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryStatus {
    type Err = CategoryValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CategoryValidationError::UnknownStatus(value.to_owned())),
        }
    }
}

/// A stored category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub status: CategoryStatus,
}

impl Category {
    /// Assign an identifier to a validated category.
    pub fn create(id: CategoryId, category: NewCategory) -> Self {
        Self {
            id,
            name: category.name,
            slug: category.slug,
            status: category.status,
        }
    }
}

/// Unvalidated category fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub status: Option<String>,
}

/// Category fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub status: CategoryStatus,
}

/// Reasons a category draft is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryValidationError {
    #[error("category name is required")]
    MissingName,
    #[error("category status must be active or inactive: {0}")]
    UnknownStatus(String),
}

impl CategoryValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::UnknownStatus(_) => "status",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_field",
            Self::UnknownStatus(_) => "unknown_status",
        }
    }
}

impl From<CategoryValidationError> for Error {
    fn from(value: CategoryValidationError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "fields": [{
                "field": value.field(),
                "code": value.code(),
                "message": value.to_string(),
            }],
        }))
    }
}

impl CategoryDraft {
    /// Validate the draft, deriving the slug and status when absent.
    ///
    /// # Examples
    /// ```
    /// use pharmacy_backend::domain::{CategoryDraft, CategoryStatus};
    ///
    /// let draft = CategoryDraft {
    ///     name: Some("Pain Relief".into()),
    ///     ..CategoryDraft::default()
    /// };
    /// let category = draft.validate().expect("valid draft");
    /// assert_eq!(category.slug, "pain-relief");
    /// assert_eq!(category.status, CategoryStatus::Active);
    /// ```
    pub fn validate(&self) -> Result<NewCategory, CategoryValidationError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(CategoryValidationError::MissingName)?;

        let slug = match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_owned(),
            _ => derive_slug(name),
        };

        let status = match self.status.as_deref().map(str::trim) {
            Some(status) if !status.is_empty() => status.parse()?,
            _ => CategoryStatus::default(),
        };

        Ok(NewCategory {
            name: name.to_owned(),
            slug,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn draft(name: Option<&str>, slug: Option<&str>, status: Option<&str>) -> CategoryDraft {
        CategoryDraft {
            name: name.map(str::to_owned),
            slug: slug.map(str::to_owned),
            status: status.map(str::to_owned),
        }
    }

    #[rstest]
    fn derives_slug_and_default_status() {
        let category = draft(Some("Pain Relief"), None, None)
            .validate()
            .expect("valid draft");
        assert_eq!(category.name, "Pain Relief");
        assert_eq!(category.slug, "pain-relief");
        assert_eq!(category.status, CategoryStatus::Active);
    }

    #[rstest]
    fn keeps_supplied_slug_and_status() {
        let category = draft(Some("Vitamins"), Some("vits"), Some("Inactive"))
            .validate()
            .expect("valid draft");
        assert_eq!(category.slug, "vits");
        assert_eq!(category.status, CategoryStatus::Inactive);
    }

    #[rstest]
    #[case("Eye-Care", "Eye-Care")]
    #[case("  eye care  ", "eye care")]
    fn supplied_slugs_are_kept_as_given(#[case] slug: &str, #[case] expected: &str) {
        let category = draft(Some("Eye Care"), Some(slug), None)
            .validate()
            .expect("valid draft");
        assert_eq!(category.slug, expected);
    }

    #[rstest]
    #[case(draft(Some("Eye Care"), Some("  "), Some("")))]
    #[case(draft(Some("Eye Care"), None, None))]
    fn blank_optional_fields_fall_back(#[case] input: CategoryDraft) {
        let category = input.validate().expect("valid draft");
        assert_eq!(category.slug, "eye-care");
        assert_eq!(category.status, CategoryStatus::Active);
    }

    #[rstest]
    #[case(draft(None, None, None), CategoryValidationError::MissingName)]
    #[case(draft(Some("   "), None, None), CategoryValidationError::MissingName)]
    #[case(
        draft(Some("Eye Care"), None, Some("archived")),
        CategoryValidationError::UnknownStatus("archived".to_owned())
    )]
    fn rejects_invalid_drafts(
        #[case] input: CategoryDraft,
        #[case] expected: CategoryValidationError,
    ) {
        assert_eq!(input.validate(), Err(expected));
    }

    #[rstest]
    fn validation_errors_convert_to_invalid_request() {
        let error: Error = CategoryValidationError::MissingName.into();
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        let details = error.details().expect("field details");
        assert_eq!(details["fields"][0]["field"], "name");
        assert_eq!(details["fields"][0]["code"], "missing_field");
    }
}
