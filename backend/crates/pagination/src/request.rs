//! Validated page requests and the errors raised while paginating.

use std::num::NonZeroUsize;

use thiserror::Error;

/// Errors raised when a page request cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    /// Page numbers are one-based.
    #[error("page numbers start at 1")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// The requested page lies past the last page of the collection.
    #[error("page {requested} is beyond the last page ({total_pages})")]
    OutOfRange {
        /// Page number the caller asked for.
        requested: usize,
        /// Number of pages the collection spans.
        total_pages: usize,
    },
}

/// A one-based page number paired with a positive page size.
///
/// ```
/// use pagination::{PageError, PageRequest};
///
/// assert!(PageRequest::new(1, 10).is_ok());
/// assert_eq!(PageRequest::new(0, 10), Err(PageError::ZeroPage));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: NonZeroUsize,
    page_size: NonZeroUsize,
}

impl PageRequest {
    /// Validate a page number and page size.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ZeroPage`] or [`PageError::ZeroPageSize`] when
    /// either value is zero.
    pub const fn new(page: usize, page_size: usize) -> Result<Self, PageError> {
        let Some(page) = NonZeroUsize::new(page) else {
            return Err(PageError::ZeroPage);
        };
        let Some(page_size) = NonZeroUsize::new(page_size) else {
            return Err(PageError::ZeroPageSize);
        };
        Ok(Self { page, page_size })
    }

    /// Request the first page with the given size.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::ZeroPageSize`] when `page_size` is zero.
    pub const fn first(page_size: usize) -> Result<Self, PageError> {
        Self::new(1, page_size)
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page.get()
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub(crate) const fn page_size_non_zero(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Number of items preceding the first item of this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page.get() - 1).saturating_mul(self.page_size.get())
    }
}
