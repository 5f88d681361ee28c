//! Slicing collections into pages and moving between them.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::request::{PageError, PageRequest};

/// One page of a collection together with its position in the whole.
///
/// ## Invariants
/// - `items.len() <= page_size`.
/// - `current_page <= max(total_pages, 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    current_page: usize,
    page_size: usize,
    total_items: usize,
    total_pages: usize,
}

impl<T> Page<T> {
    /// Items on this page, in collection order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the page and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// One-based number of this page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Maximum number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items across every page.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Number of pages the collection spans; zero when it is empty.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Transform every item while keeping the page position.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Number of pages needed to show `total_items` items.
///
/// ```
/// use std::num::NonZeroUsize;
/// use pagination::total_pages;
///
/// let size = NonZeroUsize::new(5).expect("non-zero");
/// assert_eq!(total_pages(0, size), 0);
/// assert_eq!(total_pages(6, size), 2);
/// ```
#[must_use]
pub const fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Slice `items` into the page described by `request`.
///
/// Page 1 of an empty collection is an empty page.
///
/// # Errors
///
/// Returns [`PageError::OutOfRange`] when the requested page lies past the
/// last page.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Result<Page<T>, PageError> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, request.page_size_non_zero());
    if request.page() > total_pages.max(1) {
        return Err(PageError::OutOfRange {
            requested: request.page(),
            total_pages,
        });
    }

    let selected = items
        .into_iter()
        .skip(request.offset())
        .take(request.page_size())
        .collect();

    Ok(Page {
        items: selected,
        current_page: request.page(),
        page_size: request.page_size(),
        total_items,
        total_pages,
    })
}

/// Clamp a requested page into `1..=max(total_pages, 1)`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Resolve a navigation from `current` to `requested`.
///
/// Requests outside `1..=total_pages` leave the current page unchanged.
///
/// ```
/// use pagination::navigate;
///
/// assert_eq!(navigate(1, 2, 3), 2);
/// assert_eq!(navigate(1, 4, 3), 1);
/// assert_eq!(navigate(2, 0, 3), 2);
/// ```
#[must_use]
pub fn navigate(current: usize, requested: usize, total_pages: usize) -> usize {
    if (1..=total_pages).contains(&requested) {
        requested
    } else {
        current
    }
}
