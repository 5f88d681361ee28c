//! Compressed page-number window for pagination controls.

use serde::Serialize;

/// One slot in a rendered page-number window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageMarker {
    /// A selectable page number.
    Page {
        /// One-based page number.
        number: usize,
    },
    /// One or more skipped page numbers.
    Gap,
}

/// Build the page window around `current`.
///
/// The window names the first and last pages, the current page and its
/// immediate neighbours. Runs of omitted pages collapse into a single
/// [`PageMarker::Gap`].
///
/// ```
/// use pagination::{PageMarker, page_window};
///
/// let window = page_window(5, 9);
/// assert_eq!(
///     window,
///     vec![
///         PageMarker::Page { number: 1 },
///         PageMarker::Gap,
///         PageMarker::Page { number: 4 },
///         PageMarker::Page { number: 5 },
///         PageMarker::Page { number: 6 },
///         PageMarker::Gap,
///         PageMarker::Page { number: 9 },
///     ]
/// );
/// ```
#[must_use]
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageMarker> {
    let mut numbers: Vec<usize> = [
        1,
        current.saturating_sub(1),
        current,
        current.saturating_add(1),
        total_pages,
    ]
    .into_iter()
    .filter(|number| (1..=total_pages).contains(number))
    .collect();
    numbers.sort_unstable();
    numbers.dedup();

    let mut markers = Vec::with_capacity(numbers.len().saturating_mul(2));
    let mut previous: Option<usize> = None;
    for number in numbers {
        if previous.is_some_and(|last| number > last.saturating_add(1)) {
            markers.push(PageMarker::Gap);
        }
        markers.push(PageMarker::Page { number });
        previous = Some(number);
    }
    markers
}
