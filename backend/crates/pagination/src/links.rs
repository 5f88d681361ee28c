//! Navigation links derived from the request URL.

use serde::Serialize;
use url::Url;

const PAGE_PARAM: &str = "page";

/// Links to the pages surrounding the one being returned.
///
/// Every link is the request URL with only its `page` query parameter
/// rewritten, so filters and page size carry over unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    /// Link to the page being returned.
    #[serde(rename = "self")]
    pub self_: String,
    /// Link to the first page.
    pub first: String,
    /// Link to the previous page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Link to the next page, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Link to the last page.
    pub last: String,
}

impl PageLinks {
    /// Build links for `current` within a collection of `total_pages` pages.
    ///
    /// ```
    /// use pagination::PageLinks;
    /// use url::Url;
    ///
    /// let base = Url::parse("http://localhost/api/v1/inventory?q=para&page=1")
    ///     .expect("valid URL");
    /// let links = PageLinks::new(&base, 1, 3);
    /// assert_eq!(
    ///     links.next.as_deref(),
    ///     Some("http://localhost/api/v1/inventory?q=para&page=2")
    /// );
    /// assert!(links.prev.is_none());
    /// ```
    #[must_use]
    pub fn new(base: &Url, current: usize, total_pages: usize) -> Self {
        let last_page = total_pages.max(1);
        Self {
            self_: with_page(base, current),
            first: with_page(base, 1),
            prev: (current > 1).then(|| with_page(base, current.saturating_sub(1))),
            next: (current < total_pages).then(|| with_page(base, current.saturating_add(1))),
            last: with_page(base, last_page),
        }
    }
}

fn with_page(base: &Url, page: usize) -> String {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained.iter().map(|(key, value)| (key.as_str(), value.as_str())))
        .append_pair(PAGE_PARAM, &page.to_string());
    url.into()
}
