//! Page-number pagination primitives for list endpoints.
//!
//! The crate slices an already-filtered collection into fixed-size pages,
//! reports how many pages exist, and renders the compressed page-number
//! window and navigation links that clients show alongside a page.
//!
//! ```
//! use pagination::{PageRequest, paginate};
//!
//! let request = PageRequest::new(2, 5).expect("positive page and size");
//! let page = paginate((1..=6).collect::<Vec<u32>>(), request).expect("page in range");
//! assert_eq!(page.items(), &[6]);
//! assert_eq!(page.total_pages(), 2);
//! ```

mod links;
mod page;
mod request;
mod window;

pub use links::PageLinks;
pub use page::{Page, clamp_page, navigate, paginate, total_pages};
pub use request::{PageError, PageRequest};
pub use window::{PageMarker, page_window};
