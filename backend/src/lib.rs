//! Pharmacy inventory backend library.
//!
//! The domain derives stock status, statistics, filtered views and pages
//! from medicine records; inbound HTTP handlers and outbound stores sit at
//! the edges behind the domain ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
