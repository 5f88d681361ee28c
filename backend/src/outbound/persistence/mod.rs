//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories only translate between Diesel rows and domain types. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module. Connections come from a `bb8` pool driven by `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use pharmacy_backend::outbound::persistence::{DbPool, DieselMedicineRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/pharmacy")).await?;
//! let repo = DieselMedicineRepository::new(pool);
//! ```

mod diesel_category_repository;
mod diesel_error_mapping;
mod diesel_medicine_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_medicine_repository::DieselMedicineRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
