//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by persistence adapters.
//! Driving ports (`*Command`, `*Query`) are implemented by domain services
//! and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod category_command;
mod category_query;
mod category_repository;
mod inventory_query;
mod medicine_command;
mod medicine_repository;

pub use category_command::CategoryCommand;
#[cfg(test)]
pub use category_command::MockCategoryCommand;
pub use category_query::CategoryQuery;
#[cfg(test)]
pub use category_query::MockCategoryQuery;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
pub use inventory_query::InventoryQuery;
#[cfg(test)]
pub use inventory_query::MockInventoryQuery;
pub use medicine_command::MedicineCommand;
#[cfg(test)]
pub use medicine_command::MockMedicineCommand;
#[cfg(test)]
pub use medicine_repository::MockMedicineRepository;
pub use medicine_repository::{MedicineRepository, MedicineRepositoryError};
