//! Builders for HTTP state ports backed by PostgreSQL or process memory.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use pharmacy_backend::domain::ports::{
    CategoryCommand, CategoryQuery, CategoryRepository, InventoryQuery, MedicineCommand,
    MedicineRepository,
};
use pharmacy_backend::domain::{CategoryService, InventoryService};
use pharmacy_backend::inbound::http::state::{HttpState, HttpStatePorts};
use pharmacy_backend::outbound::memory::{InMemoryCategoryRepository, InMemoryMedicineRepository};
use pharmacy_backend::outbound::persistence::{DieselCategoryRepository, DieselMedicineRepository};

use super::ServerConfig;

type InventoryPorts = (Arc<dyn MedicineCommand>, Arc<dyn InventoryQuery>);
type CategoryPorts = (Arc<dyn CategoryCommand>, Arc<dyn CategoryQuery>);

/// Wrap one inventory service in both of the ports it implements.
fn inventory_ports<R>(repo: R, clock: Arc<dyn Clock>) -> InventoryPorts
where
    R: MedicineRepository + 'static,
{
    let service = Arc::new(InventoryService::new(Arc::new(repo), clock));
    (service.clone(), service)
}

/// Wrap one category service in both of the ports it implements.
fn category_ports<R>(repo: R) -> CategoryPorts
where
    R: CategoryRepository + 'static,
{
    let service = Arc::new(CategoryService::new(Arc::new(repo)));
    (service.clone(), service)
}

/// Build the shared HTTP state, using the database when one is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let ((medicines, inventory), (categories, categories_query)) = match &config.db_pool {
        Some(pool) => (
            inventory_ports(DieselMedicineRepository::new(pool.clone()), clock),
            category_ports(DieselCategoryRepository::new(pool.clone())),
        ),
        None => {
            info!("no database configured; records are kept in memory");
            (
                inventory_ports(InMemoryMedicineRepository::new(), clock),
                category_ports(InMemoryCategoryRepository::new()),
            )
        }
    };

    web::Data::new(HttpState::with_page_limits(
        HttpStatePorts {
            medicines,
            inventory,
            categories,
            categories_query,
        },
        config.page_limits,
    ))
}
