//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rust_decimal::Decimal;

use crate::domain::{CategoryService, InventoryService, MedicineId, MedicineRecord};
use crate::inbound::http::state::{HttpState, HttpStatePorts, PageSizeLimits};
use crate::outbound::memory::{InMemoryCategoryRepository, InMemoryMedicineRepository};

/// Clock frozen at a fixed instant.
pub struct FixtureClock {
    pub utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// The day every handler test runs on: 2026-03-01.
pub fn fixture_today() -> NaiveDate {
    date(2026, 3, 1)
}

pub fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A stored medicine priced at 5.00.
pub fn medicine(
    name: &str,
    barcode: &str,
    quantity: u32,
    expiry_date: NaiveDate,
    category: Option<&str>,
) -> MedicineRecord {
    MedicineRecord {
        id: MedicineId::random(),
        name: name.to_owned(),
        barcode: barcode.to_owned(),
        price: Decimal::new(500, 2),
        quantity,
        category: category.map(str::to_owned),
        manufacturer: Some("Acme Pharma".to_owned()),
        expiry_date,
        prescription_required: false,
    }
}

/// Handler state backed by the in-memory stores and the fixture clock.
pub fn in_memory_state(records: Vec<MedicineRecord>, page_limits: PageSizeLimits) -> HttpState {
    let inventory = Arc::new(InventoryService::new(
        Arc::new(InMemoryMedicineRepository::with_records(records)),
        fixture_clock(),
    ));
    let categories = Arc::new(CategoryService::new(Arc::new(
        InMemoryCategoryRepository::new(),
    )));
    HttpState::with_page_limits(
        HttpStatePorts {
            medicines: inventory.clone(),
            inventory,
            categories: categories.clone(),
            categories_query: categories,
        },
        page_limits,
    )
}
