//! Tests for the inventory service.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use pagination::PageRequest;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;

use super::*;
use crate::domain::ports::MockMedicineRepository;
use crate::domain::{ErrorCode, InventoryFilter, MedicineStatus, StatusFilter};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

#[fixture]
fn clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn stored(name: &str, quantity: u32, expiry: NaiveDate) -> MedicineRecord {
    MedicineRecord {
        id: MedicineId::random(),
        name: name.to_owned(),
        barcode: format!("{name}-barcode"),
        price: Decimal::new(500, 2),
        quantity,
        category: None,
        manufacturer: None,
        expiry_date: expiry,
        prescription_required: false,
    }
}

fn draft() -> MedicineDraft {
    MedicineDraft {
        name: Some("Paracetamol".into()),
        barcode: Some("6221000001".into()),
        price: Some("12.5".into()),
        quantity: Some("40".into()),
        category: Some("Analgesics".into()),
        manufacturer: Some("Pharco".into()),
        expiry_date: Some("2027-01-31".into()),
        prescription_required: Some(true),
    }
}

fn make_service(
    repo: MockMedicineRepository,
    clock: Arc<dyn Clock>,
) -> InventoryService<MockMedicineRepository> {
    InventoryService::new(Arc::new(repo), clock)
}

#[rstest]
#[tokio::test]
async fn create_medicine_persists_validated_record(clock: Arc<dyn Clock>) {
    let mut repo = MockMedicineRepository::new();
    repo.expect_insert()
        .withf(|record: &MedicineRecord| {
            record.barcode == "6221000001"
                && record.category.as_deref() == Some("Analgesics")
                && record.prescription_required
        })
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(repo, clock);
    let record = service
        .create_medicine(draft())
        .await
        .expect("create succeeds");

    assert_eq!(record.name, "Paracetamol");
    assert_eq!(record.quantity, 40);
}

#[rstest]
#[tokio::test]
async fn create_medicine_rejects_invalid_drafts_without_storing(clock: Arc<dyn Clock>) {
    let mut repo = MockMedicineRepository::new();
    repo.expect_insert().times(0);

    let service = make_service(repo, clock);
    let mut invalid = draft();
    invalid.quantity = Some("0".into());
    let err = service
        .create_medicine(invalid)
        .await
        .expect_err("validation fails");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("field details");
    assert_eq!(details["fields"][0]["field"], "quantity");
}

#[rstest]
#[case(
    MedicineRepositoryError::duplicate_barcode("6221000001"),
    ErrorCode::Conflict
)]
#[case(
    MedicineRepositoryError::connection("refused"),
    ErrorCode::ServiceUnavailable
)]
#[case(MedicineRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_medicine_maps_repository_errors(
    clock: Arc<dyn Clock>,
    #[case] failure: MedicineRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockMedicineRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = make_service(repo, clock);
    let err = service
        .create_medicine(draft())
        .await
        .expect_err("repository fails");
    assert_eq!(err.code(), expected);
}

#[rstest]
#[tokio::test]
async fn list_medicines_labels_each_record_for_today(clock: Arc<dyn Clock>) {
    let records = vec![
        stored("Zinc", 16, date(2027, 1, 1)),
        stored("Iron", 15, date(2027, 1, 1)),
        stored("Saline", 0, date(2027, 1, 1)),
        stored("Aspirin", 30, date(2026, 3, 1)),
    ];
    let mut repo = MockMedicineRepository::new();
    repo.expect_list_all()
        .times(1)
        .return_once(move || Ok(records));

    let service = make_service(repo, clock);
    let statuses: Vec<_> = service
        .list_medicines()
        .await
        .expect("list succeeds")
        .into_iter()
        .map(|row| row.status)
        .collect();

    assert_eq!(
        statuses,
        vec![
            MedicineStatus::Available,
            MedicineStatus::Low,
            MedicineStatus::OutOfStock,
            MedicineStatus::Expired,
        ]
    );
}

#[rstest]
#[tokio::test]
async fn inventory_stats_aggregates_the_snapshot(clock: Arc<dyn Clock>) {
    let records = vec![
        stored("Zinc", 16, date(2027, 1, 1)),
        stored("Saline", 0, date(2025, 1, 1)),
    ];
    let mut repo = MockMedicineRepository::new();
    repo.expect_list_all()
        .times(1)
        .return_once(move || Ok(records));

    let stats = make_service(repo, clock)
        .inventory_stats()
        .await
        .expect("stats succeed");

    assert_eq!(stats.total, 2);
    assert_eq!(stats.available, 1);
    assert_eq!(stats.out_of_stock, 1);
    assert_eq!(stats.expired, 1);
    assert_eq!(stats.total_value, Decimal::new(1000, 2));
}

#[rstest]
#[tokio::test]
async fn inventory_view_filters_and_paginates(clock: Arc<dyn Clock>) {
    let records: Vec<_> = (0..7)
        .map(|index| stored(&format!("Vitamin {index}"), 5, date(2027, 1, 1)))
        .chain([stored("Aspirin", 30, date(2027, 1, 1))])
        .collect();
    let mut repo = MockMedicineRepository::new();
    repo.expect_list_all()
        .times(1)
        .return_once(move || Ok(records));

    let request = InventoryViewRequest {
        filter: InventoryFilter::new().with_status(StatusFilter::Only(MedicineStatus::Low)),
        page: PageRequest::new(2, 5).expect("valid request"),
    };
    let view = make_service(repo, clock)
        .inventory_view(request)
        .await
        .expect("view succeeds");

    assert_eq!(view.stats.total, 8);
    assert_eq!(view.rows.total_items(), 7);
    assert_eq!(view.rows.items().len(), 2);
}

#[rstest]
#[tokio::test]
async fn inventory_view_rejects_pages_past_the_end(clock: Arc<dyn Clock>) {
    let mut repo = MockMedicineRepository::new();
    repo.expect_list_all()
        .times(1)
        .return_once(|| Ok(vec![stored("Zinc", 16, date(2027, 1, 1))]));

    let request = InventoryViewRequest {
        filter: InventoryFilter::new(),
        page: PageRequest::new(2, 10).expect("valid request"),
    };
    let err = make_service(repo, clock)
        .inventory_view(request)
        .await
        .expect_err("page is out of range");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("page details");
    assert_eq!(details["totalPages"], 1);
}

#[rstest]
#[tokio::test]
async fn reads_surface_unavailable_store(clock: Arc<dyn Clock>) {
    let mut repo = MockMedicineRepository::new();
    repo.expect_list_all()
        .times(1)
        .return_once(|| Err(MedicineRepositoryError::connection("pool timed out")));

    let err = make_service(repo, clock)
        .inventory_stats()
        .await
        .expect_err("store is down");
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
