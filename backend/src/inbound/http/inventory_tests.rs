//! Tests for inventory view HTTP handlers.

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use serde_json::Value;

use super::*;
use crate::domain::MedicineRecord;
use crate::inbound::http::medicines::MedicineStatusBody;
use crate::inbound::http::test_utils::{date, fixture_today, in_memory_state, medicine};
use crate::inbound::http::validation::query_error_handler;

const PAGE_LIMITS: PageSizeLimits = PageSizeLimits {
    default_page_size: 5,
    max_page_size: 20,
};

fn test_app(
    records: Vec<MedicineRecord>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(in_memory_state(records, PAGE_LIMITS)))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api/v1")
                .service(inventory_stats)
                .service(inventory_view),
        )
}

/// Six medicines: three in date and stocked (one low), one out of stock, one
/// expiring today and one already expired.
#[fixture]
fn records() -> Vec<MedicineRecord> {
    let today = fixture_today();
    let later = date(2027, 6, 30);
    vec![
        medicine("Paracetamol", "6221000001", 40, later, Some("Analgesics")),
        medicine("Ibuprofen", "6221000002", 12, later, Some("Analgesics")),
        medicine("Amoxicillin", "6221000003", 0, later, Some("Antibiotics")),
        medicine("Cetirizine", "6221000004", 30, today, Some("Antihistamines")),
        medicine("Loratadine", "6221000005", 25, date(2025, 12, 1), None),
        medicine("Omeprazole", "6221000006", 60, later, Some("Antacids")),
    ]
}

async fn get_view(records: Vec<MedicineRecord>, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(records)).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    (status, actix_test::read_body_json(response).await)
}

#[rstest]
#[actix_web::test]
async fn first_page_carries_stats_rows_and_pagination(records: Vec<MedicineRecord>) {
    let (status, body) = get_view(records, "/api/v1/inventory").await;

    assert_eq!(status, StatusCode::OK);
    let stats: InventoryStatsBody =
        serde_json::from_value(body["stats"].clone()).expect("stats body");
    assert_eq!(stats.total, 6);
    assert_eq!(stats.available, 3);
    assert_eq!(stats.low, 1);
    assert_eq!(stats.out_of_stock, 1);
    assert_eq!(stats.expired, 1);
    assert_eq!(stats.total_value, Decimal::new(3000, 2));

    assert_eq!(body["medicines"].as_array().map(Vec::len), Some(5));
    let pagination = &body["pagination"];
    assert_eq!(pagination["currentPage"], 1);
    assert_eq!(pagination["pageSize"], 5);
    assert_eq!(pagination["totalItems"], 6);
    assert_eq!(pagination["totalPages"], 2);
    assert!(pagination["links"].get("prev").is_none());
    assert!(
        pagination["links"]["next"]
            .as_str()
            .is_some_and(|link| link.ends_with("/api/v1/inventory?page=2"))
    );
}

#[rstest]
#[actix_web::test]
async fn second_page_holds_the_remainder(records: Vec<MedicineRecord>) {
    let (status, body) = get_view(records, "/api/v1/inventory?page=2").await;

    assert_eq!(status, StatusCode::OK);
    let medicines: Vec<MedicineBody> =
        serde_json::from_value(body["medicines"].clone()).expect("medicine rows");
    assert_eq!(medicines.len(), 1);
    assert_eq!(medicines[0].name, "Omeprazole");
    assert_eq!(medicines[0].status, Some(MedicineStatusBody::Available));
    assert!(body["pagination"]["links"].get("next").is_none());
}

#[rstest]
#[actix_web::test]
async fn page_past_the_end_is_rejected(records: Vec<MedicineRecord>) {
    let (status, body) = get_view(records, "/api/v1/inventory?page=3").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "page_out_of_range");
    assert_eq!(body["details"]["totalPages"], 2);
}

#[rstest]
#[case("/api/v1/inventory?page=0", "page")]
#[case("/api/v1/inventory?page=two", "page")]
#[case("/api/v1/inventory?pageSize=-5", "pageSize")]
#[actix_web::test]
async fn malformed_page_parameters_are_rejected(
    records: Vec<MedicineRecord>,
    #[case] uri: &str,
    #[case] field: &str,
) {
    let (status, body) = get_view(records, uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["details"]["code"], "invalid_page");
}

#[rstest]
#[actix_web::test]
async fn oversized_page_size_is_capped(records: Vec<MedicineRecord>) {
    let (status, body) = get_view(records, "/api/v1/inventory?pageSize=500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["pageSize"], 20);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[rstest]
#[case("/api/v1/inventory?q=IBU", &["Ibuprofen"])]
#[case("/api/v1/inventory?q=6221000003", &["Amoxicillin"])]
#[case("/api/v1/inventory?status=expired", &["Cetirizine", "Loratadine"])]
#[case("/api/v1/inventory?status=out-of-stock", &["Amoxicillin"])]
#[case("/api/v1/inventory?category=Analgesics&status=low", &["Ibuprofen"])]
#[case("/api/v1/inventory?category=unspecified", &["Loratadine"])]
#[case("/api/v1/inventory?category=all&status=all&q=%20", &[
    "Paracetamol", "Ibuprofen", "Amoxicillin", "Cetirizine", "Loratadine",
])]
#[actix_web::test]
async fn filters_compose_while_stats_cover_everything(
    records: Vec<MedicineRecord>,
    #[case] uri: &str,
    #[case] expected: &[&str],
) {
    let (status, body) = get_view(records, uri).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["medicines"]
        .as_array()
        .expect("medicines array")
        .iter()
        .filter_map(|row| row["name"].as_str())
        .collect();
    assert_eq!(names, expected);
    assert_eq!(body["stats"]["total"], 6);
}

#[rstest]
#[actix_web::test]
async fn filtered_links_keep_the_other_parameters(records: Vec<MedicineRecord>) {
    let (_, body) = get_view(records, "/api/v1/inventory?category=Analgesics&pageSize=1").await;

    let links = &body["pagination"]["links"];
    assert!(
        links["next"]
            .as_str()
            .is_some_and(|link| link.ends_with("?category=Analgesics&pageSize=1&page=2"))
    );
    assert_eq!(links["last"], links["next"]);
}

#[rstest]
#[actix_web::test]
async fn unknown_status_is_rejected(records: Vec<MedicineRecord>) {
    let (status, body) = get_view(records, "/api/v1/inventory?status=sold").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "status");
    assert_eq!(body["details"]["value"], "sold");
}

#[rstest]
#[actix_web::test]
async fn empty_inventory_returns_an_empty_first_page() {
    let (status, body) = get_view(Vec::new(), "/api/v1/inventory").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["medicines"], Value::Array(Vec::new()));
    assert_eq!(body["pagination"]["totalPages"], 0);
    assert_eq!(body["stats"]["totalValue"], serde_json::json!(0.0));
}

#[rstest]
#[actix_web::test]
async fn stats_endpoint_returns_only_the_counters(records: Vec<MedicineRecord>) {
    let (status, body) = get_view(records, "/api/v1/inventory/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["outOfStock"], 1);
    assert_eq!(body["totalValue"], serde_json::json!(30.0));
    assert!(body.get("medicines").is_none());
}
