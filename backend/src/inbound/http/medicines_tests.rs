//! Tests for medicine HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::Error;
use crate::domain::ports::{
    MockCategoryCommand, MockCategoryQuery, MockInventoryQuery, MockMedicineCommand,
};
use crate::inbound::http::state::{HttpStatePorts, PageSizeLimits};
use crate::inbound::http::test_utils::{date, in_memory_state, medicine};
use crate::inbound::http::validation::json_error_handler;

fn test_app(
    state: HttpState,
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
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api/v1")
                .service(create_medicine)
                .service(list_medicines),
        )
}

fn valid_payload() -> Value {
    json!({
        "name": "Paracetamol 500mg",
        "barcode": "6221000001",
        "price": "12.50",
        "quantity": 40,
        "category": "Analgesics",
        "manufacturer": "Acme Pharma",
        "expiryDate": "2027-01-31"
    })
}

fn empty_state() -> HttpState {
    in_memory_state(Vec::new(), PageSizeLimits::default())
}

#[rstest]
#[actix_web::test]
async fn create_medicine_returns_created_record_and_message() {
    let app = actix_test::init_service(test_app(empty_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/medicines")
        .set_json(valid_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Medicine added successfully");
    let medicine = &body["medicine"];
    assert_eq!(medicine["name"], "Paracetamol 500mg");
    assert_eq!(medicine["price"], json!(12.5));
    assert_eq!(medicine["quantity"], 40);
    assert_eq!(medicine["expiryDate"], "2027-01-31");
    assert_eq!(medicine["prescriptionRequired"], false);
    assert!(medicine.get("status").is_none());
    assert!(
        medicine["id"]
            .as_str()
            .is_some_and(|id| uuid::Uuid::parse_str(id).is_ok())
    );
}

#[rstest]
#[actix_web::test]
async fn create_medicine_reports_every_invalid_field() {
    let app = actix_test::init_service(test_app(empty_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/medicines")
        .set_json(json!({
            "name": "P",
            "barcode": "6221000001",
            "price": 0,
            "quantity": "1.5",
            "category": "Analgesics",
            "expiryDate": "31/01/2027"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    let fields: Vec<&str> = body["details"]["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .filter_map(|field| field["field"].as_str())
        .collect();
    assert_eq!(
        fields,
        vec!["name", "price", "quantity", "manufacturer", "expiryDate"]
    );
}

#[rstest]
#[actix_web::test]
async fn create_medicine_rejects_duplicate_barcode() {
    let app = actix_test::init_service(test_app(empty_state())).await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/medicines")
            .set_json(valid_payload())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), expected);
        if expected == StatusCode::CONFLICT {
            let body: Value = actix_test::read_body_json(response).await;
            assert_eq!(body["code"], "conflict");
            assert_eq!(body["details"]["field"], "barcode");
        }
    }
}

#[rstest]
#[actix_web::test]
async fn create_medicine_maps_malformed_json_to_invalid_request() {
    let app = actix_test::init_service(test_app(empty_state())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/medicines")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_json");
}

#[rstest]
#[actix_web::test]
async fn list_medicines_labels_each_record_with_its_status() {
    let today = date(2026, 3, 1);
    let records = vec![
        medicine("Paracetamol", "111", 16, date(2027, 1, 1), Some("Analgesics")),
        medicine("Ibuprofen", "222", 15, date(2027, 1, 1), None),
        medicine("Amoxicillin", "333", 40, today, Some("Antibiotics")),
    ];
    let state = in_memory_state(records, PageSizeLimits::default());
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/medicines")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: ListMedicinesResponseBody = actix_test::read_body_json(response).await;
    let statuses: Vec<_> = body
        .medicines
        .iter()
        .map(|medicine| (medicine.name.as_str(), medicine.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("Paracetamol", Some(MedicineStatusBody::Available)),
            ("Ibuprofen", Some(MedicineStatusBody::Low)),
            ("Amoxicillin", Some(MedicineStatusBody::Expired)),
        ]
    );
    assert_eq!(body.medicines[1].category, "unspecified");
}

#[rstest]
#[actix_web::test]
async fn list_medicines_surfaces_unavailable_store() {
    let mut inventory = MockInventoryQuery::new();
    inventory
        .expect_list_medicines()
        .times(1)
        .return_once(|| Err(Error::service_unavailable("medicine repository unavailable")));
    let state = HttpState::new(HttpStatePorts {
        medicines: Arc::new(MockMedicineCommand::new()),
        inventory: Arc::new(inventory),
        categories: Arc::new(MockCategoryCommand::new()),
        categories_query: Arc::new(MockCategoryQuery::new()),
    });
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/medicines")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "service_unavailable");
}
