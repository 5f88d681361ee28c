//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use pharmacy_backend::Trace;
#[cfg(debug_assertions)]
use pharmacy_backend::doc::ApiDoc;
use pharmacy_backend::inbound::http::categories::{create_category, list_categories};
use pharmacy_backend::inbound::http::health::{HealthState, live, ready};
use pharmacy_backend::inbound::http::inventory::{inventory_stats, inventory_view};
use pharmacy_backend::inbound::http::medicines::{create_medicine, list_medicines};
use pharmacy_backend::inbound::http::state::HttpState;
use pharmacy_backend::inbound::http::validation::{json_error_handler, query_error_handler};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api/v1")
        .service(create_medicine)
        .service(list_medicines)
        .service(inventory_stats)
        .service(inventory_view)
        .service(list_categories)
        .service(create_category);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] with the bind address, page limits
///   and optional database pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        page_limits: _,
        db_pool: _,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let prometheus = match prometheus {
        Some(prometheus) => prometheus,
        None => metrics::build_metrics()?,
    };

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use pharmacy_backend::domain::TRACE_ID_HEADER;
    use pharmacy_backend::inbound::http::state::PageSizeLimits;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn deps() -> AppDependencies {
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("socket address"),
            PageSizeLimits::default(),
        );
        AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: build_http_state(&config),
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn wired_app_serves_the_api_with_trace_ids() {
        let app = actix_test::init_service(build_app(deps())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/medicines")
            .set_json(json!({
                "name": "Paracetamol",
                "barcode": "6221000001",
                "price": 3.5,
                "quantity": 30,
                "category": "Analgesics",
                "manufacturer": "Acme Pharma",
                "expiryDate": "2099-12-31T00:00:00Z"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/inventory/stats")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["available"], 1);
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_bodies_use_the_error_envelope() {
        let app = actix_test::init_service(build_app(deps())).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/categories")
            .insert_header(("content-type", "application/json"))
            .set_payload("[")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let trace_header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["traceId"].as_str(), trace_header.as_deref());
    }

    #[rstest]
    #[actix_web::test]
    async fn health_probes_are_mounted_outside_the_api_scope() {
        let app = actix_test::init_service(build_app(deps())).await;

        let request = actix_test::TestRequest::get().uri("/health/live").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
