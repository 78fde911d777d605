//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ApiResponse;
use super::modules::doctor_fees::{self, DoctorFeesState, FeeService};
use super::modules::health::{self, HealthState};
use super::modules::metrics::{http_metrics_middleware, prometheus_metrics, MetricsState, METRICS_PATH};
use super::modules::request_id::request_id_middleware;

/// Route prefix of the doctor fees API
pub const FEES_PREFIX: &str = "/api/doctors/doctorfees";

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::welcome,
        health::health_check,
        doctor_fees::save_fees,
        doctor_fees::get_doctor_fees,
        doctor_fees::get_all_doctor_fees,
        doctor_fees::update_doctor_fees,
        doctor_fees::delete_doctor_fees,
        doctor_fees::find_by_doctor_id,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::ComponentHealth,
            doctor_fees::DoctorFeeResponse,
            doctor_fees::DoctorFeeRequest,
            doctor_fees::SaveFeesRequest,
            doctor_fees::UpdateDoctorFeesRequest,
        )
    ),
    tags(
        (name = "Health", description = "Welcome banner and health check"),
        (name = "Doctor Fees", description = "Doctor fee records: save, lookup, update and delete"),
    ),
    info(
        title = "OneHealth Doctor Fees API",
        version = "1.0.0",
        description = "REST API for managing doctor fee records",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    db: DatabaseConnection,
    service: Arc<FeeService>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let fee_routes = Router::new()
        .route("/saveFees", post(doctor_fees::save_fees))
        .route(
            "/getDoctorFeesById/{doctorId}",
            get(doctor_fees::get_doctor_fees),
        )
        .route("/getAllDoctorFees", get(doctor_fees::get_all_doctor_fees))
        .route(
            "/updateDoctorFeesById/{doctorID}",
            put(doctor_fees::update_doctor_fees),
        )
        .route(
            "/deleteDoctorFeesById/{doctorID}",
            delete(doctor_fees::delete_doctor_fees),
        )
        .route("/findDoctorById/{doctorId}", get(doctor_fees::find_by_doctor_id))
        .with_state(DoctorFeesState { service });

    let health_routes = Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route(METRICS_PATH, get(prometheus_metrics))
        .with_state(MetricsState {
            handle: prometheus_handle,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest(FEES_PREFIX, fee_routes)
        // route_layer so MatchedPath is known when metrics are recorded
        .route_layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::DoctorFeeService;
    use crate::infrastructure::database::memory_database;
    use crate::infrastructure::SeaOrmDoctorFeeRepository;

    async fn app() -> Router {
        let db = memory_database().await;
        let repo = Arc::new(SeaOrmDoctorFeeRepository::new(db.clone()));
        let service = Arc::new(DoctorFeeService::new(repo));
        let handle = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(db, service, handle)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn url(path: &str) -> String {
        format!("{}{}", FEES_PREFIX, path)
    }

    async fn save_one(app: &Router, doctor_id: i64, speciality: &str, fees: i64) -> i64 {
        let (status, body) = send(
            app,
            "POST",
            &url("/saveFees"),
            Some(json!([{"doctorId": doctor_id, "speciality": speciality, "fees": fees}])),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body[0]["feesId"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn save_fees_returns_201_with_assigned_ids() {
        let app = app().await;
        let (status, body) = send(
            &app,
            "POST",
            &url("/saveFees"),
            Some(json!([
                {"doctorId": 5, "speciality": "Cardiology", "fees": 500},
                {"doctorId": 5, "speciality": "Neurology", "fees": 650}
            ])),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let saved = body.as_array().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0]["doctorId"], 5);
        assert_eq!(saved[0]["speciality"], "Cardiology");
        assert_eq!(saved[0]["fees"], 500);
        assert!(saved[0]["feesId"].is_i64());
        assert_ne!(saved[0]["feesId"], saved[1]["feesId"]);
    }

    #[tokio::test]
    async fn save_fees_rejects_invalid_records() {
        let app = app().await;
        let (status, body) = send(
            &app,
            "POST",
            &url("/saveFees"),
            Some(json!([
                {"doctorId": 5, "speciality": "Cardiology", "fees": 500},
                {"doctorId": 5, "speciality": "Neurology", "fees": -10},
                {"doctorId": 6, "speciality": "", "fees": 300}
            ])),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "records[1].fees: fees must be non-negative; \
             records[2].speciality: speciality must be 1-255 characters"
        );

        let (_, all) = send(&app, "GET", &url("/getAllDoctorFees"), None).await;
        assert_eq!(all, json!([]));
    }

    #[tokio::test]
    async fn get_by_id_returns_record_or_404() {
        let app = app().await;
        let id = save_one(&app, 5, "Cardiology", 500).await;

        let (status, body) = send(&app, "GET", &url(&format!("/getDoctorFeesById/{}", id)), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"feesId": id, "doctorId": 5, "speciality": "Cardiology", "fees": 500})
        );

        let (status, body) = send(&app, "GET", &url("/getDoctorFeesById/9999"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No doctor fees found with feesId=9999");
    }

    #[tokio::test]
    async fn non_numeric_id_is_400_in_error_envelope() {
        let app = app().await;
        for (method, path) in [
            ("GET", "/getDoctorFeesById/abc"),
            ("DELETE", "/deleteDoctorFeesById/abc"),
            ("GET", "/findDoctorById/abc"),
        ] {
            let (status, body) = send(&app, method, &url(path), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, path);
            assert_eq!(body["success"], false);
            assert!(body["error"].as_str().unwrap().contains("abc"));
        }
    }

    #[tokio::test]
    async fn get_all_on_empty_store_is_empty_list() {
        let app = app().await;
        let (status, body) = send(&app, "GET", &url("/getAllDoctorFees"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn update_returns_201_and_changes_only_fees() {
        let app = app().await;
        let id = save_one(&app, 5, "Cardiology", 500).await;

        let (status, body) = send(
            &app,
            "PUT",
            &url(&format!("/updateDoctorFeesById/{}", id)),
            Some(json!({"feesId": 42, "doctorId": 8, "speciality": "Oncology", "fees": 700})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"feesId": id, "doctorId": 5, "speciality": "Cardiology", "fees": 700})
        );
    }

    #[tokio::test]
    async fn update_missing_is_404() {
        let app = app().await;
        let (status, _) = send(
            &app,
            "PUT",
            &url("/updateDoctorFeesById/3"),
            Some(json!({"fees": 700})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_returns_record_then_404() {
        let app = app().await;
        let id = save_one(&app, 5, "Cardiology", 500).await;
        let path = url(&format!("/deleteDoctorFeesById/{}", id));

        let (status, body) = send(&app, "DELETE", &path, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feesId"], id);

        let (status, _) = send(&app, "DELETE", &path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "GET", &url(&format!("/getDoctorFeesById/{}", id)), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn find_by_doctor_id_lists_matches_or_empty() {
        let app = app().await;
        save_one(&app, 5, "Cardiology", 500).await;
        save_one(&app, 6, "Oncology", 900).await;
        save_one(&app, 5, "Neurology", 650).await;

        let (status, body) = send(&app, "GET", &url("/findDoctorById/5"), None).await;
        assert_eq!(status, StatusCode::OK);
        let fees = body.as_array().unwrap();
        assert_eq!(fees.len(), 2);
        assert!(fees.iter().all(|f| f["doctorId"] == 5));

        let (status, body) = send(&app, "GET", &url("/findDoctorById/77"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn lifecycle_over_http() {
        let app = app().await;
        let id = save_one(&app, 5, "Cardiology", 500).await;
        let get_path = url(&format!("/getDoctorFeesById/{}", id));

        let (_, body) = send(&app, "GET", &get_path, None).await;
        assert_eq!(body["fees"], 500);

        send(
            &app,
            "PUT",
            &url(&format!("/updateDoctorFeesById/{}", id)),
            Some(json!({"fees": 700})),
        )
        .await;
        let (_, body) = send(&app, "GET", &get_path, None).await;
        assert_eq!(body["fees"], 700);

        send(&app, "DELETE", &url(&format!("/deleteDoctorFeesById/{}", id)), None).await;
        let (status, _) = send(&app, "GET", &get_path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn welcome_and_health_endpoints() {
        let app = app().await;

        let resp = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], health::WELCOME_MESSAGE.as_bytes());

        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "ok");
    }

    async fn scrape_metrics(app: &Router) -> String {
        let resp = app
            .clone()
            .oneshot(Request::builder().uri(METRICS_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn metrics_endpoint_reports_fee_route_traffic() {
        let db = memory_database().await;
        let repo = Arc::new(SeaOrmDoctorFeeRepository::new(db.clone()));
        let service = Arc::new(DoctorFeeService::new(repo));
        let handle = crate::server::prometheus_handle().unwrap();
        let app = create_api_router(db, service, handle);

        let (status, _) = send(&app, "GET", &url("/getAllDoctorFees"), None).await;
        assert_eq!(status, StatusCode::OK);

        scrape_metrics(&app).await;
        let text = scrape_metrics(&app).await;

        assert!(text.lines().any(|line| {
            line.starts_with("http_requests_total{")
                && line.contains(r#"path="/api/doctors/doctorfees/getAllDoctorFees""#)
                && line.contains(r#"status="200""#)
        }));
        assert!(text.contains("http_request_duration_seconds"));
        assert!(!text.contains(r#"path="/metrics""#));
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let app = app().await;
        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(resp.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn openapi_document_lists_fee_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc
            .paths
            .paths
            .contains_key("/api/doctors/doctorfees/getAllDoctorFees"));
        assert!(doc
            .paths
            .paths
            .contains_key("/api/doctors/doctorfees/saveFees"));
    }
}
