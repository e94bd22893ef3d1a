use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::workflows::placement::router::{
    apply_handler, latest_drive_report_handler, status_for,
};
use crate::workflows::placement::{
    placement_router, ApplicationRequest, PlacementService, PlacementServiceError,
    RegistrarError, StudentId,
};

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serializable")))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn registration_routes_build_a_placement() {
    let service = PlacementService::default();
    let router = placement_router(service.clone());

    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/placement/companies",
            json!({ "name": "Hooli" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let company_id = read_json_body(response).await["company_id"]
        .as_u64()
        .expect("company id");

    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/placement/companies/{company_id}/drives"),
            json!({
                "role_name": "Search",
                "start_date": "2025-10-01",
                "end_date": "2025-10-03",
                "min_cgpa": 8.0,
                "ctc": 2_500_000,
                "job_category": "marquee"
            }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let drive_id = read_json_body(response).await["drive_id"]
        .as_u64()
        .expect("drive id");

    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/placement/applicants",
            json!({ "student_id": 31, "name": "Gavin", "cgpa": 8.4 }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let application = json!({
        "student_id": 31,
        "company_id": company_id,
        "drive_id": drive_id
    });
    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/placement/applications",
            application.clone(),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/placement/applications",
            application,
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = router
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/placement/applications/status",
            json!({ "student_id": 31, "drive_id": drive_id, "status": "selected" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(get("/api/v1/placement/reports/full"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_offers_made"], json!(1));
    assert_eq!(
        payload["total_offers_by_category"][0]["category_label"],
        json!("Marquee")
    );

    let response = router
        .oneshot(get("/api/v1/placement/reports/students"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["ctc_for_final_offer"], json!(2_500_000));
}

#[tokio::test]
async fn rename_route_rejects_null_payload() {
    let service = PlacementService::new(campus().registrar);
    let company_id = service
        .inspect(|registrar| registrar.companies()[0].id())
        .expect("readable");
    let router = placement_router(service);

    let response = router
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/placement/companies/{company_id}"),
            Value::Null,
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = router
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/placement/companies/18446744073709551615",
            json!({ "name": "Nobody" }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn apply_handler_maps_ineligibility_to_unprocessable() {
    let campus = campus();
    let request = ApplicationRequest {
        student_id: campus.ravi,
        company_id: campus.globex,
        drive_id: campus.globex_architect,
    };
    let service = PlacementService::new(campus.registrar);

    let response = apply_handler(State(service), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("not eligible"));
}

#[tokio::test]
async fn apply_handler_reports_unknown_applicant() {
    let campus = campus();
    let request = ApplicationRequest {
        student_id: StudentId(404),
        company_id: campus.acme,
        drive_id: campus.acme_analyst,
    };
    let service = PlacementService::new(campus.registrar);

    let response = apply_handler(State(service), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn latest_drive_report_is_not_found_without_drives() {
    let response = latest_drive_report_handler(State(PlacementService::default())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lookup_routes_expose_offers_and_applicable_companies() {
    let campus = campus();
    let uri = format!(
        "/api/v1/placement/companies/{}/drives/{}",
        campus.acme, campus.acme_engineer
    );
    let router = placement_router(PlacementService::new(campus.registrar));

    let response = router
        .clone()
        .oneshot(get(&uri))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["role_name"], json!("Engineer"));
    assert_eq!(payload["job_category_label"], json!("Super Dream"));

    let response = router
        .oneshot(get("/api/v1/placement/applicants/2/companies"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["companies"], json!(["Acme"]));
}

#[tokio::test]
async fn company_reports_route_lists_average_packages() {
    let mut campus = campus();
    campus
        .registrar
        .apply_for_drive(campus.asha, campus.globex, campus.globex_architect)
        .expect("eligible");
    campus
        .registrar
        .update_application_status(
            campus.asha,
            campus.globex_architect,
            crate::workflows::placement::ApplicationStatus::Selected,
        )
        .expect("selected");
    let router = placement_router(PlacementService::new(campus.registrar));

    let response = router
        .oneshot(get("/api/v1/placement/reports/companies"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["company_name"], json!("Acme"));
    assert_eq!(payload[0]["selected_count"], json!(0));
    assert_eq!(payload[1]["company_name"], json!("Globex"));
    assert_eq!(payload[1]["selected_count"], json!(1));
    assert_eq!(payload[1]["average_package_lpa"], json!(24.0));
}

#[test]
fn registrar_errors_map_to_http_statuses() {
    let conflict = PlacementServiceError::Registrar(RegistrarError::IllegalTransition {
        from: crate::workflows::placement::ApplicationStatus::Selected,
        to: crate::workflows::placement::ApplicationStatus::Applied,
    });
    assert_eq!(status_for(&conflict), StatusCode::CONFLICT);
    assert_eq!(
        status_for(&PlacementServiceError::Unavailable),
        StatusCode::SERVICE_UNAVAILABLE
    );
}
