use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

use super::domain::{CompanyId, DriveId, RegistrarError, StudentId};
use super::report::views::{CompanyReportView, DriveReportView, StudentReportView};
use super::service::{
    ApplicantRegistration, ApplicationRequest, CompanyRegistration, DriveRegistration,
    PlacementService, PlacementServiceError, StatusUpdateRequest,
};

/// Router builder exposing registrar operations and reports over HTTP.
pub fn placement_router(service: PlacementService) -> Router {
    Router::new()
        .route("/api/v1/placement/companies", post(add_company_handler))
        .route(
            "/api/v1/placement/companies/:company_id",
            put(update_company_handler),
        )
        .route(
            "/api/v1/placement/companies/:company_id/drives",
            post(add_drive_handler),
        )
        .route(
            "/api/v1/placement/companies/:company_id/drives/:drive_id",
            get(offer_details_handler),
        )
        .route("/api/v1/placement/applicants", post(register_applicant_handler))
        .route(
            "/api/v1/placement/applicants/:student_id/companies",
            get(applicable_companies_handler),
        )
        .route("/api/v1/placement/applications", post(apply_handler))
        .route(
            "/api/v1/placement/applications/status",
            put(update_status_handler),
        )
        .route("/api/v1/placement/reports/students", get(student_reports_handler))
        .route("/api/v1/placement/reports/drives", get(drive_reports_handler))
        .route(
            "/api/v1/placement/reports/drives/latest",
            get(latest_drive_report_handler),
        )
        .route(
            "/api/v1/placement/reports/companies",
            get(company_reports_handler),
        )
        .route("/api/v1/placement/reports/full", get(full_report_handler))
        .with_state(service)
}

pub(crate) async fn add_company_handler(
    State(service): State<PlacementService>,
    Json(registration): Json<CompanyRegistration>,
) -> Response {
    match service.add_company(registration) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_company_handler(
    State(service): State<PlacementService>,
    Path(company_id): Path<u64>,
    Json(registration): Json<Option<CompanyRegistration>>,
) -> Response {
    match service.rename_company(CompanyId(company_id), registration) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_drive_handler(
    State(service): State<PlacementService>,
    Path(company_id): Path<u64>,
    Json(registration): Json<DriveRegistration>,
) -> Response {
    match service.add_drive(CompanyId(company_id), registration) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn offer_details_handler(
    State(service): State<PlacementService>,
    Path((company_id, drive_id)): Path<(u64, u64)>,
) -> Response {
    match service.offer_details(CompanyId(company_id), DriveId(drive_id)) {
        Ok(details) => (StatusCode::OK, Json(details)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn register_applicant_handler(
    State(service): State<PlacementService>,
    Json(registration): Json<ApplicantRegistration>,
) -> Response {
    match service.register_applicant(registration) {
        Ok(student_id) => {
            (StatusCode::CREATED, Json(json!({ "student_id": student_id }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn applicable_companies_handler(
    State(service): State<PlacementService>,
    Path(student_id): Path<i64>,
) -> Response {
    let result = service
        .inspect(|registrar| registrar.companies_applicable_for(StudentId(student_id)))
        .and_then(|companies| companies.map_err(PlacementServiceError::from));
    match result {
        Ok(companies) => (
            StatusCode::OK,
            Json(json!({ "student_id": student_id, "companies": companies })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn apply_handler(
    State(service): State<PlacementService>,
    Json(request): Json<ApplicationRequest>,
) -> Response {
    match service.apply(request) {
        Ok(()) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_status_handler(
    State(service): State<PlacementService>,
    Json(request): Json<StatusUpdateRequest>,
) -> Response {
    match service.update_status(request) {
        Ok(()) => (StatusCode::OK, Json(request)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn student_reports_handler(State(service): State<PlacementService>) -> Response {
    match service.student_reports() {
        Ok(reports) => {
            let views: Vec<StudentReportView> = reports.iter().map(|r| r.to_view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn drive_reports_handler(State(service): State<PlacementService>) -> Response {
    match service.drive_reports() {
        Ok(reports) => {
            let views: Vec<DriveReportView> = reports.iter().map(|r| r.to_view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn company_reports_handler(State(service): State<PlacementService>) -> Response {
    match service.company_reports() {
        Ok(reports) => {
            let views: Vec<CompanyReportView> = reports.iter().map(|r| r.to_view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn latest_drive_report_handler(
    State(service): State<PlacementService>,
) -> Response {
    match service.latest_drive_report() {
        Ok(Some(report)) => (StatusCode::OK, Json(report.to_view())).into_response(),
        Ok(None) => {
            let payload = json!({ "error": "no drives registered" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn full_report_handler(State(service): State<PlacementService>) -> Response {
    match service.full_report() {
        Ok(report) => (StatusCode::OK, Json(report.summary())).into_response(),
        Err(error) => error_response(error),
    }
}

/// HTTP status for a failed placement operation.
pub fn status_for(error: &PlacementServiceError) -> StatusCode {
    match error {
        PlacementServiceError::Registrar(RegistrarError::NotFound { .. }) => StatusCode::NOT_FOUND,
        PlacementServiceError::Registrar(
            RegistrarError::DuplicateApplication { .. } | RegistrarError::IllegalTransition { .. },
        ) => StatusCode::CONFLICT,
        PlacementServiceError::Registrar(
            RegistrarError::IneligibleApplicant { .. } | RegistrarError::InvalidArgument(_),
        ) => StatusCode::UNPROCESSABLE_ENTITY,
        PlacementServiceError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn error_response(error: PlacementServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (status_for(&error), Json(payload)).into_response()
}
