use super::dto::{ListVehiclesDto, ValidationResultDto};
use super::form::RawVehicleForm;
use super::record::VehicleRecord;
use super::validation::ValidationReport;
use crate::{
    modules::{
        auth::middleware::RequestSession,
        common::{
            extractors::{JsonBody, ValidatedQuery},
            responses::SimpleError,
        },
        plate::stats::PlateStats,
    },
    server::controller::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route("/validate", post(validate_vehicle_form))
        .route("/stats", get(get_plate_stats))
        .route(
            "/:vehicle_id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

/// Validates a vehicle form without storing it, a body that cannot be read as a
/// form is reported as a single violation
#[utoipa::path(
    post,
    path = "/vehicle/validate",
    tag = "vehicle",
    request_body = RawVehicleForm,
    responses(
        (
            status = OK,
            description = "every violation found on the form",
            body = ValidationResultDto,
        ),
    ),
)]
pub async fn validate_vehicle_form(
    State(state): State<AppState>,
    payload: Result<Json<RawVehicleForm>, JsonRejection>,
) -> Json<ValidationResultDto> {
    let report = match payload {
        Ok(Json(form)) => state.vehicle_service.validate(&form),
        Err(rejection) => ValidationReport {
            violations: vec![format!("unreadable form: {}", rejection.body_text())],
            plate_guidance: None,
        },
    };

    Json(report.into())
}

/// Creates a new vehicle
#[utoipa::path(
    post,
    path = "/vehicle",
    tag = "vehicle",
    security(("session" = [])),
    request_body = RawVehicleForm,
    responses(
        (
            status = OK,
            description = "the created vehicle",
            body = VehicleRecord,
        ),
        (
            status = UNAUTHORIZED,
            description = "NO_SESSION",
            body = SimpleError,
        ),
        (
            status = FORBIDDEN,
            description = "MISSING_PERMISSIONS",
            body = SimpleError,
        ),
        (
            status = BAD_REQUEST,
            description = "form violations, one per line / PLATE_IN_USE",
            body = SimpleError,
        ),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "the body is not a vehicle form",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    RequestSession(session): RequestSession,
    JsonBody(form): JsonBody<RawVehicleForm>,
) -> Result<Json<VehicleRecord>, (StatusCode, SimpleError)> {
    let created = state.vehicle_service.create(&session, &form).await?;

    Ok(Json(created))
}

/// Lists vehicles, newest first
#[utoipa::path(
    get,
    path = "/vehicle",
    tag = "vehicle",
    security(("session" = [])),
    params(ListVehiclesDto),
    responses(
        (
            status = OK,
            description = "the vehicles matching the filters",
            body = Vec<VehicleRecord>,
        ),
        (
            status = UNAUTHORIZED,
            description = "NO_SESSION",
            body = SimpleError,
        ),
        (
            status = FORBIDDEN,
            description = "MISSING_PERMISSIONS",
            body = SimpleError,
        ),
    ),
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    RequestSession(session): RequestSession,
    ValidatedQuery(filter): ValidatedQuery<ListVehiclesDto>,
) -> Result<Json<Vec<VehicleRecord>>, (StatusCode, SimpleError)> {
    let vehicles = state.vehicle_service.list(&session, &filter).await?;

    Ok(Json(vehicles))
}

/// Counts the stored vehicles per plate country
#[utoipa::path(
    get,
    path = "/vehicle/stats",
    tag = "vehicle",
    security(("session" = [])),
    responses(
        (
            status = OK,
            description = "amount of plates per country",
            body = PlateStats,
        ),
        (
            status = UNAUTHORIZED,
            description = "NO_SESSION",
            body = SimpleError,
        ),
        (
            status = FORBIDDEN,
            description = "MISSING_PERMISSIONS",
            body = SimpleError,
        ),
    ),
)]
pub async fn get_plate_stats(
    State(state): State<AppState>,
    RequestSession(session): RequestSession,
) -> Result<Json<PlateStats>, (StatusCode, SimpleError)> {
    Ok(Json(state.vehicle_service.plate_stats(&session).await?))
}

#[utoipa::path(
    get,
    path = "/vehicle/{vehicle_id}",
    tag = "vehicle",
    security(("session" = [])),
    params(("vehicle_id" = i32, Path, description = "id of the vehicle")),
    responses(
        (
            status = OK,
            description = "the vehicle",
            body = VehicleRecord,
        ),
        (
            status = NOT_FOUND,
            description = "NOT_FOUND",
            body = SimpleError,
        ),
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    RequestSession(session): RequestSession,
    Path(vehicle_id): Path<i32>,
) -> Result<Json<VehicleRecord>, (StatusCode, SimpleError)> {
    Ok(Json(state.vehicle_service.get(&session, vehicle_id).await?))
}

/// Replaces a vehicle with the submitted form
#[utoipa::path(
    put,
    path = "/vehicle/{vehicle_id}",
    tag = "vehicle",
    security(("session" = [])),
    params(("vehicle_id" = i32, Path, description = "id of the vehicle")),
    request_body = RawVehicleForm,
    responses(
        (
            status = OK,
            description = "the updated vehicle",
            body = VehicleRecord,
        ),
        (
            status = BAD_REQUEST,
            description = "form violations, one per line / PLATE_IN_USE",
            body = SimpleError,
        ),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "the body is not a vehicle form",
            body = SimpleError,
        ),
        (
            status = NOT_FOUND,
            description = "NOT_FOUND",
            body = SimpleError,
        ),
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    RequestSession(session): RequestSession,
    Path(vehicle_id): Path<i32>,
    JsonBody(form): JsonBody<RawVehicleForm>,
) -> Result<Json<VehicleRecord>, (StatusCode, SimpleError)> {
    let updated = state
        .vehicle_service
        .update(&session, vehicle_id, &form)
        .await?;

    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/vehicle/{vehicle_id}",
    tag = "vehicle",
    security(("session" = [])),
    params(("vehicle_id" = i32, Path, description = "id of the vehicle")),
    responses(
        (
            status = OK,
            description = "the deleted vehicle",
            body = VehicleRecord,
        ),
        (
            status = NOT_FOUND,
            description = "NOT_FOUND",
            body = SimpleError,
        ),
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    RequestSession(session): RequestSession,
    Path(vehicle_id): Path<i32>,
) -> Result<Json<VehicleRecord>, (StatusCode, SimpleError)> {
    Ok(Json(state.vehicle_service.delete(&session, vehicle_id).await?))
}
