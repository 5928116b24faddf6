use super::dto::{Buyer, CreateBuyerDto};
use crate::{
    modules::{
        auth::{constants::Permission, middleware::RequestSession},
        common::{extractors::JsonBody, responses::SimpleError},
    },
    server::controller::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use http::StatusCode;
use tracing::info;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/", post(create_buyer).get(list_buyers))
}

/// Creates a new buyer
#[utoipa::path(
    post,
    path = "/buyer",
    tag = "buyer",
    security(("session" = [])),
    request_body = CreateBuyerDto,
    responses(
        (
            status = OK,
            description = "the created buyer",
            body = Buyer,
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
            description = "form violations, one per line / EMAIL_IN_USE",
            body = SimpleError,
        ),
    ),
)]
pub async fn create_buyer(
    State(state): State<AppState>,
    RequestSession(session): RequestSession,
    JsonBody(form): JsonBody<CreateBuyerDto>,
) -> Result<Json<Buyer>, (StatusCode, SimpleError)> {
    session.require(Permission::CreateBuyer)?;

    let buyer = Buyer::from_form(&form)
        .map_err(|report| (StatusCode::BAD_REQUEST, SimpleError::from(report.to_message())))?;

    let created = state.buyer_repository.create_buyer(buyer).await?;

    info!(user_id = session.user_id, buyer_id = created.id, "[BUYER] created");

    Ok(Json(created))
}

/// Lists every buyer, ordered by name
#[utoipa::path(
    get,
    path = "/buyer",
    tag = "buyer",
    security(("session" = [])),
    responses(
        (
            status = OK,
            description = "every buyer",
            body = Vec<Buyer>,
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
pub async fn list_buyers(
    State(state): State<AppState>,
    RequestSession(session): RequestSession,
) -> Result<Json<Vec<Buyer>>, (StatusCode, SimpleError)> {
    session.require(Permission::CreateBuyer)?;

    Ok(Json(state.buyer_repository.list_buyers().await))
}
