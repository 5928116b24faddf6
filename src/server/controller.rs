use super::open_api;
use crate::config::AppConfig;
use crate::modules::{
    auth::middleware::{USERNAME_HEADER, USER_ID_HEADER, USER_PROFILE_HEADER},
    buyer::{
        self,
        repository::{new_buyer_repository, BuyerRepository},
    },
    plate,
    vehicle::{
        self,
        repository::new_vehicle_repository,
        service::{new_vehicle_service, VehicleService},
        validation::FormRules,
    },
};
use axum::{routing::get, Router};
use http::{header, HeaderName, HeaderValue, Method, StatusCode};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub vehicle_service: VehicleService,
    pub buyer_repository: BuyerRepository,
}

/// Creates the main axum router/controller to be served over http
pub fn new(cfg: &AppConfig) -> Router {
    let rules = FormRules {
        plate_rule: cfg.plate_rule,
        price_locale: cfg.price_locale,
    };

    let buyer_repository = new_buyer_repository();

    let state = AppState {
        vehicle_service: new_vehicle_service(
            new_vehicle_repository(),
            buyer_repository.clone(),
            rules,
        ),
        buyer_repository,
    };

    let allowed_origins = vec![HeaderValue::from_static("http://localhost:5173")];

    let cors = CorsLayer::new()
        .allow_methods([
            Method::POST,
            Method::GET,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_credentials(true)
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(USER_ID_HEADER),
            HeaderName::from_static(USERNAME_HEADER),
            HeaderName::from_static(USER_PROFILE_HEADER),
        ]);

    Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(open_api::create_openapi_router())
        .nest("/plate", plate::routes::create_router())
        .nest("/vehicle", vehicle::routes::create_router())
        .nest("/buyer", buyer::routes::create_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    tag = "meta",
    path = "/healthcheck",
    responses((status = OK)),
)]
pub async fn healthcheck() -> StatusCode {
    StatusCode::OK
}
