use crate::modules::{auth::middleware::USER_ID_HEADER, buyer, common, plate, vehicle};
use crate::server::controller;
use axum::{routing::get, Json, Router};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::openapi::{InfoBuilder, OpenApi as OpenApiDocument};
use utoipa::{openapi::OpenApiBuilder, Modify, OpenApi};

/// the session is read from headers set by the authenticating gateway
struct SessionHeaders;

impl Modify for SessionHeaders {
    fn modify(&self, openapi: &mut OpenApiDocument) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(USER_ID_HEADER))),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionHeaders),
    components(schemas(
        common::responses::SimpleError,
        plate::country::Country,
        plate::country::PlateCountry,
        plate::classifier::PlateInfo,
        plate::stats::PlateStats,
        plate::dto::PlateCheckDto,
        plate::dto::PlateFormatDto,
        plate::dto::PlateFormatsDto,
        plate::dto::ClassifyPlatesDto,
        plate::dto::ClassifiedPlatesDto,
        vehicle::form::StateRef,
        vehicle::form::CityRef,
        vehicle::form::BuyerRef,
        vehicle::form::RawVehicleForm,
        vehicle::record::VehicleRecord,
        vehicle::dto::ValidationResultDto,
        buyer::dto::CreateBuyerDto,
        buyer::dto::Buyer,
    )),
    paths(
        controller::healthcheck,
        plate::routes::get_plate_info,
        plate::routes::list_plate_formats,
        plate::routes::classify_plates,
        vehicle::routes::validate_vehicle_form,
        vehicle::routes::create_vehicle,
        vehicle::routes::list_vehicles,
        vehicle::routes::get_plate_stats,
        vehicle::routes::get_vehicle,
        vehicle::routes::update_vehicle,
        vehicle::routes::delete_vehicle,
        buyer::routes::create_buyer,
        buyer::routes::list_buyers,
    )
)]
struct ApiDoc;

/// the api document, with the crate version
pub fn api_doc() -> OpenApiDocument {
    let builder: OpenApiBuilder = ApiDoc::openapi().into();

    let info = InfoBuilder::new()
        .title("Fleet Sales API")
        .description(Some(
            "Vehicle sales registry with plate validation for Portugal, France and Spain.",
        ))
        .version(env!("CARGO_PKG_VERSION"))
        .build();

    builder.info(info).build()
}

pub fn create_openapi_router() -> Router<controller::AppState> {
    Router::new().route("/docs/openapi.json", get(|| async { Json(api_doc()) }))
}
