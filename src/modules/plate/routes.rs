use super::catalogue::{formats_for, PLATE_FORMATS};
use super::classifier::{is_valid_for_country, plate_info};
use super::country::Country;
use super::dto::{
    ClassifiedPlatesDto, ClassifyPlatesDto, FormatsQuery, PlateCheckDto, PlateFormatDto,
    PlateFormatsDto, PlateInfoQuery,
};
use super::guidance::format_guidance;
use super::stats::PlateStats;
use crate::{
    modules::common::{
        extractors::{ValidatedJson, ValidatedQuery},
        responses::SimpleError,
    },
    server::controller::AppState,
};
use axum::{
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/info", get(get_plate_info))
        .route("/formats", get(list_plate_formats))
        .route("/classify", post(classify_plates))
}

/// Classifies a plate, optionally checking it against the formats of a city's country
#[utoipa::path(
    get,
    path = "/plate/info",
    tag = "plate",
    params(PlateInfoQuery),
    responses(
        (
            status = OK,
            description = "the plate classification",
            body = PlateCheckDto,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid query",
            body = SimpleError,
        ),
    ),
)]
pub async fn get_plate_info(
    ValidatedQuery(query): ValidatedQuery<PlateInfoQuery>,
) -> Result<Json<PlateCheckDto>, (StatusCode, SimpleError)> {
    let info = plate_info(&query.plate);
    let city = query.city.as_deref().filter(|c| !c.trim().is_empty());

    let valid_for_city = city.map(|c| is_valid_for_country(&query.plate, Some(c)));

    let guidance = match (city, valid_for_city) {
        (Some(c), Some(false)) => Some(format_guidance(Some(c))),
        _ => info.guidance,
    };

    Ok(Json(PlateCheckDto {
        plate: info.plate,
        normalized: info.normalized,
        country: info.country,
        valid: info.valid,
        city_country: city.and_then(Country::from_city),
        valid_for_city,
        guidance,
    }))
}

/// Lists the plate formats accepted for a city, or every format if the city is unknown
#[utoipa::path(
    get,
    path = "/plate/formats",
    tag = "plate",
    params(FormatsQuery),
    responses(
        (
            status = OK,
            description = "the accepted formats",
            body = PlateFormatsDto,
        ),
    ),
)]
pub async fn list_plate_formats(
    ValidatedQuery(query): ValidatedQuery<FormatsQuery>,
) -> Result<Json<PlateFormatsDto>, (StatusCode, SimpleError)> {
    let city = query.city.as_deref().filter(|c| !c.trim().is_empty());
    let country = city.and_then(Country::from_city);

    let formats = match country {
        Some(c) => formats_for(c).map(PlateFormatDto::from).collect(),
        None => PLATE_FORMATS.iter().map(PlateFormatDto::from).collect(),
    };

    Ok(Json(PlateFormatsDto {
        country,
        formats,
        guidance: format_guidance(city),
    }))
}

/// Classifies a batch of plates and counts them per country
#[utoipa::path(
    post,
    path = "/plate/classify",
    tag = "plate",
    request_body = ClassifyPlatesDto,
    responses(
        (
            status = OK,
            description = "the classification of every plate",
            body = ClassifiedPlatesDto,
        ),
        (
            status = BAD_REQUEST,
            description = "invalid dto error message",
            body = SimpleError,
        ),
    ),
)]
pub async fn classify_plates(
    ValidatedJson(dto): ValidatedJson<ClassifyPlatesDto>,
) -> Result<Json<ClassifiedPlatesDto>, (StatusCode, SimpleError)> {
    let results: Vec<_> = dto.plates.iter().map(|p| plate_info(p)).collect();
    let stats: PlateStats = results.iter().map(|r| r.country).collect();

    Ok(Json(ClassifiedPlatesDto { results, stats }))
}
