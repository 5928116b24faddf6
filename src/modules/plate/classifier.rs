use super::catalogue::{formats_for, PLATE_FORMATS};
use super::country::{Country, PlateCountry};
use super::guidance::all_formats_guidance;
use serde::Serialize;
use strum::IntoEnumIterator;
use utoipa::ToSchema;

/// Normalizes a plate to the form it is matched and stored in: trimmed and upper-cased.
pub fn normalize(plate: &str) -> String {
    plate.trim().to_uppercase()
}

fn normalize_non_blank(plate: &str) -> Option<String> {
    let normalized = normalize(plate);

    if normalized.is_empty() {
        return None;
    }

    Some(normalized)
}

fn matches_country(normalized_plate: &str, country: Country) -> bool {
    formats_for(country).any(|f| f.matches(normalized_plate))
}

/// Checks the plate against every format of every country, regardless of where
/// the vehicle is registered.
pub fn is_valid_generic(plate: &str) -> bool {
    match normalize_non_blank(plate) {
        Some(normalized) => PLATE_FORMATS.iter().any(|f| f.matches(&normalized)),
        None => false,
    }
}

/// Checks the plate against the formats of the country the city belongs to.
///
/// fails closed: a blank plate, a missing city or a city whose country cannot
/// be inferred are all invalid.
pub fn is_valid_for_country(plate: &str, city_description: Option<&str>) -> bool {
    let Some(normalized) = normalize_non_blank(plate) else {
        return false;
    };

    match city_description.and_then(Country::from_city) {
        Some(country) => matches_country(&normalized, country),
        None => false,
    }
}

/// Identifies the country of a plate by its format.
///
/// countries are checked in a fixed order (Portugal, France, Spain) and the
/// first match wins, ambiguous plates are not detected.
pub fn identify_country(plate: &str) -> PlateCountry {
    let Some(normalized) = normalize_non_blank(plate) else {
        return PlateCountry::Invalid;
    };

    Country::iter()
        .find(|country| matches_country(&normalized, *country))
        .map(PlateCountry::from)
        .unwrap_or(PlateCountry::Unrecognized)
}

/// Everything known about a single plate
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlateInfo {
    /// the plate as given
    pub plate: String,

    pub normalized: String,

    pub country: PlateCountry,

    /// if the plate matches any format of any country
    pub valid: bool,

    /// the accepted formats, only present if the plate is not valid
    pub guidance: Option<String>,
}

pub fn plate_info(plate: &str) -> PlateInfo {
    let valid = is_valid_generic(plate);

    PlateInfo {
        plate: plate.to_string(),
        normalized: normalize(plate),
        country: identify_country(plate),
        valid,
        guidance: (!valid).then(all_formats_guidance),
    }
}
