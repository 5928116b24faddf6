use super::catalogue::PlateFormat;
use super::classifier::PlateInfo;
use super::country::{Country, PlateCountry};
use super::stats::PlateStats;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, IntoParams, Validate, Debug)]
#[into_params(parameter_in = Query)]
pub struct PlateInfoQuery {
    /// The plate to classify, eg: `ab-12-cd`
    #[validate(length(max = 50))]
    pub plate: String,

    /// Description of the city the plate should belong to, eg: `Lisboa`
    #[validate(length(max = 100))]
    pub city: Option<String>,
}

#[derive(Deserialize, IntoParams, Validate, Debug)]
#[into_params(parameter_in = Query)]
pub struct FormatsQuery {
    /// Description of the city, all formats are listed if absent or unrecognized
    #[validate(length(max = 100))]
    pub city: Option<String>,
}

#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlateCheckDto {
    #[schema(example = "ab-12-cd")]
    pub plate: String,

    #[schema(example = "AB-12-CD")]
    pub normalized: String,

    pub country: PlateCountry,

    /// if the plate matches any known format
    pub valid: bool,

    /// the country inferred from the city, if a recognized city was given
    pub city_country: Option<Country>,

    /// if the plate matches a format of the city's country, absent if no city was given
    pub valid_for_city: Option<bool>,

    /// accepted formats, absent if the plate is valid
    pub guidance: Option<String>,
}

#[derive(Serialize, ToSchema, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlateFormatDto {
    pub country: Country,

    #[schema(example = "current")]
    pub name: String,

    #[schema(example = "AA-00-AA")]
    pub shape: String,

    pub examples: Vec<String>,
}

impl From<&PlateFormat> for PlateFormatDto {
    fn from(f: &PlateFormat) -> Self {
        PlateFormatDto {
            country: f.country,
            name: f.name.to_string(),
            shape: f.shape.to_string(),
            examples: f.examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlateFormatsDto {
    /// the country inferred from the city, absent if unknown
    pub country: Option<Country>,

    pub formats: Vec<PlateFormatDto>,

    /// the formats as a human readable text
    pub guidance: String,
}

/// At most 500 plates are classified per request
#[derive(Deserialize, ToSchema, Validate, Debug)]
pub struct ClassifyPlatesDto {
    #[validate(length(min = 1, max = 500))]
    #[schema(example = json!(["AB-12-CD", "1234-FGH"]))]
    pub plates: Vec<String>,
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ClassifiedPlatesDto {
    /// one entry per plate, in the order they were sent
    pub results: Vec<PlateInfo>,

    pub stats: PlateStats,
}
