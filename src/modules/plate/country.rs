use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Countries with a known plate catalogue.
///
/// The declaration order is the order plates are identified in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Country {
    Portugal,
    France,
    Spain,
}

/// Order in which city descriptions are matched against keywords, note that
/// this differs from the plate identification order.
const CITY_INFERENCE_ORDER: [Country; 3] = [Country::Portugal, Country::Spain, Country::France];

impl Country {
    /// Upper-cased keywords that, when contained in a city description,
    /// place the city in this country.
    pub fn city_keywords(&self) -> &'static [&'static str] {
        match self {
            Country::Portugal => &["LISBOA", "PORTO", "PORTUGAL"],
            Country::Spain => &["MADRID", "BARCELONA", "SEVILHA", "VALENCIA", "ESPANHA"],
            Country::France => &["PARIS", "MARSELHA", "LYON", "FRANCA", "FRANÇA"],
        }
    }

    pub fn adjective(&self) -> &'static str {
        match self {
            Country::Portugal => "Portuguese",
            Country::France => "French",
            Country::Spain => "Spanish",
        }
    }

    /// Infers the country of a city from its free text description.
    ///
    /// this is a plain substring match, so any description containing `porto`
    /// is considered portuguese, returns `None` if no keyword matches.
    pub fn from_city(description: &str) -> Option<Country> {
        let upper = description.trim().to_uppercase();

        if upper.is_empty() {
            return None;
        }

        CITY_INFERENCE_ORDER
            .into_iter()
            .find(|country| country.city_keywords().iter().any(|k| upper.contains(*k)))
    }
}

/// The outcome of identifying the country of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, ToSchema)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlateCountry {
    Portugal,
    France,
    Spain,
    /// the plate matches no format in the catalogue
    Unrecognized,
    /// the plate is empty
    Invalid,
}

impl PlateCountry {
    pub fn country(&self) -> Option<Country> {
        match self {
            PlateCountry::Portugal => Some(Country::Portugal),
            PlateCountry::France => Some(Country::France),
            PlateCountry::Spain => Some(Country::Spain),
            PlateCountry::Unrecognized | PlateCountry::Invalid => None,
        }
    }
}

impl From<Country> for PlateCountry {
    fn from(country: Country) -> Self {
        match country {
            Country::Portugal => PlateCountry::Portugal,
            Country::France => PlateCountry::France,
            Country::Spain => PlateCountry::Spain,
        }
    }
}
