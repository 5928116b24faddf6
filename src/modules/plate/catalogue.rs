use super::country::Country;
use crate::modules::common::validators::{
    REGEX_ES_CURRENT_PLATE, REGEX_ES_OLD_PLATE, REGEX_FR_CURRENT_PLATE, REGEX_FR_OLD_PLATE,
    REGEX_PT_CURRENT_PLATE, REGEX_PT_OLD_PLATE, REGEX_PT_VERY_OLD_PLATE,
};
use lazy_static::lazy_static;
use regex::Regex;

/// A plate format accepted for a country
pub struct PlateFormat {
    pub country: Country,

    /// human readable name of the format, eg: `current (since 2009)`
    pub name: &'static str,

    /// the format shape, where `A` is a letter and `0` a digit
    pub shape: &'static str,

    /// sample plates in this format
    pub examples: &'static [&'static str],

    pub regex: &'static Regex,
}

impl PlateFormat {
    /// checks a already normalized plate against this format
    pub fn matches(&self, normalized_plate: &str) -> bool {
        self.regex.is_match(normalized_plate)
    }
}

lazy_static! {
    /// Every accepted plate format, grouped by country in identification order
    /// (Portugal, France, Spain) and ordered within each country.
    pub static ref PLATE_FORMATS: Vec<PlateFormat> = vec![
        PlateFormat {
            country: Country::Portugal,
            name: "current",
            shape: "AA-00-AA",
            examples: &["AB-12-CD"],
            regex: &REGEX_PT_CURRENT_PLATE,
        },
        PlateFormat {
            country: Country::Portugal,
            name: "old",
            shape: "00-AA-00",
            examples: &["12-AB-34"],
            regex: &REGEX_PT_OLD_PLATE,
        },
        PlateFormat {
            country: Country::Portugal,
            name: "very old",
            shape: "AA-0000",
            examples: &["AB-1234"],
            regex: &REGEX_PT_VERY_OLD_PLATE,
        },
        PlateFormat {
            country: Country::France,
            name: "current (since 2009)",
            shape: "AA-000-AA",
            examples: &["AB-123-CD"],
            regex: &REGEX_FR_CURRENT_PLATE,
        },
        PlateFormat {
            country: Country::France,
            name: "old (until 2009)",
            shape: "0000 AAA 00",
            examples: &["1234 ABC 12"],
            regex: &REGEX_FR_OLD_PLATE,
        },
        PlateFormat {
            country: Country::Spain,
            name: "current (since 2000)",
            shape: "0000 AAA or 0000-AAA",
            examples: &["1234 ABC", "1234-FGH"],
            regex: &REGEX_ES_CURRENT_PLATE,
        },
        PlateFormat {
            country: Country::Spain,
            name: "old (until 2000)",
            shape: "A 0000 AA or A-0000-AA",
            examples: &["B 1234 CD", "GR-5678-C"],
            regex: &REGEX_ES_OLD_PLATE,
        },
    ];
}

/// formats accepted for a single country, in catalogue order
pub fn formats_for(country: Country) -> impl Iterator<Item = &'static PlateFormat> {
    PLATE_FORMATS.iter().filter(move |f| f.country == country)
}
