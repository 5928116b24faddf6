use super::classifier::identify_country;
use super::country::PlateCountry;
use serde::Serialize;
use utoipa::ToSchema;

/// Amount of plates per identified country
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlateStats {
    pub total: u64,
    pub portugal: u64,
    pub france: u64,
    pub spain: u64,

    /// plates that are empty or match no known format
    pub invalid: u64,
}

impl PlateStats {
    pub fn record(&mut self, country: PlateCountry) {
        self.total += 1;

        match country {
            PlateCountry::Portugal => self.portugal += 1,
            PlateCountry::France => self.france += 1,
            PlateCountry::Spain => self.spain += 1,
            PlateCountry::Unrecognized | PlateCountry::Invalid => self.invalid += 1,
        }
    }

    pub fn from_plates<'a, I>(plates: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        plates.into_iter().map(identify_country).collect()
    }
}

impl FromIterator<PlateCountry> for PlateStats {
    fn from_iter<T: IntoIterator<Item = PlateCountry>>(iter: T) -> Self {
        let mut stats = PlateStats::default();

        for country in iter {
            stats.record(country);
        }

        stats
    }
}
