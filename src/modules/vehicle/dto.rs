use super::validation::ValidationReport;
use crate::modules::plate::country::Country;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, IntoParams, Validate, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListVehiclesDto {
    /// Search by brand, ignoring case
    #[validate(length(max = 100))]
    pub brand: Option<String>,

    /// Search by model, ignoring case
    #[validate(length(max = 100))]
    pub model: Option<String>,

    /// Search by plate, ignoring case
    #[validate(length(max = 20))]
    pub plate: Option<String>,

    /// Only vehicles whose plate is identified as issued by this country
    pub country: Option<Country>,
}

/// Response of a vehicle form validation
#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResultDto {
    pub valid: bool,

    /// every violation as a single bulleted message, empty if valid
    pub message: String,

    pub violations: Vec<String>,

    pub plate_guidance: Option<String>,
}

impl From<ValidationReport> for ValidationResultDto {
    fn from(report: ValidationReport) -> Self {
        ValidationResultDto {
            valid: report.is_valid(),
            message: report.to_message(),
            violations: report.violations,
            plate_guidance: report.plate_guidance,
        }
    }
}
