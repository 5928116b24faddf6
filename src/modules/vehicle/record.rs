use super::form::VehicleFormInput;
use super::price::parse_price;
use super::validation::{validate_vehicle_form, FormRules, ValidationReport};
use crate::modules::plate::classifier::normalize;
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// A vehicle as persisted, one row per vehicle.
///
/// the plate is always stored normalized (trimmed and upper-cased)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// `0` until the vehicle is stored
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub plate: String,
    pub state_id: i32,

    /// description of the state when the vehicle was saved
    pub state: String,
    pub price: f64,
    pub city_id: i32,

    /// description of the city when the vehicle was saved
    pub city: String,
    pub responsible_id: Option<i32>,
    pub buyer_id: Option<i32>,
    pub sale_date: Option<NaiveDate>,
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn invalid(violation: &str) -> ValidationReport {
    ValidationReport {
        violations: vec![violation.to_string()],
        plate_guidance: None,
    }
}

impl VehicleRecord {
    /// Validates the form and builds the record to persist from it.
    ///
    /// returns the validation report if the form is not valid
    pub fn from_form(
        form: &VehicleFormInput,
        rules: &FormRules,
    ) -> Result<VehicleRecord, ValidationReport> {
        let report = validate_vehicle_form(form, rules);

        if !report.is_valid() {
            return Err(report);
        }

        // a valid form has every required value, this only guards against
        // rules and record drifting apart
        let (Some(brand), Some(model), Some(plate), Some(price), Some(state), Some(city)) = (
            required(&form.brand),
            required(&form.model),
            required(&form.plate),
            form.price.as_deref(),
            form.state.as_ref(),
            form.city.as_ref(),
        ) else {
            return Err(invalid("form is missing required values"));
        };

        let price =
            parse_price(price, rules.price_locale).map_err(|_| invalid("price must be a valid number"))?;

        Ok(VehicleRecord {
            id: 0,
            brand,
            model,
            plate: normalize(&plate),
            state_id: state.id,
            state: state.description.clone(),
            price,
            city_id: city.id,
            city: city.description.clone(),
            responsible_id: form.responsible_id.filter(|id| *id > 0),
            buyer_id: form.buyer.as_ref().map(|b| b.id).filter(|id| *id > 0),
            sale_date: form.sale_date,
        })
    }
}
