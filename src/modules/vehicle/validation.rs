use super::form::{RawVehicleForm, VehicleFormInput};
use super::price::{parse_price, PriceLocale};
use crate::modules::plate::{classifier::is_valid_for_country, guidance::format_guidance};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

/// description of the state that marks a vehicle as sold
pub static SOLD_STATE: &str = "Vendido";

/// legacy bounds for the trimmed plate length
pub const PLATE_MIN_LENGTH: usize = 6;
pub const PLATE_MAX_LENGTH: usize = 10;

/// How the plate of a vehicle form is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PlateRule {
    /// the plate must match a format of the selected city's country
    #[serde(rename = "country")]
    CountryFormat,

    /// the trimmed plate must be between `PLATE_MIN_LENGTH` and `PLATE_MAX_LENGTH` chars long,
    /// this accepts plates no country issues and is kept for existing records only
    #[serde(rename = "length")]
    LengthBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub plate_rule: PlateRule,
    pub price_locale: PriceLocale,
}

impl Default for FormRules {
    fn default() -> Self {
        FormRules {
            plate_rule: PlateRule::CountryFormat,
            price_locale: PriceLocale::European,
        }
    }
}

/// Violations found on a vehicle form, in the order the rules were checked
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub violations: Vec<String>,

    /// formats accepted for the selected city, set when the plate does not match them
    pub plate_guidance: Option<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    fn push(&mut self, violation: impl Into<String>) {
        self.violations.push(violation.into());
    }

    /// Joins every violation in a single bulleted message, one per line
    pub fn to_message(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("• {}", v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or_default().is_empty()
}

fn check_required_fields(report: &mut ValidationReport, form: &VehicleFormInput) {
    if is_blank(&form.brand) {
        report.push("brand is required");
    }
    if is_blank(&form.model) {
        report.push("model is required");
    }
    if is_blank(&form.plate) {
        report.push("plate is required");
    }
    if is_blank(&form.price) {
        report.push("price is required");
    }
    if form.state.is_none() {
        report.push("state is required");
    }
    if form.city.is_none() {
        report.push("city is required");
    }
}

fn check_price(report: &mut ValidationReport, form: &VehicleFormInput, locale: PriceLocale) {
    let Some(text) = form.price.as_deref().filter(|p| !p.trim().is_empty()) else {
        return;
    };

    match parse_price(text, locale) {
        Ok(price) if price.is_infinite() || price.is_nan() => {
            report.push("price must be a valid number")
        }
        Ok(price) if price < 0.0 => report.push("price must be a positive value"),
        Ok(_) => {}
        Err(_) => report.push("price must be a valid number"),
    }
}

/// if the selected state is the sold state, ignoring case
pub fn is_sold_state(description: &str) -> bool {
    description.eq_ignore_ascii_case(SOLD_STATE)
}

fn check_sale_state(report: &mut ValidationReport, form: &VehicleFormInput) {
    let Some(state) = &form.state else {
        return;
    };

    if is_sold_state(&state.description) {
        if form.sale_date.is_none() {
            report.push(format!("sale date is required when state is '{}'", SOLD_STATE));
        }
        if form.buyer.is_none() {
            report.push(format!("a buyer must be selected when state is '{}'", SOLD_STATE));
        }
    } else {
        if form.sale_date.is_some() {
            report.push(format!("sale date must only be set when state is '{}'", SOLD_STATE));
        }
        if form.buyer.is_some() {
            report.push(format!("a buyer may only be selected when state is '{}'", SOLD_STATE));
        }
    }
}

fn check_plate(report: &mut ValidationReport, form: &VehicleFormInput, rule: PlateRule) {
    let Some(plate) = form.plate.as_deref().map(str::trim).filter(|p| !p.is_empty()) else {
        return;
    };

    match rule {
        PlateRule::LengthBounds => {
            let len = plate.chars().count();

            if !(PLATE_MIN_LENGTH..=PLATE_MAX_LENGTH).contains(&len) {
                report.push(format!(
                    "invalid plate format (must have between {} and {} characters)",
                    PLATE_MIN_LENGTH, PLATE_MAX_LENGTH
                ));
            }
        }
        PlateRule::CountryFormat => {
            // a missing city was already reported as a required field
            let Some(city) = &form.city else {
                return;
            };

            if !is_valid_for_country(plate, Some(&city.description)) {
                report.push(format!(
                    "plate '{}' does not match the formats accepted for city '{}'",
                    plate, city.description
                ));
                report.plate_guidance = Some(format_guidance(Some(&city.description)));
            }
        }
    }
}

/// Validates a vehicle form, every rule is checked so the report lists all
/// the problems at once.
pub fn validate_vehicle_form(form: &VehicleFormInput, rules: &FormRules) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_required_fields(&mut report, form);
    check_price(&mut report, form, rules.price_locale);
    check_sale_state(&mut report, form);
    check_plate(&mut report, form, rules.plate_rule);

    report
}

/// Extracts and validates a submitted form, this never fails: if the form values
/// cannot be extracted the report holds a single violation describing why.
pub fn validate_submission(raw: &RawVehicleForm, rules: &FormRules) -> ValidationReport {
    match raw.extract() {
        Ok(form) => validate_vehicle_form(&form, rules),
        Err(e) => {
            warn!(error = %e, "failed to extract vehicle form");

            ValidationReport {
                violations: vec![format!("internal error while validating form: {:#}", e)],
                plate_guidance: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::vehicle::form::{BuyerRef, CityRef, StateRef};
    use chrono::NaiveDate;

    fn state(description: &str) -> Option<StateRef> {
        Some(StateRef {
            id: 1,
            description: description.to_string(),
        })
    }

    fn city(description: &str) -> Option<CityRef> {
        Some(CityRef {
            id: 1,
            description: description.to_string(),
        })
    }

    fn buyer() -> Option<BuyerRef> {
        Some(BuyerRef {
            id: 3,
            name: String::from("Maria Silva"),
        })
    }

    fn available_vehicle() -> VehicleFormInput {
        VehicleFormInput {
            brand: Some(String::from("Renault")),
            model: Some(String::from("Clio")),
            plate: Some(String::from("AB-12-CD")),
            price: Some(String::from("12.500,00")),
            state: state("Disponível"),
            city: city("Lisboa"),
            buyer: None,
            responsible_id: Some(1),
            sale_date: None,
        }
    }

    fn sold_vehicle() -> VehicleFormInput {
        VehicleFormInput {
            state: state("Vendido"),
            buyer: buyer(),
            sale_date: NaiveDate::from_ymd_opt(2024, 5, 2),
            ..available_vehicle()
        }
    }

    fn validate(form: &VehicleFormInput) -> ValidationReport {
        validate_vehicle_form(form, &FormRules::default())
    }

    #[test]
    fn complete_forms_are_valid() {
        assert!(validate(&available_vehicle()).is_valid());
        assert!(validate(&sold_vehicle()).is_valid());
    }

    #[test]
    fn sold_without_buyer_or_date_yields_two_violations() {
        let form = VehicleFormInput {
            state: state("Vendido"),
            ..available_vehicle()
        };

        let report = validate(&form);

        assert!(!report.is_valid());
        assert_eq!(
            report.violations,
            vec![
                "sale date is required when state is 'Vendido'",
                "a buyer must be selected when state is 'Vendido'",
            ]
        );
    }

    #[test]
    fn sold_state_is_matched_ignoring_case() {
        let form = VehicleFormInput {
            state: state("VENDIDO"),
            ..sold_vehicle()
        };

        assert!(validate(&form).is_valid());
    }

    #[test]
    fn buyer_on_unsold_vehicle_yields_one_violation() {
        let form = VehicleFormInput {
            buyer: buyer(),
            ..available_vehicle()
        };

        let report = validate(&form);

        assert!(!report.is_valid());
        assert_eq!(
            report.violations,
            vec!["a buyer may only be selected when state is 'Vendido'"]
        );
    }

    #[test]
    fn sale_date_on_unsold_vehicle_is_a_violation() {
        let form = VehicleFormInput {
            sale_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..available_vehicle()
        };

        assert_eq!(
            validate(&form).violations,
            vec!["sale date must only be set when state is 'Vendido'"]
        );
    }

    #[test]
    fn every_missing_field_is_reported_in_order() {
        let form = VehicleFormInput {
            brand: Some(String::from("  ")),
            ..VehicleFormInput::default()
        };

        assert_eq!(
            validate(&form).violations,
            vec![
                "brand is required",
                "model is required",
                "plate is required",
                "price is required",
                "state is required",
                "city is required",
            ]
        );
    }

    #[test]
    fn unparsable_price_is_reported_once() {
        let form = VehicleFormInput {
            price: Some(String::from("twelve")),
            ..available_vehicle()
        };

        assert_eq!(validate(&form).violations, vec!["price must be a valid number"]);
    }

    #[test]
    fn negative_price_is_reported() {
        let form = VehicleFormInput {
            price: Some(String::from("-1,50")),
            ..available_vehicle()
        };

        assert_eq!(validate(&form).violations, vec!["price must be a positive value"]);
    }

    #[test]
    fn overflowing_price_is_not_a_valid_number() {
        let form = VehicleFormInput {
            price: Some("9".repeat(400)),
            ..available_vehicle()
        };

        assert_eq!(validate(&form).violations, vec!["price must be a valid number"]);
    }

    #[test]
    fn zero_price_is_accepted() {
        let form = VehicleFormInput {
            price: Some(String::from("0")),
            ..available_vehicle()
        };

        assert!(validate(&form).is_valid());
    }

    #[test]
    fn plate_must_match_the_city_country() {
        let form = VehicleFormInput {
            plate: Some(String::from("1234-FGH")),
            ..available_vehicle()
        };

        let report = validate(&form);

        assert_eq!(
            report.violations,
            vec!["plate '1234-FGH' does not match the formats accepted for city 'Lisboa'"]
        );
        assert!(report
            .plate_guidance
            .unwrap()
            .starts_with("Valid Portuguese plate formats"));
    }

    #[test]
    fn unknown_city_country_rejects_any_plate() {
        let form = VehicleFormInput {
            plate: Some(String::from("XX-99-XX")),
            city: city("Berlin"),
            ..available_vehicle()
        };

        let report = validate(&form);

        assert_eq!(report.violations.len(), 1);
        assert!(report.plate_guidance.unwrap().contains("=== FRANCE ==="));
    }

    #[test]
    fn country_check_is_skipped_without_city() {
        let form = VehicleFormInput {
            city: None,
            ..available_vehicle()
        };

        assert_eq!(validate(&form).violations, vec!["city is required"]);
    }

    #[test]
    fn length_rule_only_checks_bounds() {
        let rules = FormRules {
            plate_rule: PlateRule::LengthBounds,
            ..FormRules::default()
        };

        let form = VehicleFormInput {
            plate: Some(String::from(" ZZZZZZ ")),
            city: city("Berlin"),
            ..available_vehicle()
        };
        assert!(validate_vehicle_form(&form, &rules).is_valid());

        let form = VehicleFormInput {
            plate: Some(String::from("AB-1")),
            ..available_vehicle()
        };
        assert_eq!(
            validate_vehicle_form(&form, &rules).violations,
            vec!["invalid plate format (must have between 6 and 10 characters)"]
        );
    }

    #[test]
    fn violations_keep_rule_order() {
        let form = VehicleFormInput {
            brand: None,
            price: Some(String::from("abc")),
            buyer: buyer(),
            plate: Some(String::from("1234-FGH")),
            ..available_vehicle()
        };

        let report = validate(&form);

        assert_eq!(report.violations.len(), 4);
        assert_eq!(report.violations[0], "brand is required");
        assert_eq!(report.violations[1], "price must be a valid number");
        assert!(report.violations[2].starts_with("a buyer may only"));
        assert!(report.violations[3].starts_with("plate '1234-FGH'"));
    }

    #[test]
    fn message_is_a_bulleted_list() {
        let report = ValidationReport {
            violations: vec![String::from("brand is required"), String::from("city is required")],
            plate_guidance: None,
        };

        assert_eq!(report.to_message(), "• brand is required\n• city is required");
    }

    #[test]
    fn extraction_failures_become_a_single_violation() {
        let raw = RawVehicleForm {
            sale_date: Some(String::from("yesterday")),
            ..RawVehicleForm::default()
        };

        let report = validate_submission(&raw, &FormRules::default());

        assert_eq!(
            report.violations,
            vec!["internal error while validating form: unreadable sale date 'yesterday'"]
        );
    }

    #[test]
    fn submission_validates_extracted_values() {
        let raw = RawVehicleForm {
            brand: Some(String::from("Seat")),
            model: Some(String::from("Ibiza")),
            plate: Some(String::from("1234 fgh")),
            price: Some(String::from("8 000")),
            state: state("Vendido"),
            city: city("Madrid"),
            buyer: buyer(),
            responsible_id: None,
            sale_date: Some(String::from("02/05/2024")),
        };

        assert!(validate_submission(&raw, &FormRules::default()).is_valid());
    }
}
