use super::dto::{Buyer, CreateBuyerDto};
use crate::modules::common::validators::{REGEX_EMAIL, REGEX_PHONE};
use crate::modules::vehicle::validation::ValidationReport;

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

/// Validates a buyer form in field order: full name, phone, email.
///
/// formats are only checked for values that are present
pub fn validate_buyer_form(form: &CreateBuyerDto) -> ValidationReport {
    let mut violations = vec![];

    if trimmed(&form.full_name).is_empty() {
        violations.push(String::from("full name is required"));
    }

    match trimmed(&form.phone) {
        "" => violations.push(String::from("phone is required")),
        phone if !REGEX_PHONE.is_match(phone) => violations.push(String::from(
            "phone must only contain digits and have at least 9 of them",
        )),
        _ => {}
    }

    match trimmed(&form.email) {
        "" => violations.push(String::from("email is required")),
        email if !REGEX_EMAIL.is_match(email) => {
            violations.push(String::from("email is not a valid address"))
        }
        _ => {}
    }

    ValidationReport {
        violations,
        plate_guidance: None,
    }
}

impl Buyer {
    /// Validates the form and builds the buyer to store from its trimmed values.
    pub fn from_form(form: &CreateBuyerDto) -> Result<Buyer, ValidationReport> {
        let report = validate_buyer_form(form);

        if !report.is_valid() {
            return Err(report);
        }

        Ok(Buyer {
            id: 0,
            full_name: trimmed(&form.full_name).to_string(),
            phone: trimmed(&form.phone).to_string(),
            email: trimmed(&form.email).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(full_name: &str, phone: &str, email: &str) -> CreateBuyerDto {
        CreateBuyerDto {
            full_name: Some(full_name.to_string()),
            phone: Some(phone.to_string()),
            email: Some(email.to_string()),
        }
    }

    #[test]
    fn builds_a_trimmed_buyer() {
        let buyer = Buyer::from_form(&form(" Joana Silva ", " 912345678", "joana@frota.pt ")).unwrap();

        assert_eq!(buyer.full_name, "Joana Silva");
        assert_eq!(buyer.phone, "912345678");
        assert_eq!(buyer.email, "joana@frota.pt");
    }

    #[test]
    fn reports_every_missing_field() {
        let report = validate_buyer_form(&CreateBuyerDto::default());

        assert_eq!(
            report.violations,
            vec!["full name is required", "phone is required", "email is required"]
        );
    }

    #[test]
    fn reports_malformed_phone_and_email() {
        let report = validate_buyer_form(&form("Joana", "91234-5678", "joana@frota"));

        assert_eq!(
            report.violations,
            vec![
                "phone must only contain digits and have at least 9 of them",
                "email is not a valid address"
            ]
        );
        assert!(report.plate_guidance.is_none());
    }

    #[test]
    fn short_phones_are_rejected() {
        let report = validate_buyer_form(&form("Joana", "91234567", "joana@frota.pt"));
        assert_eq!(report.violations.len(), 1);
    }
}
