use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Date formats accepted for the sale date, in the order they are tried
const SALE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// A vehicle state selected on the form, eg: `Disponível` or `Vendido`
#[derive(Deserialize, Serialize, ToSchema, Clone, Debug, PartialEq)]
pub struct StateRef {
    pub id: i32,
    pub description: String,
}

/// A city selected on the form, the description is used to infer its country
#[derive(Deserialize, Serialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CityRef {
    pub id: i32,
    pub description: String,
}

#[derive(Deserialize, Serialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BuyerRef {
    pub id: i32,
    pub name: String,
}

/// A vehicle insert or edit form as submitted, every field is optional
/// since validating their presence is part of validating the form.
#[derive(Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawVehicleForm {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub plate: Option<String>,

    /// the price as typed, eg: `12.500,50`
    pub price: Option<String>,

    pub state: Option<StateRef>,
    pub city: Option<CityRef>,
    pub buyer: Option<BuyerRef>,

    /// the user responsible for the vehicle
    pub responsible_id: Option<i32>,

    /// `YYYY-MM-DD` or `DD/MM/YYYY`, blank means no date
    pub sale_date: Option<String>,
}

/// The values extracted from a [`RawVehicleForm`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleFormInput {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub plate: Option<String>,
    pub price: Option<String>,
    pub state: Option<StateRef>,
    pub city: Option<CityRef>,
    pub buyer: Option<BuyerRef>,
    pub responsible_id: Option<i32>,
    pub sale_date: Option<NaiveDate>,
}

fn parse_sale_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();

    SALE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .with_context(|| format!("unreadable sale date '{}'", trimmed))
}

impl RawVehicleForm {
    /// Extracts the typed form values, failing if the sale date cannot be read.
    pub fn extract(&self) -> Result<VehicleFormInput> {
        let sale_date = match self.sale_date.as_deref() {
            Some(text) if !text.trim().is_empty() => Some(parse_sale_date(text)?),
            _ => None,
        };

        Ok(VehicleFormInput {
            brand: self.brand.clone(),
            model: self.model.clone(),
            plate: self.plate.clone(),
            price: self.price.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            buyer: self.buyer.clone(),
            responsible_id: self.responsible_id,
            sale_date,
        })
    }
}
