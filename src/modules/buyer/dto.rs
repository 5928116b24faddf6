use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A buyer creation form as submitted, missing fields are reported as violations
#[derive(Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuyerDto {
    #[schema(example = "Joana Silva")]
    pub full_name: Option<String>,

    /// only digits, at least 9 of them
    #[schema(example = "912345678")]
    pub phone: Option<String>,

    #[schema(example = "joana.silva@frota.pt")]
    pub email: Option<String>,
}

/// A buyer as stored, every value is trimmed
#[derive(Serialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    /// `0` until the buyer is stored
    pub id: i32,
    pub full_name: String,
    pub phone: String,
    pub email: String,
}
