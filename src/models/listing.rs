use serde::{Deserialize, Serialize};

use super::food::FoodType;

/// A product listing as returned by the shopping search provider.
///
/// Every field is untrusted third-party text; prices arrive as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default, rename = "lprice")]
    pub low_price: Option<String>,

    #[serde(default, rename = "hprice")]
    pub high_price: Option<String>,

    #[serde(default)]
    pub mall_name: Option<String>,

    #[serde(default)]
    pub product_id: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub maker: Option<String>,

    #[serde(default)]
    pub category1: Option<String>,

    #[serde(default)]
    pub category2: Option<String>,
}

/// Envelope of a shopping search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: Option<u64>,

    #[serde(default)]
    pub items: Vec<RawListing>,
}

/// A parsed listing with structured estimates.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedListing {
    pub title: String,
    pub link: Option<String>,
    pub image: Option<String>,
    pub brand: Option<String>,
    pub low_price: u64,
    pub food_type: FoodType,
    pub weight_kg: f64,
    /// Per-type default, used only for ranking estimates.
    pub kcal_per_100g: f64,
    pub price_per_kg: u64,
}
