use serde::{Deserialize, Serialize};

/// Per-day and per-month figures derived from verified nutrition data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedCost {
    /// Rounded to one decimal for display.
    pub daily_amount_grams: f64,
    pub price_per_kg: u64,
    pub daily_cost: u64,
    pub monthly_cost: u64,
}

/// A product the user placed on a comparison list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonItem {
    pub id: String,
    pub product_link: String,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub image_url: Option<String>,
    /// Lowest price seen at search time.
    pub low_price: Option<u64>,

    // User-verified values.
    pub protein_percent: Option<f64>,
    pub fat_percent: Option<f64>,
    pub kcal_per_100g: Option<f64>,
    pub price: Option<u64>,
    pub weight_kg: Option<f64>,

    /// Filled on read when an energy target is supplied and data suffices.
    pub derived: Option<DerivedCost>,
}

impl ComparisonItem {
    /// Verified price when present, else the search-time price.
    pub fn effective_price(&self) -> u64 {
        self.price.or(self.low_price).unwrap_or(0)
    }

    pub fn display_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or(&self.product_link)
    }

    /// Overwrite only the fields present in `update`.
    pub fn apply(&mut self, update: &ComparisonUpdate) {
        if let Some(v) = update.protein_percent {
            self.protein_percent = Some(v);
        }
        if let Some(v) = update.fat_percent {
            self.fat_percent = Some(v);
        }
        if let Some(v) = update.kcal_per_100g {
            self.kcal_per_100g = Some(v);
        }
        if let Some(v) = update.price {
            self.price = Some(v);
        }
        if let Some(v) = update.weight_kg {
            self.weight_kg = Some(v);
        }
    }
}

/// Listing-time fields used to add a product to a basket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonCandidate {
    pub product_link: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub low_price: Option<u64>,
}

/// Partial update of user-verified values; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonUpdate {
    #[serde(default)]
    pub protein_percent: Option<f64>,
    #[serde(default)]
    pub fat_percent: Option<f64>,
    #[serde(default)]
    pub kcal_per_100g: Option<f64>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl ComparisonUpdate {
    pub fn is_empty(&self) -> bool {
        self.protein_percent.is_none()
            && self.fat_percent.is_none()
            && self.kcal_per_100g.is_none()
            && self.price.is_none()
            && self.weight_kg.is_none()
    }
}
