use serde::{Deserialize, Serialize};

use super::cat::LifeStage;
use super::food::FoodType;

/// A value whose provenance differs by recommendation mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Figure<T> {
    /// Taken from reference data the user can rely on.
    Verified(T),
    /// Heuristic estimate, good for ordering but not for display as fact.
    Estimated(T),
    /// Not available until the user supplies exact values.
    Unknown,
}

impl<T: Copy> Figure<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Figure::Verified(v) | Figure::Estimated(v) => Some(*v),
            Figure::Unknown => None,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Figure::Verified(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Figure::Unknown)
    }
}

/// One ranked product suggestion. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub rank: usize,
    pub food_name: String,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub food_type: FoodType,
    pub daily_amount_grams: Figure<f64>,
    pub daily_cost: Figure<u64>,
    pub monthly_cost: Figure<u64>,
    pub protein_percent: Figure<f64>,
    pub fat_percent: Figure<f64>,
    pub score: f64,
    pub reason: String,
    pub product_price: Option<u64>,
    pub product_link: Option<String>,
    pub image_url: Option<String>,
    pub from_real_search: bool,
    pub review_count: u32,
}

impl Recommendation {
    /// Monthly cost used for the by-price view; unknown sorts last.
    pub fn monthly_cost_key(&self) -> u64 {
        self.monthly_cost.value().unwrap_or(u64::MAX)
    }
}

/// Full answer to a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub daily_energy_target: f64,
    pub basal_energy: f64,
    pub life_stage_factor: f64,
    pub life_stage: LifeStage,
    pub stage_description: String,
    pub formula_trace: String,
    pub calculation_source: String,
    pub by_rank: Vec<Recommendation>,
    pub by_price: Vec<Recommendation>,
    pub by_review_count: Vec<Recommendation>,
    pub review_note: Option<String>,
    /// Explains an empty result; absent when there are recommendations.
    pub message: Option<String>,
    /// Same entries as `by_rank`, kept for older clients.
    pub recommendations: Vec<Recommendation>,
}

impl RecommendResponse {
    pub fn is_empty(&self) -> bool {
        self.by_rank.is_empty()
    }
}
