use std::fmt;

use serde::{Deserialize, Serialize};

use super::cat::LifeStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodType {
    Dry,
    Wet,
}

impl FoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Dry => "DRY",
            FoodType::Wet => "WET",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Life stage a product is formulated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodLifeStage {
    Kitten,
    Adult,
    Senior,
    All,
}

impl FoodLifeStage {
    /// Whether a product for this stage may be fed to a cat in `stage`.
    ///
    /// Adult formulas also suit seniors; kitten and senior formulas only
    /// suit their own stage.
    pub fn is_age_appropriate(&self, stage: LifeStage) -> bool {
        match self {
            FoodLifeStage::All => true,
            FoodLifeStage::Kitten => stage == LifeStage::Kitten,
            FoodLifeStage::Adult => matches!(stage, LifeStage::Adult | LifeStage::Senior),
            FoodLifeStage::Senior => stage == LifeStage::Senior,
        }
    }

    /// Formulated specifically for `stage` (an all-ages formula never is).
    pub fn targets(&self, stage: LifeStage) -> bool {
        matches!(
            (self, stage),
            (FoodLifeStage::Kitten, LifeStage::Kitten)
                | (FoodLifeStage::Adult, LifeStage::Adult)
                | (FoodLifeStage::Senior, LifeStage::Senior)
        )
    }
}

/// A catalog product with nutrition and price attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    pub brand: String,

    #[serde(rename = "type")]
    pub food_type: FoodType,

    pub life_stage: FoodLifeStage,

    pub kcal_per_100g: f64,

    pub price_per_kg: u64,

    pub protein_percent: f64,

    pub fat_percent: f64,

    #[serde(default)]
    pub description: String,
}

impl FoodItem {
    /// Positive energy density and price, percentages within 0-100.
    pub fn is_valid(&self) -> bool {
        self.kcal_per_100g > 0.0
            && self.price_per_kg > 0
            && (0.0..=100.0).contains(&self.protein_percent)
            && (0.0..=100.0).contains(&self.fat_percent)
            && !self.id.trim().is_empty()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} {} ({}, {:?}): {} kcal/100g, {}/kg, P:{} F:{}",
            self.brand,
            self.name,
            self.food_type,
            self.life_stage,
            self.kcal_per_100g,
            self.price_per_kg,
            self.protein_percent,
            self.fat_percent
        )
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}
