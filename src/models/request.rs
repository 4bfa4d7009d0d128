use serde::{Deserialize, Serialize};

use super::cat::{CatProfile, Sex};
use crate::error::{FieldErrors, Result};

pub const MIN_WEIGHT_KG: f64 = 0.1;
pub const MAX_WEIGHT_KG: f64 = 20.0;
pub const MIN_AGE_MONTHS: i64 = 1;
pub const MAX_AGE_MONTHS: i64 = 300;
pub const MIN_MONTHLY_BUDGET: i64 = 1_000;
pub const MAX_MONTHLY_BUDGET: i64 = 1_000_000;

/// Recommendation request as received from a caller, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub weight_kg: Option<f64>,

    #[serde(default)]
    pub age_months: Option<i64>,

    #[serde(default, alias = "gender")]
    pub sex: Option<String>,

    #[serde(default)]
    pub neutered: Option<bool>,

    #[serde(default)]
    pub monthly_budget: Option<i64>,

    #[serde(default)]
    pub search_query: Option<String>,
}

/// A request whose fields passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub profile: CatProfile,
    pub monthly_budget: u64,
    /// Trimmed, never blank.
    pub search_query: Option<String>,
}

impl RecommendRequest {
    /// Check every field, collecting one message per invalid field.
    pub fn validate(&self) -> Result<ValidatedRequest> {
        let mut errors = FieldErrors::new();

        let weight_kg = match self.weight_kg {
            None => {
                errors.add("weightKg", "weight is required");
                None
            }
            Some(w) if !w.is_finite() || w < MIN_WEIGHT_KG => {
                errors.add("weightKg", format!("weight must be at least {MIN_WEIGHT_KG} kg"));
                None
            }
            Some(w) if w > MAX_WEIGHT_KG => {
                errors.add("weightKg", format!("weight must be {MAX_WEIGHT_KG} kg or less"));
                None
            }
            Some(w) => Some(w),
        };

        let age_months = match self.age_months {
            None => {
                errors.add("ageMonths", "age is required");
                None
            }
            Some(a) if a < MIN_AGE_MONTHS => {
                errors.add("ageMonths", format!("age must be at least {MIN_AGE_MONTHS} month"));
                None
            }
            Some(a) if a > MAX_AGE_MONTHS => {
                errors.add(
                    "ageMonths",
                    format!("age must be {MAX_AGE_MONTHS} months (25 years) or less"),
                );
                None
            }
            Some(a) => Some(a as u32),
        };

        let sex = match self.sex.as_deref() {
            None => {
                errors.add("sex", "sex is required");
                None
            }
            Some(s) => match s.parse::<Sex>() {
                Ok(sex) => Some(sex),
                Err(_) => {
                    errors.add("sex", "sex must be MALE or FEMALE");
                    None
                }
            },
        };

        if self.neutered.is_none() {
            errors.add("neutered", "neuter status is required");
        }

        let monthly_budget = match self.monthly_budget {
            None => {
                errors.add("monthlyBudget", "monthly budget is required");
                None
            }
            Some(b) if b < MIN_MONTHLY_BUDGET => {
                errors.add(
                    "monthlyBudget",
                    format!("monthly budget must be at least {MIN_MONTHLY_BUDGET}"),
                );
                None
            }
            Some(b) if b > MAX_MONTHLY_BUDGET => {
                errors.add(
                    "monthlyBudget",
                    format!("monthly budget must be {MAX_MONTHLY_BUDGET} or less"),
                );
                None
            }
            Some(b) => Some(b as u64),
        };

        errors.into_result()?;

        // All present once no errors were recorded.
        match (weight_kg, age_months, sex, self.neutered, monthly_budget) {
            (Some(weight_kg), Some(age_months), Some(sex), Some(neutered), Some(monthly_budget)) => {
                Ok(ValidatedRequest {
                    profile: CatProfile::new(weight_kg, age_months, sex, neutered),
                    monthly_budget,
                    search_query: self
                        .search_query
                        .as_deref()
                        .map(str::trim)
                        .filter(|q| !q.is_empty())
                        .map(str::to_string),
                })
            }
            _ => Err(crate::error::CatFoodError::InvalidInput(
                "incomplete request".to_string(),
            )),
        }
    }
}
