//! Daily energy requirement of a cat.
//!
//! Uses the NRC/AAFCO formulas:
//!   RER (resting energy)     = 70 × weight(kg)^0.75 kcal/day
//!   MER (maintenance energy) = RER × life-stage factor
//!
//! Life-stage factors:
//!   newborn kitten (0-3 months)   3.0
//!   growing kitten (4-11 months)  2.5
//!   senior (84+ months)           1.4
//!   adult (12-83 months)          neutered male 1.6, neutered female 1.4,
//!                                 intact male 1.8, intact female 1.6

use serde::{Deserialize, Serialize};

use crate::engine::constants::*;
use crate::error::{CatFoodError, Result};
use crate::models::{CatProfile, LifeStage, Sex};

/// Energy figures derived from a cat profile. Recomputed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    pub basal_energy: f64,
    pub life_stage_factor: f64,
    pub daily_energy_target: f64,
    pub life_stage: LifeStage,
    pub stage_description: String,
    pub formula_trace: String,
}

/// Resting energy requirement in kcal/day.
pub fn basal_energy(weight_kg: f64) -> Result<f64> {
    if !(weight_kg > 0.0) || !weight_kg.is_finite() {
        return Err(CatFoodError::InvalidInput(format!(
            "weight must be positive, got {weight_kg}"
        )));
    }
    Ok(RER_COEFFICIENT * weight_kg.powf(RER_EXPONENT))
}

/// Life-stage multiplier. Age bounds are checked first; sex and neuter
/// status only matter for adults (12-83 months).
pub fn life_stage_factor(age_months: u32, sex: Sex, neutered: bool) -> f64 {
    if age_months < GROWING_KITTEN_MIN_MONTHS {
        return NEWBORN_KITTEN_FACTOR;
    }
    if age_months < ADULT_MIN_MONTHS {
        return GROWING_KITTEN_FACTOR;
    }
    if age_months >= SENIOR_MIN_MONTHS {
        return SENIOR_FACTOR;
    }
    match (sex, neutered) {
        (Sex::Male, true) => NEUTERED_MALE_FACTOR,
        (Sex::Female, true) => NEUTERED_FEMALE_FACTOR,
        (Sex::Male, false) => INTACT_MALE_FACTOR,
        (Sex::Female, false) => INTACT_FEMALE_FACTOR,
    }
}

/// Coarse stage used for product filtering and search queries.
pub fn life_stage(age_months: u32) -> LifeStage {
    if age_months < ADULT_MIN_MONTHS {
        LifeStage::Kitten
    } else if age_months >= SENIOR_MIN_MONTHS {
        LifeStage::Senior
    } else {
        LifeStage::Adult
    }
}

pub fn stage_description(age_months: u32, sex: Sex, neutered: bool) -> String {
    if age_months < GROWING_KITTEN_MIN_MONTHS {
        return "Newborn kitten (0-3 months)".to_string();
    }
    if age_months < ADULT_MIN_MONTHS {
        return "Growing kitten (4-11 months)".to_string();
    }
    if age_months >= SENIOR_MIN_MONTHS {
        return "Senior (7+ years)".to_string();
    }
    let sex_str = match sex {
        Sex::Male => "male",
        Sex::Female => "female",
    };
    let neutered_str = if neutered { "neutered" } else { "intact" };
    format!("Adult {neutered_str} {sex_str} (1-7 years)")
}

/// Human-readable derivation of the daily target.
pub fn formula_trace(weight_kg: f64, rer: f64, factor: f64, mer: f64) -> String {
    format!(
        "NRC/AAFCO daily energy calculation\n\
         1) RER = 70 × weight(kg)^0.75 = 70 × {weight_kg:.1}^0.75 = {rer:.1} kcal/day\n\
         2) MER = RER × life-stage factor = {rer:.1} × {factor:.1} = {mer:.1} kcal/day"
    )
}

/// Compute every energy figure for `profile`.
pub fn calculate_energy(profile: &CatProfile) -> Result<EnergyResult> {
    let rer = basal_energy(profile.weight_kg)?;
    let factor = life_stage_factor(profile.age_months, profile.sex, profile.neutered);
    let mer = rer * factor;

    tracing::debug!(
        weight_kg = profile.weight_kg,
        age_months = profile.age_months,
        sex = %profile.sex,
        neutered = profile.neutered,
        rer,
        factor,
        mer,
        "Calculated daily energy"
    );

    Ok(EnergyResult {
        basal_energy: rer,
        life_stage_factor: factor,
        daily_energy_target: mer,
        life_stage: life_stage(profile.age_months),
        stage_description: stage_description(profile.age_months, profile.sex, profile.neutered),
        formula_trace: formula_trace(profile.weight_kg, rer, factor, mer),
    })
}
