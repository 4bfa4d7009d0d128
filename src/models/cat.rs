use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatFoodError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "MALE",
            Sex::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = CatFoodError;

    /// Accepts exactly `MALE` or `FEMALE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            other => Err(CatFoodError::InvalidInput(format!(
                "sex must be MALE or FEMALE, got '{other}'"
            ))),
        }
    }
}

/// Coarse age bucket used to filter and query products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifeStage {
    Kitten,
    Adult,
    Senior,
}

impl LifeStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeStage::Kitten => "KITTEN",
            LifeStage::Adult => "ADULT",
            LifeStage::Senior => "SENIOR",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Biological inputs for the energy model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatProfile {
    pub weight_kg: f64,
    pub age_months: u32,
    pub sex: Sex,
    pub neutered: bool,
}

impl CatProfile {
    pub fn new(weight_kg: f64, age_months: u32, sex: Sex, neutered: bool) -> Self {
        Self {
            weight_kg,
            age_months,
            sex,
            neutered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parse_is_exact() {
        assert_eq!("MALE".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("FEMALE".parse::<Sex>().unwrap(), Sex::Female);
        assert!("male".parse::<Sex>().is_err());
        assert!("UNKNOWN".parse::<Sex>().is_err());
    }

    #[test]
    fn test_life_stage_serializes_upper_case() {
        let json = serde_json::to_string(&LifeStage::Senior).unwrap();
        assert_eq!(json, "\"SENIOR\"");
    }
}
