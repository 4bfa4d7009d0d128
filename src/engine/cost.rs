use crate::engine::constants::DAYS_PER_MONTH;
use crate::models::DerivedCost;

/// Unrounded feeding cost figures used for filtering and ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    pub daily_amount_grams: f64,
    pub daily_cost: u64,
    pub monthly_cost: u64,
}

/// Grams per day needed to meet `daily_energy_target`.
pub fn daily_amount_grams(daily_energy_target: f64, kcal_per_100g: f64) -> f64 {
    daily_energy_target / kcal_per_100g * 100.0
}

/// Cost per day, rounded up so the user is never under-quoted.
pub fn daily_cost(daily_amount_grams: f64, price_per_kg: u64) -> u64 {
    (daily_amount_grams / 1000.0 * price_per_kg as f64).ceil() as u64
}

/// `None` when the product overflows `u64`.
pub fn monthly_cost(daily_cost: u64) -> Option<u64> {
    daily_cost.checked_mul(DAYS_PER_MONTH)
}

/// Package price spread over its weight, or `None` for a non-positive weight.
pub fn price_per_kg(price: u64, weight_kg: f64) -> Option<u64> {
    if weight_kg > 0.0 && weight_kg.is_finite() {
        Some((price as f64 / weight_kg).round() as u64)
    } else {
        None
    }
}

/// Feeding cost for a product, or `None` when the energy density is unusable
/// or the cost does not fit in a `u64`.
pub fn estimate(daily_energy_target: f64, kcal_per_100g: f64, price_per_kg: u64) -> Option<CostEstimate> {
    if !(kcal_per_100g > 0.0) || !kcal_per_100g.is_finite() {
        return None;
    }
    let grams = daily_amount_grams(daily_energy_target, kcal_per_100g);
    let daily = daily_cost(grams, price_per_kg);
    Some(CostEstimate {
        daily_amount_grams: grams,
        daily_cost: daily,
        monthly_cost: monthly_cost(daily)?,
    })
}

/// Derived figures for user-verified data.
///
/// Returns `None` (insufficient data) unless both the energy density and the
/// package weight are known and positive.
pub fn derive_cost(
    daily_energy_target: f64,
    kcal_per_100g: Option<f64>,
    weight_kg: Option<f64>,
    price: u64,
) -> Option<DerivedCost> {
    let kcal = kcal_per_100g.filter(|k| *k > 0.0)?;
    let weight = weight_kg.filter(|w| *w > 0.0)?;
    let per_kg = price_per_kg(price, weight)?;
    let cost = estimate(daily_energy_target, kcal, per_kg)?;

    Some(DerivedCost {
        daily_amount_grams: round_to_tenth(cost.daily_amount_grams),
        price_per_kg: per_kg,
        daily_cost: cost.daily_cost,
        monthly_cost: cost.monthly_cost,
    })
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
