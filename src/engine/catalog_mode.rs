use async_trait::async_trait;

use crate::engine::constants::*;
use crate::engine::cost::{self, CostEstimate};
use crate::engine::energy::EnergyResult;
use crate::engine::ranking::{assign_ranks, sort_by_score};
use crate::engine::source::{CandidateSource, Evaluation, EvaluationInput};
use crate::models::{Figure, FoodItem, FoodType, LifeStage, Recommendation};

/// Catalog product with its computed cost and score.
#[derive(Debug)]
struct Candidate<'a> {
    item: &'a FoodItem,
    cost: CostEstimate,
    budget_used_percent: u64,
    score: f64,
}

/// Share of the budget left after this product, in percent.
pub fn budget_remaining_ratio(monthly_cost: u64, monthly_budget: u64) -> f64 {
    (monthly_budget as f64 - monthly_cost as f64) / monthly_budget as f64 * 100.0
}

/// Share of the budget used, integer percent (floor).
pub fn budget_used_percent(monthly_cost: u64, monthly_budget: u64) -> u64 {
    monthly_cost * 100 / monthly_budget
}

/// Ranking score: protein content weighted above budget headroom.
pub fn catalog_score(protein_percent: f64, budget_remaining_ratio: f64) -> f64 {
    protein_percent * PROTEIN_WEIGHT + budget_remaining_ratio * BUDGET_HEADROOM_WEIGHT
}

fn stage_phrase(stage: LifeStage) -> &'static str {
    match stage {
        LifeStage::Kitten => "kittens",
        LifeStage::Adult => "adult cats",
        LifeStage::Senior => "senior cats",
    }
}

/// Explanation built from independent clauses in a fixed order.
pub fn build_reason(item: &FoodItem, stage: LifeStage, budget_used_percent: u64) -> String {
    let mut clauses = Vec::new();

    if item.protein_percent >= HIGH_PROTEIN_PERCENT {
        clauses.push(format!(
            "High-protein premium formula ({}% protein)",
            item.protein_percent
        ));
    } else if item.protein_percent >= BALANCED_PROTEIN_PERCENT {
        clauses.push(format!("Balanced protein ({}% protein)", item.protein_percent));
    }

    if budget_used_percent <= BUDGET_SAVING_MAX_PERCENT {
        clauses.push(format!(
            "Budget-saving ({budget_used_percent}% of monthly budget)"
        ));
    } else if budget_used_percent <= REASONABLE_PRICE_MAX_PERCENT {
        clauses.push(format!(
            "Reasonable price ({budget_used_percent}% of monthly budget)"
        ));
    }

    if item.life_stage.targets(stage) {
        clauses.push(format!("Formulated for {}", stage_phrase(stage)));
    }

    if item.food_type == FoodType::Wet {
        clauses.push("Wet food helps with hydration".to_string());
    }

    if clauses.is_empty() {
        "Meets baseline nutrition for your cat".to_string()
    } else {
        clauses.join(" · ")
    }
}

fn evaluate_item<'a>(
    item: &'a FoodItem,
    energy: &EnergyResult,
    monthly_budget: u64,
) -> Option<Candidate<'a>> {
    if !item.life_stage.is_age_appropriate(energy.life_stage) {
        return None;
    }

    let cost = cost::estimate(energy.daily_energy_target, item.kcal_per_100g, item.price_per_kg)?;
    if cost.monthly_cost > monthly_budget {
        tracing::debug!(
            item = %item.debug_string(),
            monthly_cost = cost.monthly_cost,
            monthly_budget,
            "Rejected over budget"
        );
        return None;
    }

    let ratio = budget_remaining_ratio(cost.monthly_cost, monthly_budget);
    Some(Candidate {
        item,
        cost,
        budget_used_percent: budget_used_percent(cost.monthly_cost, monthly_budget),
        score: catalog_score(item.protein_percent, ratio),
    })
}

fn to_recommendation(candidate: &Candidate, stage: LifeStage) -> Recommendation {
    let item = candidate.item;
    Recommendation {
        rank: 0,
        food_name: item.name.clone(),
        brand: Some(item.brand.clone()),
        food_type: item.food_type,
        daily_amount_grams: Figure::Verified(cost::round_to_tenth(candidate.cost.daily_amount_grams)),
        daily_cost: Figure::Verified(candidate.cost.daily_cost),
        monthly_cost: Figure::Verified(candidate.cost.monthly_cost),
        protein_percent: Figure::Verified(item.protein_percent),
        fat_percent: Figure::Verified(item.fat_percent),
        score: candidate.score,
        reason: build_reason(item, stage, candidate.budget_used_percent),
        product_price: None,
        product_link: None,
        image_url: None,
        from_real_search: false,
        review_count: 0,
    }
}

/// Filter, cost, score and rank catalog products.
///
/// Returns at most `MAX_RECOMMENDATIONS` entries sorted by descending score,
/// ties kept in catalog order, ranked 1..N.
pub fn evaluate_catalog(
    items: &[FoodItem],
    energy: &EnergyResult,
    monthly_budget: u64,
) -> Vec<Recommendation> {
    if monthly_budget == 0 {
        return Vec::new();
    }

    let mut recommendations: Vec<Recommendation> = items
        .iter()
        .filter_map(|item| evaluate_item(item, energy, monthly_budget))
        .map(|candidate| to_recommendation(&candidate, energy.life_stage))
        .collect();

    sort_by_score(&mut recommendations);
    recommendations.truncate(MAX_RECOMMENDATIONS);
    assign_ranks(&mut recommendations);
    recommendations
}

/// Recommends from a fixed in-memory product catalog.
pub struct CatalogSource {
    items: Vec<FoodItem>,
}

impl CatalogSource {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl CandidateSource for CatalogSource {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn evaluate(&self, input: &EvaluationInput<'_>) -> Evaluation {
        if self.items.is_empty() {
            return Evaluation::Unavailable(CATALOG_EMPTY_MESSAGE.to_string());
        }

        let budget = input.request.monthly_budget;
        let recommendations = evaluate_catalog(&self.items, input.energy, budget);
        if recommendations.is_empty() {
            return Evaluation::Unavailable(format!(
                "No catalog product for the {} life stage fits a monthly budget of {budget}. \
                 Try raising the budget.",
                input.energy.life_stage
            ));
        }
        Evaluation::Ranked(recommendations)
    }
}
