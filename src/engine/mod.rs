pub mod catalog_mode;
pub mod constants;
pub mod cost;
pub mod energy;
pub mod ranking;
pub mod search_mode;
pub mod source;

use std::sync::Arc;

use crate::error::Result;
use crate::models::{FoodItem, RecommendResponse, RecommendRequest};
use crate::search::ShoppingSearch;

pub use catalog_mode::{evaluate_catalog, CatalogSource};
pub use energy::{calculate_energy, EnergyResult};
pub use ranking::{build_views, RankedViews};
pub use search_mode::{default_query, recommend_from_listings, SearchSource};
pub use source::{CandidateSource, Evaluation, EvaluationInput};

use constants::{CALCULATION_SOURCE, REVIEW_COUNT_NOTE};

/// Validates a request, computes energy needs and ranks candidates from one
/// source.
pub struct RecommendationEngine {
    source: Box<dyn CandidateSource>,
}

impl RecommendationEngine {
    pub fn new(source: Box<dyn CandidateSource>) -> Self {
        Self { source }
    }

    pub fn catalog(items: Vec<FoodItem>) -> Self {
        Self::new(Box::new(CatalogSource::new(items)))
    }

    pub fn search(search: Arc<dyn ShoppingSearch>) -> Self {
        Self::new(Box::new(SearchSource::new(search)))
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Full recommendation for one request.
    ///
    /// Invalid input is the only error; an empty result is a normal response
    /// with `message` set.
    pub async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse> {
        let validated = request.validate()?;
        let energy = calculate_energy(&validated.profile)?;

        tracing::info!(
            source = self.source.name(),
            life_stage = %energy.life_stage,
            daily_energy_target = energy.daily_energy_target,
            monthly_budget = validated.monthly_budget,
            "Recommending"
        );

        let input = EvaluationInput {
            request: &validated,
            energy: &energy,
        };
        let (ranked, message) = match self.source.evaluate(&input).await {
            Evaluation::Ranked(recommendations) => (recommendations, None),
            Evaluation::Unavailable(message) => {
                tracing::info!(source = self.source.name(), %message, "No recommendations");
                (Vec::new(), Some(message))
            }
        };

        let views = build_views(ranked);
        let review_note = (!views.by_rank.is_empty()).then(|| REVIEW_COUNT_NOTE.to_string());

        Ok(RecommendResponse {
            daily_energy_target: energy.daily_energy_target,
            basal_energy: energy.basal_energy,
            life_stage_factor: energy.life_stage_factor,
            life_stage: energy.life_stage,
            stage_description: energy.stage_description,
            formula_trace: energy.formula_trace,
            calculation_source: CALCULATION_SOURCE.to_string(),
            recommendations: views.by_rank.clone(),
            by_rank: views.by_rank,
            by_price: views.by_price,
            by_review_count: views.by_review_count,
            review_note,
            message,
        })
    }
}
