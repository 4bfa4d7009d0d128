use std::sync::Arc;

use async_trait::async_trait;

use crate::engine::constants::*;
use crate::engine::cost;
use crate::engine::ranking::assign_ranks;
use crate::engine::source::{CandidateSource, Evaluation, EvaluationInput};
use crate::models::{Figure, LifeStage, NormalizedListing, RawListing, Recommendation};
use crate::search::{normalize_listing, ShoppingSearch};

const SEARCH_REASON: &str =
    "Estimated from the shopping listing; add it to a comparison list to enter label values";

/// Default query for a life stage.
pub fn default_query(stage: LifeStage) -> &'static str {
    match stage {
        LifeStage::Kitten => "kitten food",
        LifeStage::Senior => "senior cat food",
        LifeStage::Adult => "cat food",
    }
}

/// Custom query when given, else the life-stage default.
pub fn resolve_query(custom: Option<&str>, stage: LifeStage) -> String {
    custom
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| default_query(stage))
        .to_string()
}

/// Search results carry no verified nutrition, so only the estimated monthly
/// cost survives; the rest stays unknown until the user verifies it.
pub fn listing_to_recommendation(listing: &NormalizedListing, daily_energy_target: f64) -> Recommendation {
    let monthly_cost = cost::estimate(daily_energy_target, listing.kcal_per_100g, listing.price_per_kg)
        .map(|c| Figure::Estimated(c.monthly_cost))
        .unwrap_or(Figure::Unknown);

    Recommendation {
        rank: 0,
        food_name: listing.title.clone(),
        brand: listing.brand.clone(),
        food_type: listing.food_type,
        daily_amount_grams: Figure::Unknown,
        daily_cost: Figure::Unknown,
        monthly_cost,
        protein_percent: Figure::Unknown,
        fat_percent: Figure::Unknown,
        score: SEARCH_SCORE_PLACEHOLDER,
        reason: SEARCH_REASON.to_string(),
        product_price: Some(listing.low_price),
        product_link: listing.link.clone(),
        image_url: listing.image.clone(),
        from_real_search: true,
        review_count: 0,
    }
}

/// Usable listings in provider order, at most `MAX_RECOMMENDATIONS`, ranked.
pub fn recommend_from_listings(listings: &[RawListing], daily_energy_target: f64) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = listings
        .iter()
        .filter_map(normalize_listing)
        .take(MAX_RECOMMENDATIONS)
        .map(|listing| listing_to_recommendation(&listing, daily_energy_target))
        .collect();
    assign_ranks(&mut recommendations);
    recommendations
}

/// Recommends from live shopping search results.
pub struct SearchSource {
    search: Arc<dyn ShoppingSearch>,
}

impl SearchSource {
    pub fn new(search: Arc<dyn ShoppingSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl CandidateSource for SearchSource {
    fn name(&self) -> &'static str {
        "search"
    }

    async fn evaluate(&self, input: &EvaluationInput<'_>) -> Evaluation {
        if !self.search.is_available() {
            tracing::warn!("Shopping search is not configured");
            return Evaluation::Unavailable(SEARCH_UNAVAILABLE_MESSAGE.to_string());
        }

        let query = resolve_query(input.request.search_query.as_deref(), input.energy.life_stage);
        let listings = self.search.search(&query, SEARCH_RESULT_HINT).await;
        let recommendations = recommend_from_listings(&listings, input.energy.daily_energy_target);

        tracing::info!(
            %query,
            listings = listings.len(),
            usable = recommendations.len(),
            "Evaluated search listings"
        );

        if recommendations.is_empty() {
            return Evaluation::Unavailable(SEARCH_EMPTY_MESSAGE.to_string());
        }
        Evaluation::Ranked(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodType;

    fn raw(title: &str, price: &str) -> RawListing {
        RawListing {
            title: Some(title.to_string()),
            link: Some(format!("https://shop.example/{title}")),
            low_price: Some(price.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_query() {
        assert_eq!(resolve_query(None, LifeStage::Kitten), "kitten food");
        assert_eq!(resolve_query(None, LifeStage::Senior), "senior cat food");
        assert_eq!(resolve_query(None, LifeStage::Adult), "cat food");
        assert_eq!(resolve_query(Some("  "), LifeStage::Adult), "cat food");
        assert_eq!(resolve_query(Some(" grain free "), LifeStage::Kitten), "grain free");
    }

    #[test]
    fn test_listing_fields_unknown_except_monthly_cost() {
        let listings = vec![raw("Salmon kibble 2kg", "20000")];
        let recs = recommend_from_listings(&listings, 316.8);
        let rec = &recs[0];

        assert!(rec.protein_percent.is_unknown());
        assert!(rec.fat_percent.is_unknown());
        assert!(rec.daily_amount_grams.is_unknown());
        assert!(rec.daily_cost.is_unknown());
        assert!(matches!(rec.monthly_cost, Figure::Estimated(_)));
        assert_eq!(rec.score, SEARCH_SCORE_PLACEHOLDER);
        assert!(rec.from_real_search);
        assert_eq!(rec.product_price, Some(20_000));
    }

    #[test]
    fn test_monthly_cost_estimate() {
        // 316.8 kcal / 385 kcal per 100g = 82.28 g; 10,000/kg -> 822.8 -> 823/day
        let recs = recommend_from_listings(&[raw("Salmon kibble 2kg", "20000")], 316.8);
        assert_eq!(recs[0].monthly_cost, Figure::Estimated(823 * 30));
    }

    #[test]
    fn test_overflowing_cost_is_unknown() {
        let listings = vec![
            raw("Sample 0kg", "400000000000000000"),
            raw("Salmon kibble 2kg", "20000"),
        ];
        let recs = recommend_from_listings(&listings, 316.8);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].monthly_cost.is_unknown());
        assert_eq!(recs[1].monthly_cost, Figure::Estimated(823 * 30));
    }

    #[test]
    fn test_keeps_provider_order_and_caps() {
        let listings: Vec<RawListing> = (1..=8)
            .map(|i| raw(&format!("Product {i}"), &(i * 1000).to_string()))
            .collect();
        let recs = recommend_from_listings(&listings, 300.0);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recs[0].food_name, "Product 1");
        assert_eq!(recs[4].food_name, "Product 5");
        assert_eq!(recs[4].rank, 5);
    }

    #[test]
    fn test_bad_listings_skipped_before_cap() {
        let listings = vec![
            raw("X", "1000"),
            raw("No price", ""),
            raw("Tuna pouch", "1500"),
        ];
        let recs = recommend_from_listings(&listings, 300.0);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].food_type, FoodType::Wet);
        assert_eq!(recs[0].rank, 1);
    }
}
