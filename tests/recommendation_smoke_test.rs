use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cat_food_recommend_rs::catalog::builtin_catalog;
use cat_food_recommend_rs::engine::constants::{
    MAX_RECOMMENDATIONS, REVIEW_COUNT_NOTE, SEARCH_EMPTY_MESSAGE, SEARCH_UNAVAILABLE_MESSAGE,
};
use cat_food_recommend_rs::engine::RecommendationEngine;
use cat_food_recommend_rs::error::CatFoodError;
use cat_food_recommend_rs::models::{Figure, LifeStage, RawListing, RecommendRequest};
use cat_food_recommend_rs::search::ShoppingSearch;

/// In-memory search provider recording the queries it receives.
struct FakeSearch {
    available: bool,
    listings: Vec<RawListing>,
    queries: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl FakeSearch {
    fn new(available: bool, listings: Vec<RawListing>) -> Arc<Self> {
        Arc::new(Self {
            available,
            listings,
            queries: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShoppingSearch for FakeSearch {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn search(&self, query: &str, _limit: usize) -> Vec<RawListing> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.listings.clone()
    }
}

fn listing(title: &str, price: &str) -> RawListing {
    RawListing {
        title: Some(title.to_string()),
        link: Some(format!("https://shop.example/{}", title.len())),
        low_price: Some(price.to_string()),
        ..Default::default()
    }
}

fn request(weight: f64, age: i64, sex: &str, neutered: bool, budget: i64) -> RecommendRequest {
    RecommendRequest {
        weight_kg: Some(weight),
        age_months: Some(age),
        sex: Some(sex.to_string()),
        neutered: Some(neutered),
        monthly_budget: Some(budget),
        search_query: None,
    }
}

#[tokio::test]
async fn test_catalog_invariants() {
    let engine = RecommendationEngine::catalog(builtin_catalog());

    for (age, budget) in [(5, 60_000), (36, 50_000), (36, 20_000), (120, 80_000), (36, 1_000_000)] {
        let response = engine
            .recommend(&request(4.0, age, "MALE", true, budget))
            .await
            .unwrap();

        let recs = &response.by_rank;
        assert!(recs.len() <= MAX_RECOMMENDATIONS);
        for (i, rec) in recs.iter().enumerate() {
            assert_eq!(rec.rank, i + 1);
            assert!(rec.monthly_cost.value().unwrap() <= budget as u64);
            assert!(!rec.from_real_search);
        }
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(response.recommendations, response.by_rank);
        assert_eq!(response.by_price.len(), recs.len());
        assert_eq!(response.by_review_count.len(), recs.len());
        assert!(response.is_empty() || response.review_note.as_deref() == Some(REVIEW_COUNT_NOTE));
    }
}

#[tokio::test]
async fn test_catalog_by_price_ascending() {
    let engine = RecommendationEngine::catalog(builtin_catalog());
    let response = engine
        .recommend(&request(4.0, 36, "FEMALE", true, 1_000_000))
        .await
        .unwrap();

    assert!(!response.is_empty());
    let costs: Vec<u64> = response.by_price.iter().map(|r| r.monthly_cost_key()).collect();
    let mut sorted = costs.clone();
    sorted.sort();
    assert_eq!(costs, sorted);
}

#[tokio::test]
async fn test_catalog_tight_budget_explains() {
    let engine = RecommendationEngine::catalog(builtin_catalog());
    let response = engine
        .recommend(&request(8.0, 36, "MALE", false, 1_000))
        .await
        .unwrap();

    assert!(response.is_empty());
    assert!(response.message.as_deref().unwrap().contains("budget"));
    assert!(response.review_note.is_none());
}

#[tokio::test]
async fn test_search_unavailable_scenario() {
    let search = FakeSearch::new(false, vec![listing("Cat food 2kg", "20000")]);
    let engine = RecommendationEngine::search(search.clone());

    let response = engine
        .recommend(&request(4.0, 36, "MALE", true, 50_000))
        .await
        .unwrap();

    assert!(response.by_rank.is_empty());
    assert!(response.by_price.is_empty());
    assert!(response.by_review_count.is_empty());
    assert!(response.recommendations.is_empty());
    assert_eq!(response.message.as_deref(), Some(SEARCH_UNAVAILABLE_MESSAGE));
    assert_eq!(response.life_stage_factor, 1.6);
    assert!((response.basal_energy - 198.0).abs() < 5.0);
    assert!((response.daily_energy_target - response.basal_energy * 1.6).abs() < 1e-9);
    assert!(!response.calculation_source.is_empty());
    assert_eq!(search.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_search_no_usable_listings() {
    let search = FakeSearch::new(true, vec![listing("<b>A</b>", "1000"), listing("Kibble", "free")]);
    let engine = RecommendationEngine::search(search);

    let response = engine
        .recommend(&request(4.0, 36, "MALE", true, 50_000))
        .await
        .unwrap();

    assert!(response.is_empty());
    assert_eq!(response.message.as_deref(), Some(SEARCH_EMPTY_MESSAGE));
}

#[tokio::test]
async fn test_search_views() {
    let listings = vec![
        listing("<b>Salmon</b> kibble 2kg", "40000"),
        listing("Chicken pouch 85g", "1200"),
        listing("Indoor formula 4kg", "30000"),
    ];
    let search = FakeSearch::new(true, listings);
    let engine = RecommendationEngine::search(search.clone());

    let response = engine
        .recommend(&request(4.0, 36, "MALE", true, 50_000))
        .await
        .unwrap();

    assert!(response.message.is_none());
    assert_eq!(response.review_note.as_deref(), Some(REVIEW_COUNT_NOTE));
    assert_eq!(search.queries(), vec!["cat food".to_string()]);

    let names: Vec<&str> = response.by_rank.iter().map(|r| r.food_name.as_str()).collect();
    assert_eq!(names, vec!["Salmon kibble 2kg", "Chicken pouch 85g", "Indoor formula 4kg"]);

    // Provider order survives in the review view; cheapest monthly cost leads by price.
    assert_eq!(response.by_review_count, response.by_rank);
    assert_eq!(response.by_price[0].food_name, "Indoor formula 4kg");
    assert_eq!(response.by_price[0].rank, 3);

    for rec in &response.by_rank {
        assert!(rec.from_real_search);
        assert!(rec.protein_percent.is_unknown());
        assert!(rec.daily_cost.is_unknown());
        assert!(matches!(rec.monthly_cost, Figure::Estimated(_)));
        assert_eq!(rec.review_count, 0);
    }
}

#[tokio::test]
async fn test_search_query_selection() {
    let search = FakeSearch::new(true, vec![listing("Kitten kibble 1kg", "15000")]);
    let engine = RecommendationEngine::search(search.clone());

    engine.recommend(&request(1.5, 5, "FEMALE", false, 30_000)).await.unwrap();
    engine.recommend(&request(4.0, 120, "FEMALE", true, 30_000)).await.unwrap();

    let mut custom = request(4.0, 36, "MALE", true, 30_000);
    custom.search_query = Some("  grain free  ".to_string());
    engine.recommend(&custom).await.unwrap();

    assert_eq!(
        search.queries(),
        vec!["kitten food".to_string(), "senior cat food".to_string(), "grain free".to_string()]
    );
}

#[tokio::test]
async fn test_kitten_scenario() {
    let engine = RecommendationEngine::catalog(builtin_catalog());
    let response = engine
        .recommend(&request(1.5, 5, "FEMALE", false, 100_000))
        .await
        .unwrap();

    assert_eq!(response.life_stage_factor, 2.5);
    assert_eq!(response.life_stage, LifeStage::Kitten);
    assert!(!response.is_empty());
}

#[tokio::test]
async fn test_validation_reports_every_field() {
    let engine = RecommendationEngine::catalog(builtin_catalog());
    let bad = RecommendRequest {
        weight_kg: Some(25.0),
        age_months: Some(0),
        sex: Some("CAT".to_string()),
        neutered: None,
        monthly_budget: Some(500),
        search_query: None,
    };

    match engine.recommend(&bad).await {
        Err(CatFoodError::Validation(errors)) => {
            assert_eq!(errors.len(), 5);
            for field in ["weightKg", "ageMonths", "sex", "neutered", "monthlyBudget"] {
                assert!(errors.contains(field), "missing {field}");
            }
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
