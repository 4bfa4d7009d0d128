use dashmap::DashMap;
use uuid::Uuid;

use crate::engine::constants::MAX_COMPARISON_ITEMS;
use crate::engine::cost;
use crate::error::{CatFoodError, FieldErrors, Result};
use crate::models::{ComparisonCandidate, ComparisonItem, ComparisonUpdate};

/// Comparison lists keyed by basket id.
///
/// Each basket's item list is guarded by its map shard, so operations on one
/// basket are atomic and different baskets rarely contend. Nothing is
/// persisted across restarts.
#[derive(Debug, Default)]
pub struct ComparisonStore {
    baskets: DashMap<String, Vec<ComparisonItem>>,
}

impl ComparisonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_items(&self) -> usize {
        MAX_COMPARISON_ITEMS
    }

    /// Number of non-empty baskets.
    pub fn basket_count(&self) -> usize {
        self.baskets.len()
    }

    /// Add a product with listing-time fields only; verified values start empty.
    pub fn add(&self, basket_id: &str, candidate: ComparisonCandidate) -> Result<ComparisonItem> {
        let mut errors = FieldErrors::new();
        if candidate.product_link.trim().is_empty() {
            errors.add("productLink", "product link is required");
        }
        errors.into_result()?;

        let mut items = self.baskets.entry(basket_id.to_string()).or_default();
        if items.len() >= MAX_COMPARISON_ITEMS {
            tracing::warn!(basket_id, max = MAX_COMPARISON_ITEMS, "Comparison list is full");
            return Err(CatFoodError::CapacityExceeded {
                max: MAX_COMPARISON_ITEMS,
            });
        }

        let item = ComparisonItem {
            id: Uuid::new_v4().to_string(),
            product_link: candidate.product_link.trim().to_string(),
            product_name: candidate.product_name,
            brand: candidate.brand,
            image_url: candidate.image_url,
            low_price: candidate.low_price,
            protein_percent: None,
            fat_percent: None,
            kcal_per_100g: None,
            price: None,
            weight_kg: None,
            derived: None,
        };
        items.push(item.clone());

        tracing::info!(basket_id, item_id = %item.id, size = items.len(), "Added comparison item");
        Ok(item)
    }

    /// Overwrite only the fields present in `update`.
    pub fn update(&self, basket_id: &str, item_id: &str, update: &ComparisonUpdate) -> Result<ComparisonItem> {
        let not_found = || CatFoodError::NotFound {
            basket_id: basket_id.to_string(),
            item_id: item_id.to_string(),
        };

        let mut items = self.baskets.get_mut(basket_id).ok_or_else(not_found)?;
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(not_found)?;
        item.apply(update);

        tracing::debug!(basket_id, item_id, "Updated comparison item");
        Ok(item.clone())
    }

    /// Remove an item; an emptied basket is dropped.
    pub fn remove(&self, basket_id: &str, item_id: &str) -> Result<()> {
        let removed = match self.baskets.get_mut(basket_id) {
            Some(mut items) => {
                let before = items.len();
                items.retain(|i| i.id != item_id);
                items.len() < before
            }
            None => false,
        };

        if !removed {
            return Err(CatFoodError::NotFound {
                basket_id: basket_id.to_string(),
                item_id: item_id.to_string(),
            });
        }

        // The guard above is released; re-check emptiness under the shard lock.
        self.baskets.remove_if(basket_id, |_, items| items.is_empty());
        tracing::debug!(basket_id, item_id, "Removed comparison item");
        Ok(())
    }

    /// Items in insertion order. With a positive energy target, derived costs
    /// are recomputed for each returned item.
    pub fn list(&self, basket_id: &str, daily_energy_target: Option<f64>) -> Vec<ComparisonItem> {
        let mut items = self
            .baskets
            .get(basket_id)
            .map(|items| items.value().clone())
            .unwrap_or_default();

        if let Some(target) = daily_energy_target.filter(|t| *t > 0.0) {
            for item in &mut items {
                item.derived = cost::derive_cost(
                    target,
                    item.kcal_per_100g,
                    item.weight_kg,
                    item.effective_price(),
                );
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(link: &str) -> ComparisonCandidate {
        ComparisonCandidate {
            product_link: link.to_string(),
            product_name: Some(format!("Product {link}")),
            low_price: Some(20_000),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let store = ComparisonStore::new();
        let a = store.add("b1", candidate("https://a")).unwrap();
        let b = store.add("b1", candidate("https://b")).unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.protein_percent.is_none());
        assert_eq!(store.list("b1", None).len(), 2);
    }

    #[test]
    fn test_add_requires_link() {
        let store = ComparisonStore::new();
        match store.add("b1", candidate("   ")) {
            Err(CatFoodError::Validation(errors)) => assert!(errors.contains("productLink")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.basket_count(), 0);
    }

    #[test]
    fn test_capacity() {
        let store = ComparisonStore::new();
        for i in 0..MAX_COMPARISON_ITEMS {
            store.add("b1", candidate(&format!("https://{i}"))).unwrap();
        }
        assert!(matches!(
            store.add("b1", candidate("https://extra")),
            Err(CatFoodError::CapacityExceeded { max: 5 })
        ));
        assert_eq!(store.list("b1", None).len(), MAX_COMPARISON_ITEMS);
        // Other baskets are unaffected.
        assert!(store.add("b2", candidate("https://other")).is_ok());
    }

    #[test]
    fn test_partial_update() {
        let store = ComparisonStore::new();
        let item = store.add("b1", candidate("https://a")).unwrap();

        store
            .update("b1", &item.id, &ComparisonUpdate { protein_percent: Some(40.0), ..Default::default() })
            .unwrap();
        let updated = store
            .update("b1", &item.id, &ComparisonUpdate { fat_percent: Some(18.0), ..Default::default() })
            .unwrap();

        assert_eq!(updated.protein_percent, Some(40.0));
        assert_eq!(updated.fat_percent, Some(18.0));
    }

    #[test]
    fn test_update_not_found() {
        let store = ComparisonStore::new();
        let item = store.add("b1", candidate("https://a")).unwrap();
        assert!(matches!(
            store.update("b1", "missing", &ComparisonUpdate::default()),
            Err(CatFoodError::NotFound { .. })
        ));
        assert!(matches!(
            store.update("nope", &item.id, &ComparisonUpdate::default()),
            Err(CatFoodError::NotFound { .. })
        ));
    }

    #[test]
    fn test_remove_last_drops_basket() {
        let store = ComparisonStore::new();
        let a = store.add("b1", candidate("https://a")).unwrap();
        let b = store.add("b1", candidate("https://b")).unwrap();

        store.remove("b1", &a.id).unwrap();
        assert_eq!(store.basket_count(), 1);
        store.remove("b1", &b.id).unwrap();
        assert_eq!(store.basket_count(), 0);
        assert!(store.list("b1", None).is_empty());
        assert!(matches!(store.remove("b1", &b.id), Err(CatFoodError::NotFound { .. })));
    }

    #[test]
    fn test_list_derives_costs() {
        let store = ComparisonStore::new();
        let item = store.add("b1", candidate("https://a")).unwrap();
        let update = ComparisonUpdate {
            kcal_per_100g: Some(390.0),
            weight_kg: Some(2.0),
            price: Some(30_000),
            ..Default::default()
        };
        store.update("b1", &item.id, &update).unwrap();

        let listed = store.list("b1", Some(316.8));
        let derived = listed[0].derived.unwrap();
        assert_eq!(derived.daily_amount_grams, 81.2);
        assert_eq!(derived.price_per_kg, 15_000);
        assert_eq!(derived.daily_cost, 1_219);
        assert_eq!(derived.monthly_cost, 36_570);

        // No target or a non-positive one leaves the stored value.
        assert!(store.list("b1", None)[0].derived.is_none());
        assert!(store.list("b1", Some(0.0))[0].derived.is_none());
    }

    #[test]
    fn test_list_falls_back_to_listing_price() {
        let store = ComparisonStore::new();
        let item = store.add("b1", candidate("https://a")).unwrap();
        let update = ComparisonUpdate {
            kcal_per_100g: Some(400.0),
            weight_kg: Some(2.0),
            ..Default::default()
        };
        store.update("b1", &item.id, &update).unwrap();

        let derived = store.list("b1", Some(400.0))[0].derived.unwrap();
        assert_eq!(derived.price_per_kg, 10_000);
        assert_eq!(derived.daily_cost, 1_000);
    }

    #[test]
    fn test_list_overflowing_cost_is_insufficient_data() {
        let store = ComparisonStore::new();
        let item = store.add("b1", candidate("https://a")).unwrap();
        let update = ComparisonUpdate {
            kcal_per_100g: Some(1e-15),
            weight_kg: Some(2.0),
            price: Some(30_000),
            ..Default::default()
        };
        store.update("b1", &item.id, &update).unwrap();
        assert!(store.list("b1", Some(316.8))[0].derived.is_none());
    }

    #[test]
    fn test_list_insufficient_data() {
        let store = ComparisonStore::new();
        store.add("b1", candidate("https://a")).unwrap();
        assert!(store.list("b1", Some(300.0))[0].derived.is_none());
    }
}
