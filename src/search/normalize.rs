//! Parsing of untrusted third-party shopping listings.
//!
//! Titles are free text with search-term emphasis markup, prices arrive as
//! strings, and package sizes only appear inside titles. Everything that can
//! go wrong here degrades to a default or drops the listing.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::constants::*;
use crate::engine::cost;
use crate::models::{FoodType, NormalizedListing, RawListing};

static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("markup pattern should be valid"));

static WET_HINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\bcans?\b|canned|pouch|\bwet\b|\bsoft\b|tuna|p[aâ]t[eé]|캔|파우치|습식|웻|소프트|참치)")
        .expect("wet food pattern should be valid")
});

static WEIGHT_KG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:kg|kilograms?|키로)").expect("kg pattern should be valid")
});

static WEIGHT_G: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:g|grams?|그램)\b").expect("gram pattern should be valid")
});

/// Title without emphasis markup, trimmed.
pub fn strip_title(title: &str) -> String {
    MARKUP.replace_all(title, "").trim().to_string()
}

/// Lowest price as a positive integer; thousands separators are ignored.
pub fn parse_price(raw: Option<&str>) -> Option<u64> {
    let cleaned: String = raw?.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<i64>() {
        Ok(price) if price > 0 => Some(price as u64),
        _ => None,
    }
}

/// Wet food when the title or category hints mention cans, pouches, tuna...
pub fn is_wet(title: &str, category1: Option<&str>, category2: Option<&str>) -> bool {
    let haystack = format!(
        "{} {} {}",
        title,
        category1.unwrap_or_default(),
        category2.unwrap_or_default()
    );
    WET_HINT.is_match(&haystack)
}

pub fn classify(title: &str, category1: Option<&str>, category2: Option<&str>) -> FoodType {
    if is_wet(title, category1, category2) {
        FoodType::Wet
    } else {
        FoodType::Dry
    }
}

/// Package weight from the title: kilograms first, then grams, else a
/// per-type default.
pub fn parse_weight_kg(title: &str, food_type: FoodType) -> f64 {
    if let Some(kg) = WEIGHT_KG
        .captures(title)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
    {
        return kg;
    }
    if let Some(g) = WEIGHT_G
        .captures(title)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
    {
        return g as f64 / 1000.0;
    }
    match food_type {
        FoodType::Dry => DEFAULT_WEIGHT_KG_DRY,
        FoodType::Wet => DEFAULT_WEIGHT_KG_WET,
    }
}

/// Energy density assumed for ranking estimates only.
pub fn default_kcal_per_100g(food_type: FoodType) -> f64 {
    match food_type {
        FoodType::Dry => DEFAULT_KCAL_PER_100G_DRY,
        FoodType::Wet => DEFAULT_KCAL_PER_100G_WET,
    }
}

/// Price per kg from the listing price; with no usable weight falls back to
/// `UNKNOWN_WEIGHT_PRICE_MULTIPLIER` times the price.
pub fn estimated_price_per_kg(low_price: u64, weight_kg: f64) -> u64 {
    cost::price_per_kg(low_price, weight_kg)
        .unwrap_or_else(|| low_price.saturating_mul(UNKNOWN_WEIGHT_PRICE_MULTIPLIER))
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Turn a raw listing into structured estimates, or `None` if unusable
/// (title shorter than two characters, missing or non-positive price).
pub fn normalize_listing(raw: &RawListing) -> Option<NormalizedListing> {
    let title = strip_title(raw.title.as_deref().unwrap_or_default());
    if title.chars().count() < MIN_TITLE_CHARS {
        tracing::debug!(raw_title = ?raw.title, "Skipped listing with unusable title");
        return None;
    }

    let Some(low_price) = parse_price(raw.low_price.as_deref()) else {
        tracing::debug!(%title, raw_price = ?raw.low_price, "Skipped listing without a price");
        return None;
    };

    let food_type = classify(&title, raw.category1.as_deref(), raw.category2.as_deref());
    let weight_kg = parse_weight_kg(&title, food_type);

    Some(NormalizedListing {
        link: non_blank(raw.link.as_ref()),
        image: non_blank(raw.image.as_ref()),
        brand: non_blank(raw.brand.as_ref()).or_else(|| non_blank(raw.maker.as_ref())),
        low_price,
        food_type,
        weight_kg,
        kcal_per_100g: default_kcal_per_100g(food_type),
        price_per_kg: estimated_price_per_kg(low_price, weight_kg),
        title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, price: &str) -> RawListing {
        RawListing {
            title: Some(title.to_string()),
            link: Some("https://shop.example/p/1".to_string()),
            low_price: Some(price.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_strip_title() {
        assert_eq!(strip_title("<b>Cat</b> food <b>2kg</b> "), "Cat food 2kg");
        assert_eq!(strip_title("<b></b>"), "");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(Some("25900")), Some(25_900));
        assert_eq!(parse_price(Some(" 1,234,500 ")), Some(1_234_500));
        assert_eq!(parse_price(Some("0")), None);
        assert_eq!(parse_price(Some("-10")), None);
        assert_eq!(parse_price(Some("")), None);
        assert_eq!(parse_price(Some("free")), None);
        assert_eq!(parse_price(None), None);
    }

    #[test]
    fn test_wet_keywords() {
        assert!(is_wet("Tuna in jelly 24 pack", None, None));
        assert!(is_wet("Chicken pouch 85g", None, None));
        assert!(is_wet("Canned salmon", None, None));
        assert!(is_wet("Salmon 12 cans", None, None));
        assert!(is_wet("Wet food variety", None, None));
        assert!(is_wet("Turkey PATE", None, None));
        assert!(is_wet("고양이 참치 캔", None, None));
        assert!(is_wet("고양이 간식 파우치", None, None));
    }

    #[test]
    fn test_wet_from_category_hint() {
        assert!(is_wet("Chicken recipe", Some("Pet"), Some("Wet food")));
        assert!(!is_wet("Chicken recipe", Some("Pet"), Some("Dry food")));
    }

    #[test]
    fn test_dry_default() {
        assert!(!is_wet("Indoor adult kibble 2kg", None, None));
        assert!(!is_wet("Cancer care formula", None, None));
        assert!(!is_wet("Ageing 12+ softer kibble 2kg", None, None));
        assert!(!is_wet("Microsoft cat bowl", None, None));
        assert!(is_wet("Soft chunks in gravy", None, None));
        assert_eq!(classify("Indoor adult kibble", None, None), FoodType::Dry);
    }

    #[test]
    fn test_weight_kilograms() {
        assert_eq!(parse_weight_kg("Adult formula 2kg", FoodType::Dry), 2.0);
        assert_eq!(parse_weight_kg("Adult formula 1.5 KG", FoodType::Dry), 1.5);
        assert_eq!(parse_weight_kg("고양이 사료 7키로", FoodType::Dry), 7.0);
    }

    #[test]
    fn test_weight_grams() {
        assert_eq!(parse_weight_kg("Chicken pouch 85g", FoodType::Wet), 0.085);
        assert_eq!(parse_weight_kg("Kibble 400 G bag", FoodType::Dry), 0.4);
        assert_eq!(parse_weight_kg("고양이 캔 160그램", FoodType::Wet), 0.16);
    }

    #[test]
    fn test_weight_prefers_kilograms() {
        assert_eq!(parse_weight_kg("2kg (500g x 4)", FoodType::Dry), 2.0);
    }

    #[test]
    fn test_weight_defaults() {
        assert_eq!(parse_weight_kg("Adult formula", FoodType::Dry), DEFAULT_WEIGHT_KG_DRY);
        assert_eq!(parse_weight_kg("Tuna pouch", FoodType::Wet), DEFAULT_WEIGHT_KG_WET);
        // Glued to a word: no boundary, not a weight.
        assert_eq!(parse_weight_kg("Pack of 300gx12", FoodType::Dry), DEFAULT_WEIGHT_KG_DRY);
    }

    #[test]
    fn test_default_kcal() {
        assert_eq!(default_kcal_per_100g(FoodType::Dry), 385.0);
        assert_eq!(default_kcal_per_100g(FoodType::Wet), 85.0);
    }

    #[test]
    fn test_price_per_kg_fallback() {
        assert_eq!(estimated_price_per_kg(20_000, 2.0), 10_000);
        assert_eq!(estimated_price_per_kg(1_000, 0.0), 50_000);
    }

    #[test]
    fn test_normalize_listing() {
        let mut raw = listing("<b>Cat</b> food salmon 2kg", "25,900");
        raw.maker = Some("Acme Foods".to_string());
        raw.brand = Some("  ".to_string());

        let n = normalize_listing(&raw).unwrap();
        assert_eq!(n.title, "Cat food salmon 2kg");
        assert_eq!(n.low_price, 25_900);
        assert_eq!(n.food_type, FoodType::Dry);
        assert_eq!(n.weight_kg, 2.0);
        assert_eq!(n.price_per_kg, 12_950);
        assert_eq!(n.brand.as_deref(), Some("Acme Foods"));
    }

    #[test]
    fn test_normalize_skips_bad_listings() {
        assert!(normalize_listing(&listing("<b>A</b>", "10000")).is_none());
        assert!(normalize_listing(&listing("Cat food", "")).is_none());
        assert!(normalize_listing(&listing("Cat food", "0")).is_none());
        assert!(normalize_listing(&RawListing::default()).is_none());
    }

    #[test]
    fn test_zero_kilograms_uses_price_fallback() {
        let n = normalize_listing(&listing("Sample 0kg", "500")).unwrap();
        assert_eq!(n.weight_kg, 0.0);
        assert_eq!(n.price_per_kg, 25_000);
    }

    #[test]
    fn test_huge_price_saturates() {
        let n = normalize_listing(&listing("Sample 0kg", "400000000000000000")).unwrap();
        assert_eq!(n.price_per_kg, u64::MAX);
        assert!(cost::estimate(316.8, n.kcal_per_100g, n.price_per_kg).is_none());
    }
}
