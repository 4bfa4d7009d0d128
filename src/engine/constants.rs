// ─────────────────────────────────────────────────────────────────────────────
// Energy model (NRC / AAFCO)
// ─────────────────────────────────────────────────────────────────────────────

/// RER = RER_COEFFICIENT × weight^RER_EXPONENT kcal/day.
pub const RER_COEFFICIENT: f64 = 70.0;
pub const RER_EXPONENT: f64 = 0.75;

/// Ages below this (months) are newborn kittens.
pub const GROWING_KITTEN_MIN_MONTHS: u32 = 4;

/// Ages below this (months) are kittens.
pub const ADULT_MIN_MONTHS: u32 = 12;

/// Ages at or above this (months, 7 years) are seniors.
pub const SENIOR_MIN_MONTHS: u32 = 84;

pub const NEWBORN_KITTEN_FACTOR: f64 = 3.0;
pub const GROWING_KITTEN_FACTOR: f64 = 2.5;
pub const SENIOR_FACTOR: f64 = 1.4;
pub const NEUTERED_MALE_FACTOR: f64 = 1.6;
pub const NEUTERED_FEMALE_FACTOR: f64 = 1.4;
pub const INTACT_MALE_FACTOR: f64 = 1.8;
pub const INTACT_FEMALE_FACTOR: f64 = 1.6;

// ─────────────────────────────────────────────────────────────────────────────
// Cost and ranking
// ─────────────────────────────────────────────────────────────────────────────

pub const DAYS_PER_MONTH: u64 = 30;

/// Maximum entries in every recommendation view.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Catalog score weights: protein outweighs budget headroom.
pub const PROTEIN_WEIGHT: f64 = 0.6;
pub const BUDGET_HEADROOM_WEIGHT: f64 = 0.4;

/// Protein percent tiers used in recommendation reasons.
pub const HIGH_PROTEIN_PERCENT: f64 = 38.0;
pub const BALANCED_PROTEIN_PERCENT: f64 = 33.0;

/// Budget used (percent) tiers used in recommendation reasons.
pub const BUDGET_SAVING_MAX_PERCENT: u64 = 50;
pub const REASONABLE_PRICE_MAX_PERCENT: u64 = 75;

/// Search results carry no nutrition, so they share a neutral score.
pub const SEARCH_SCORE_PLACEHOLDER: f64 = 0.0;

// ─────────────────────────────────────────────────────────────────────────────
// Search listing estimates
// ─────────────────────────────────────────────────────────────────────────────

/// Result-count hint sent to the shopping search provider.
pub const SEARCH_RESULT_HINT: usize = 30;

pub const DEFAULT_KCAL_PER_100G_DRY: f64 = 385.0;
pub const DEFAULT_KCAL_PER_100G_WET: f64 = 85.0;

/// Package weight assumed when the title names none.
pub const DEFAULT_WEIGHT_KG_DRY: f64 = 2.0;
pub const DEFAULT_WEIGHT_KG_WET: f64 = 0.085;

/// Price-per-kg multiplier when no usable weight was parsed.
/// Coarse approximation with no documented derivation.
pub const UNKNOWN_WEIGHT_PRICE_MULTIPLIER: u64 = 50;

/// Shortest usable listing title, in characters.
pub const MIN_TITLE_CHARS: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Comparison lists
// ─────────────────────────────────────────────────────────────────────────────

pub const MAX_COMPARISON_ITEMS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Caller-facing text
// ─────────────────────────────────────────────────────────────────────────────

pub const CALCULATION_SOURCE: &str = "Daily energy follows the NRC (National Research Council) \
and AAFCO feeding guidance: resting energy requirement RER = 70 × body weight (kg)^0.75 kcal/day, \
scaled by a life-stage factor to give the maintenance energy requirement (MER). \
Portions and costs for search results are estimates from default energy densities \
(dry 385 kcal/100g, wet 85 kcal/100g) and the package size in the listing title; \
enter the label values on the comparison list for exact figures.";

pub const REVIEW_COUNT_NOTE: &str =
    "Review counts are not provided by the product source, so this view keeps the recommendation order.";

pub const SEARCH_UNAVAILABLE_MESSAGE: &str = "Shopping search is not configured. \
Set NAVER_CLIENT_ID and NAVER_CLIENT_SECRET, or use --source catalog.";

pub const SEARCH_EMPTY_MESSAGE: &str = "No search results. Try a different search query.";

pub const CATALOG_EMPTY_MESSAGE: &str = "The product catalog is empty.";
