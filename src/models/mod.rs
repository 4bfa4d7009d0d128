pub mod cat;
pub mod comparison;
pub mod food;
pub mod listing;
pub mod recommendation;
pub mod request;

pub use cat::{CatProfile, LifeStage, Sex};
pub use comparison::{ComparisonCandidate, ComparisonItem, ComparisonUpdate, DerivedCost};
pub use food::{FoodItem, FoodLifeStage, FoodType};
pub use listing::{NormalizedListing, RawListing, SearchResponse};
pub use recommendation::{Figure, RecommendResponse, Recommendation};
pub use request::{RecommendRequest, ValidatedRequest};
