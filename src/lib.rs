pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod search;
pub mod state;

pub use engine::RecommendationEngine;
pub use error::{CatFoodError, Result};
pub use models::{RecommendRequest, RecommendResponse, Recommendation};
pub use state::ComparisonStore;
