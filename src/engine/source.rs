use async_trait::async_trait;

use crate::engine::energy::EnergyResult;
use crate::models::{Recommendation, ValidatedRequest};

/// Everything a candidate source needs to evaluate one request.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationInput<'a> {
    pub request: &'a ValidatedRequest,
    pub energy: &'a EnergyResult,
}

/// Outcome of evaluating candidates.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Ordered and ranked, at most five entries.
    Ranked(Vec<Recommendation>),
    /// No usable candidates; the message explains why. Not an error.
    Unavailable(String),
}

/// Where recommendations come from (built-in catalog or shopping search).
#[async_trait]
pub trait CandidateSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn evaluate(&self, input: &EvaluationInput<'_>) -> Evaluation;
}
