use std::cmp::Ordering;

use crate::engine::constants::MAX_RECOMMENDATIONS;
use crate::models::Recommendation;

/// The three orderings returned to callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedViews {
    pub by_rank: Vec<Recommendation>,
    pub by_price: Vec<Recommendation>,
    pub by_review_count: Vec<Recommendation>,
}

fn by_score_desc(a: &Recommendation, b: &Recommendation) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Stable sort, highest score first.
pub fn sort_by_score(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(by_score_desc);
}

/// Dense 1-based ranks in current order.
pub fn assign_ranks(recommendations: &mut [Recommendation]) {
    for (i, rec) in recommendations.iter_mut().enumerate() {
        rec.rank = i + 1;
    }
}

/// Build every view from a list already in relevance order.
///
/// All views hold the same entries (capped at `MAX_RECOMMENDATIONS`) and
/// keep their relevance rank. Sorts are stable, so equal keys fall back to
/// relevance order.
pub fn build_views(mut ranked: Vec<Recommendation>) -> RankedViews {
    ranked.truncate(MAX_RECOMMENDATIONS);

    let mut by_price = ranked.clone();
    by_price.sort_by_key(Recommendation::monthly_cost_key);

    let mut by_review_count = ranked.clone();
    by_review_count.sort_by(|a, b| {
        b.review_count
            .cmp(&a.review_count)
            .then_with(|| by_score_desc(a, b))
    });

    RankedViews {
        by_rank: ranked,
        by_price,
        by_review_count,
    }
}
