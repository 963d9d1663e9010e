use crate::models::{FeatureRow, ScoredRow};
use crate::scoring::EPSILON;

/// Health factors above this cap contribute no additional credit.
const HEALTH_FACTOR_CAP: f64 = 2.0;

/// Upper end of the normalized score range.
const SCORE_SCALE: f64 = 1000.0;

/// Weights of the linear raw-score combination.
///
/// `liquidation` is a penalty and is subtracted. The defaults are the
/// production weighting; callers may rebalance per batch.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub repay_to_borrow: f64,
    pub utilization: f64,
    pub health: f64,
    pub liquidation: f64
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            repay_to_borrow: 0.5,
            utilization: 0.2,
            health: 0.3,
            liquidation: 0.3
        }
    }
}

impl ScoreWeights {
    /// Computes the unclamped raw score for one row. May be negative, and
    /// is unbounded below because `utilization_ratio` is unbounded above.
    pub fn raw_score(&self, row: &FeatureRow) -> f64 {
        self.repay_to_borrow * row.repay_to_borrow
            + self.utilization * (1.0 - row.utilization_ratio)
            + self.health * row.health_factor.min(HEALTH_FACTOR_CAP) / HEALTH_FACTOR_CAP
            - self.liquidation * f64::from(row.liquidation_flag)
    }
}

/// Scores a completed batch: raw score per row, then min-max normalization
/// into integers in `[0, 1000]`.
///
/// Normalization is defined only relative to this batch, so the function
/// takes the whole collection at once. A single-row batch normalizes to
/// score 0 (the raw extremes coincide and the epsilon term dominates); an
/// empty batch yields an empty result. Deterministic for a given input.
pub fn score_batch(rows: Vec<FeatureRow>, weights: &ScoreWeights) -> Vec<ScoredRow> {
    if rows.is_empty() {
        return Vec::new();
    }

    let raw_scores: Vec<f64> = rows.iter().map(|row| weights.raw_score(row)).collect();

    let min_score = raw_scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max_score = raw_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max_score - min_score + EPSILON;

    rows.into_iter()
        .zip(raw_scores)
        .map(|(row, raw_score)| {
            // The quotient is non-negative, so the cast truncates toward
            // zero exactly like a floor. Truncation, not rounding.
            let score = ((raw_score - min_score) / span * SCORE_SCALE) as u32;

            ScoredRow {
                wallet_id: row.wallet_id,
                repay_to_borrow: row.repay_to_borrow,
                utilization_ratio: row.utilization_ratio,
                health_factor: row.health_factor,
                liquidation_flag: row.liquidation_flag,
                raw_score,
                score
            }
        })
        .collect()
}
