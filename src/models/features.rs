use crate::types::WalletId;

/// Derived risk features for one wallet.
///
/// Produced once by the feature extractor and never mutated. The two ratios
/// are computed with an epsilon denominator offset, so they are finite even
/// when the underlying amounts are zero.
#[derive(Debug, Clone)]
pub struct FeatureRow {
    pub wallet_id: WalletId,
    /// Lifetime repayments relative to lifetime borrowing.
    pub repay_to_borrow: f64,
    /// Borrowed amount relative to posted collateral. Unbounded above.
    pub utilization_ratio: f64,
    /// Protocol health factor; values below 1.0 mean imminent liquidation.
    pub health_factor: f64,
    /// 1 when `health_factor < 1.0`, else 0.
    pub liquidation_flag: u8
}

/// A feature row with its scoring results attached.
///
/// `raw_score` is the unclamped linear combination; `score` is the
/// batch-normalized integer in `[0, 1000]`. Scores are only comparable
/// within the batch that produced them.
#[derive(Debug, Clone)]
pub struct ScoredRow {
    pub wallet_id: WalletId,
    pub repay_to_borrow: f64,
    pub utilization_ratio: f64,
    pub health_factor: f64,
    pub liquidation_flag: u8,
    pub raw_score: f64,
    pub score: u32
}
