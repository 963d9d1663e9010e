use std::time::Duration;

use tracing::{debug, info, warn};

use crate::fetcher::{AccountDataSource, Throttle};
use crate::models::AccountRecord;
use crate::scoring::{ScoreWeights, extract, score_batch};
use crate::sink::ResultSink;
use crate::source::WalletSource;

const DEFAULT_THROTTLE_DELAY: Duration = Duration::from_millis(200);

/// Sequential wallet risk scoring pipeline.
///
/// Wallets are fetched and extracted one at a time in source order; the
/// batch is built by append and scored only once it is complete, because
/// normalization needs the batch extremes. Per-wallet failures degrade or
/// drop that wallet; only a sink failure aborts the run.
pub struct RiskEngine<W, A, K> {
    source: W,
    fetcher: A,
    sink: K,
    throttle: Throttle,
    weights: ScoreWeights
}

impl<W, A, K> RiskEngine<W, A, K>
where
    W: WalletSource,
    A: AccountDataSource,
    K: ResultSink
{
    /// Creates an engine over the provided stages with the production
    /// throttle delay and score weights.
    pub fn new(source: W, fetcher: A, sink: K) -> Self {
        Self {
            source,
            fetcher,
            sink,
            throttle: Throttle::new(DEFAULT_THROTTLE_DELAY),
            weights: ScoreWeights::default()
        }
    }

    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Runs the pipeline end to end: list wallets, fetch and extract each
    /// one, score the batch, write the results.
    ///
    /// # Errors
    /// Only a sink failure (unwritable output destination) is returned;
    /// every other failure is recovered locally and logged.
    pub async fn run(&self) -> anyhow::Result<()> {
        let wallets = match self.source.list_wallets().await {
            Ok(wallets) => wallets,
            Err(error) => {
                warn!("Wallet source unavailable, nothing to score: {error}");
                return Ok(());
            }
        };

        if wallets.is_empty() {
            info!("Wallet source returned no wallets, nothing to score");
            return Ok(());
        }

        info!("Scoring {} wallets", wallets.len());

        let mut batch = Vec::with_capacity(wallets.len());

        for wallet in &wallets {
            let record = match self.fetcher.fetch(wallet).await {
                Ok(record) => record,
                Err(error) => {
                    warn!("{error}");
                    AccountRecord::default()
                }
            };

            // Fixed pause after every call, even failed ones.
            self.throttle.pause().await;

            match extract(wallet, &record) {
                Ok(row) => {
                    debug!("Extracted features for wallet [{wallet}]");
                    batch.push(row);
                }
                Err(error) => warn!("Dropping wallet from batch: {error}")
            }
        }

        if batch.is_empty() {
            // Every wallet failed extraction: the output is still
            // replaced, as a header-only file.
            warn!("No wallet produced usable features, writing empty output");
        }

        let scored = score_batch(batch, &self.weights);

        self.sink.write(&scored)?;

        info!("Scored {} of {} wallets", scored.len(), wallets.len());

        Ok(())
    }
}
