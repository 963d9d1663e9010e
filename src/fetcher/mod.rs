mod lending_client;
mod throttle;
#[cfg(test)]
mod tests;

use crate::models::AccountRecord;
use crate::types::FetchError;

pub use lending_client::LendingApiClient;
pub use throttle::Throttle;

/// Per-wallet account data source.
pub trait AccountDataSource {
    /// Retrieves the raw account record for one wallet. One outbound
    /// request per call, no retries; the driver degrades a failure to an
    /// empty record so a single bad wallet never aborts the batch.
    async fn fetch(&self, wallet: &str) -> Result<AccountRecord, FetchError>;
}
