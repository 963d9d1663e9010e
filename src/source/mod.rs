mod sheet_source;
#[cfg(test)]
mod tests;

use crate::types::{SourceError, WalletId};

pub use sheet_source::SheetWalletSource;

/// Provider of the wallet identifiers to score, in batch order.
pub trait WalletSource {
    /// Retrieves the wallet list. Any error means "no work": the driver
    /// logs it and ends the run cleanly instead of aborting.
    async fn list_wallets(&self) -> Result<Vec<WalletId>, SourceError>;
}
