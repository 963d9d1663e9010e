mod errors;

pub use errors::{ExtractError, FetchError, SinkError, SourceError};

/// Opaque wallet address string; the pipeline performs no format validation.
pub type WalletId = String;
