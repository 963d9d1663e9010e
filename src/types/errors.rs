use std::path::PathBuf;

use thiserror::Error;

use crate::types::WalletId;

/// The wallet list could not be retrieved. The driver treats every variant
/// as "no work" and ends the run cleanly.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Credentials unavailable at [{}]: {reason}", path.display())]
    Credentials {
        path: PathBuf,
        reason: String
    },
    #[error("Spreadsheet URL [{url}] has no /d/<id>/ segment")]
    MalformedSheetUrl {
        url: String
    },
    #[error("Spreadsheet request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Worksheet [{worksheet}] has no 'wallet' column")]
    MissingWalletColumn {
        worksheet: String
    }
}

/// A per-wallet account data request failed. The driver substitutes an
/// empty record and the batch continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Account data request failed for wallet [{wallet}]: {reason}")]
    Request {
        wallet: WalletId,
        reason: String
    },
    #[error("Account data for wallet [{wallet}] could not be decoded: {reason}")]
    Decode {
        wallet: WalletId,
        reason: String
    }
}

/// An account field could not be turned into a usable number. The wallet
/// is dropped from the batch.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Field [{field}] for wallet [{wallet}] is not numeric: {value}")]
    NonNumericField {
        wallet: WalletId,
        field: &'static str,
        value: String
    },
    #[error("Field [{field}] for wallet [{wallet}] is not finite")]
    NonFiniteField {
        wallet: WalletId,
        field: &'static str
    }
}

impl ExtractError {
    pub fn non_numeric(wallet: &str, field: &'static str, value: &serde_json::Value) -> Self {
        Self::NonNumericField {
            wallet: wallet.to_string(),
            field,
            value: value.to_string()
        }
    }
}

/// The output destination could not be written. This is the only failure
/// class that aborts the run.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Could not create output file [{}]: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Could not write scores to [{}]: {source}", path.display())]
    Write {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Could not flush output file [{}]: {source}", path.display())]
    Flush {
        path: PathBuf,
        source: std::io::Error
    }
}
