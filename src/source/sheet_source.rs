use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::source::WalletSource;
use crate::types::{SourceError, WalletId};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";
const WALLET_COLUMN: &str = "wallet";

/// Wallet list adapter backed by a Google Sheets worksheet.
///
/// The worksheet must carry a header row with a `wallet` column; every
/// other column is ignored. Credentials are read from a local JSON file on
/// every call, so a missing or revoked token is a fetch-time failure
/// rather than a startup failure.
pub struct SheetWalletSource {
    client: reqwest::Client,
    sheet_url: String,
    worksheet: String,
    credentials_path: PathBuf
}

/// Bearer token granting read access to the spreadsheet.
#[derive(Debug, Deserialize)]
struct SheetCredentials {
    token: String
}

/// Values payload of the Sheets v4 API: rows of formatted cell strings.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>
}

impl SheetWalletSource {
    pub fn new(client: reqwest::Client, sheet_url: impl Into<String>, worksheet: impl Into<String>, credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            sheet_url: sheet_url.into(),
            worksheet: worksheet.into(),
            credentials_path: credentials_path.into()
        }
    }

    fn load_credentials(&self) -> Result<SheetCredentials, SourceError> {
        let raw = fs::read_to_string(&self.credentials_path).map_err(|error| SourceError::Credentials {
            path: self.credentials_path.clone(),
            reason: error.to_string()
        })?;

        serde_json::from_str(&raw).map_err(|error| SourceError::Credentials {
            path: self.credentials_path.clone(),
            reason: error.to_string()
        })
    }
}

impl WalletSource for SheetWalletSource {
    async fn list_wallets(&self) -> Result<Vec<WalletId>, SourceError> {
        let credentials = self.load_credentials()?;
        let spreadsheet_id = spreadsheet_id_from_url(&self.sheet_url)?;
        let url = format!("{SHEETS_API_BASE}/{spreadsheet_id}/values/{}", self.worksheet);

        let response = self.client
            .get(&url)
            .bearer_auth(&credentials.token)
            .send()
            .await?
            .error_for_status()?;

        let body: ValuesResponse = response.json().await?;

        debug!("Worksheet [{}] returned {} rows", self.worksheet, body.values.len());

        wallets_from_rows(&self.worksheet, body.values)
    }
}

/// Extracts the spreadsheet id from a `.../d/<id>/...` sheet URL.
pub(super) fn spreadsheet_id_from_url(url: &str) -> Result<String, SourceError> {
    let malformed = || SourceError::MalformedSheetUrl { url: url.to_string() };

    let (_, rest) = url.split_once("/d/").ok_or_else(malformed)?;
    let id = rest.split(['/', '?', '#']).next().unwrap_or_default();

    if id.is_empty() {
        return Err(malformed());
    }

    Ok(id.to_string())
}

/// Locates the `wallet` header column and collects its cell values in row
/// order. Rows with a missing or blank wallet cell are skipped.
pub(super) fn wallets_from_rows(worksheet: &str, rows: Vec<Vec<String>>) -> Result<Vec<WalletId>, SourceError> {
    let missing_column = || SourceError::MissingWalletColumn {
        worksheet: worksheet.to_string()
    };

    let mut rows = rows.into_iter();
    let header = rows.next().ok_or_else(missing_column)?;
    let column = header.iter()
        .position(|name| name.trim() == WALLET_COLUMN)
        .ok_or_else(missing_column)?;

    Ok(rows
        .filter_map(|row| {
            row.get(column)
                .map(|cell| cell.trim())
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
        })
        .collect())
}
