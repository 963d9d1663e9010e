use std::path::PathBuf;
use std::time::Duration;

/// Run configuration for the scoring pipeline.
///
/// Passed into the components at construction instead of living as global
/// constants. `Default` carries the production values; embedders and tests
/// construct their own.
#[derive(Debug, Clone)]
pub struct RiskConfig {
    /// Base URL of the lending data API.
    pub api_base: String,
    /// Full URL of the spreadsheet holding the wallet list.
    pub sheet_url: String,
    /// Worksheet that carries the `wallet` column.
    pub worksheet: String,
    /// Local JSON file granting spreadsheet read access.
    pub credentials_path: PathBuf,
    /// Destination CSV, overwritten on every run.
    pub output_path: PathBuf,
    /// Fixed pause after every account data request.
    pub throttle_delay: Duration,
    /// Deadline for each outbound HTTP request.
    pub request_timeout: Duration
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.expand.network".to_string(),
            sheet_url: "https://docs.google.com/spreadsheets/d/1ZzaeMgNYnxvriYYpe8PE7uMEblTI0GV5GIVUnsP-sBs/edit#gid=0".to_string(),
            worksheet: "Sheet1".to_string(),
            credentials_path: PathBuf::from("credentials.json"),
            output_path: PathBuf::from("wallet_risk_scores.csv"),
            throttle_delay: Duration::from_millis(200),
            request_timeout: Duration::from_secs(10)
        }
    }
}
