use serde::Deserialize;

use crate::fetcher::AccountDataSource;
use crate::models::AccountRecord;
use crate::types::FetchError;

/// HTTP client for the lending data API.
pub struct LendingApiClient {
    client: reqwest::Client,
    base_url: String
}

/// Envelope of the account data endpoint. A response without a `data`
/// member decodes to the empty record.
#[derive(Debug, Deserialize)]
pub(super) struct AccountDataResponse {
    #[serde(default)]
    pub(super) data: AccountRecord
}

impl LendingApiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into()
        }
    }
}

impl AccountDataSource for LendingApiClient {
    async fn fetch(&self, wallet: &str) -> Result<AccountRecord, FetchError> {
        let url = format!("{}/lendborrow/getuseraccountdata", self.base_url);

        let response = self.client
            .get(&url)
            .query(&[("address", wallet)])
            .send()
            .await
            .map_err(|error| FetchError::Request {
                wallet: wallet.to_string(),
                reason: error.to_string()
            })?;

        let body: AccountDataResponse = response.json().await.map_err(|error| FetchError::Decode {
            wallet: wallet.to_string(),
            reason: error.to_string()
        })?;

        Ok(body.data)
    }
}
