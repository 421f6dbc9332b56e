//! Supabase REST backend for the contact store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::pipeline::types::ContactSubmission;
use crate::store::ContactStore;

/// Request timeout for store calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Supabase client — inserts contact records through the PostgREST API.
pub struct SupabaseStore {
    base_url: String,
    api_key: secrecy::SecretString,
    table: String,
    client: Client,
}

impl SupabaseStore {
    /// Create a store client for the given table.
    pub fn new(config: StoreConfig, table: impl Into<String>) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            table: table.into(),
            client,
        })
    }

    fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[async_trait]
impl ContactStore for SupabaseStore {
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        let url = self.insert_url();
        tracing::debug!(table = %self.table, "Inserting contact record");

        // PostgREST takes an array of rows even for a single insert
        let response = self
            .client
            .post(&url)
            .header("apikey", self.api_key.expose_secret())
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Prefer", "return=minimal")
            .json(&[submission])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        tracing::debug!(table = %self.table, "Contact record stored");
        Ok(())
    }
}
