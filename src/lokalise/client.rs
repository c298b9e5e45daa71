use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error};

use super::error::LokaliseError;
use super::types::{ErrorBody, Key, KeysPage, TranslationUpdate, UpdatedTranslation};

const API_URL: &str = "https://api.lokalise.com/api2/projects";

/// The remote side of a sync run: where keys come from and where machine
/// translations are written back.
pub trait TranslationStore {
    /// Fetch every key with its translations, stopping early on the first
    /// failed page.
    async fn fetch_all_keys(&self) -> Vec<Key>;

    /// Overwrite the text of one translation.
    async fn update_translation(
        &self,
        translation_id: u64,
        update: &TranslationUpdate,
    ) -> Result<UpdatedTranslation, LokaliseError>;
}

pub struct LokaliseClient {
    api_token: String,
    client: Client,
    base_url: String,
}

impl LokaliseClient {
    pub fn new(
        api_token: String,
        project_id: &str,
        timeout: Duration,
    ) -> Result<Self, LokaliseError> {
        Self::with_base_url(api_token, format!("{API_URL}/{project_id}"), timeout)
    }

    /// Create a client pointing at a custom project URL (useful for testing).
    pub fn with_base_url(
        api_token: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, LokaliseError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            api_token,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a single page of keys, translations included. Lokalise is asked
    /// to drop fully translated keys, but the caller still filters locally.
    pub async fn fetch_keys_page(&self, page: u32) -> Result<Vec<Key>, LokaliseError> {
        let page = page.to_string();
        let response = self
            .client
            .get(format!("{}/keys", self.base_url))
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("X-Api-Token", &self.api_token)
            .query(&[
                ("include_translations", "1"),
                ("filter_untranslated", "1"),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let response = check_status(response).await?;
        let body = response
            .json::<KeysPage>()
            .await
            .map_err(LokaliseError::Decode)?;
        Ok(body.keys)
    }

    async fn put_translation(
        &self,
        translation_id: u64,
        update: &TranslationUpdate,
    ) -> Result<UpdatedTranslation, LokaliseError> {
        let response = self
            .client
            .put(format!("{}/translations/{translation_id}", self.base_url))
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("X-Api-Token", &self.api_token)
            .json(update)
            .send()
            .await?;

        let response = check_status(response).await?;
        if response.status() != StatusCode::OK {
            return Err(LokaliseError::UnexpectedStatus(response.status().as_u16()));
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(LokaliseError::Decode)?;
        Ok(UpdatedTranslation::from_body(body))
    }
}

impl TranslationStore for LokaliseClient {
    async fn fetch_all_keys(&self) -> Vec<Key> {
        let mut all_keys = Vec::new();
        let mut page = 1;

        loop {
            match self.fetch_keys_page(page).await {
                Ok(keys) if keys.is_empty() => break,
                Ok(keys) => {
                    debug!(page, count = keys.len(), "fetched key page");
                    all_keys.extend(keys);
                    page += 1;
                }
                Err(e) => {
                    error!("Error fetching keys: {e}");
                    break;
                }
            }
        }

        all_keys
    }

    async fn update_translation(
        &self,
        translation_id: u64,
        update: &TranslationUpdate,
    ) -> Result<UpdatedTranslation, LokaliseError> {
        let updated = self.put_translation(translation_id, update).await?;
        let written = updated.translation.as_ref();
        debug!(
            translation_id,
            confirmed_id = ?written.and_then(|t| t.translation_id),
            unverified = ?written.and_then(|t| t.is_unverified),
            project_id = updated.project_id.as_deref().unwrap_or_default(),
            "translation written"
        );
        Ok(updated)
    }
}

/// Turn a non-2xx response into [`LokaliseError::Api`], reading the message
/// from Lokalise's error envelope when there is one.
async fn check_status(response: Response) -> Result<Response, LokaliseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error.message)
        .unwrap_or_else(|| "Unknown error".to_string());
    Err(LokaliseError::Api {
        status: status.as_u16(),
        message,
    })
}
