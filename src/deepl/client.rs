use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::error::DeepLError;
use super::types::{ErrorBody, TranslateRequest, TranslateResponse, target_lang};

const FREE_API_URL: &str = "https://api-free.deepl.com";
const PRO_API_URL: &str = "https://api.deepl.com";

/// Anything that turns English text into another language.
pub trait MachineTranslator {
    async fn translate(&self, text: &str, language_iso: &str) -> Result<String, DeepLError>;
}

pub struct DeepLClient {
    auth_key: String,
    client: Client,
    base_url: String,
}

impl DeepLClient {
    /// Free-plan keys end in `:fx` and must use the free endpoint.
    pub fn new(auth_key: String, timeout: Duration) -> Result<Self, DeepLError> {
        let base_url = if auth_key.ends_with(":fx") {
            FREE_API_URL
        } else {
            PRO_API_URL
        };
        Self::with_base_url(auth_key, base_url.to_string(), timeout)
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(
        auth_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, DeepLError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            auth_key,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl MachineTranslator for DeepLClient {
    async fn translate(&self, text: &str, language_iso: &str) -> Result<String, DeepLError> {
        let req = TranslateRequest {
            text: vec![text],
            target_lang: target_lang(language_iso),
        };
        let response = self
            .client
            .post(format!("{}/v2/translate", self.base_url))
            .header("Authorization", format!("DeepL-Auth-Key {}", self.auth_key))
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "unknown error".to_string());
            if status.as_u16() == 456 {
                return Err(DeepLError::QuotaExceeded(message));
            }
            return Err(DeepLError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<TranslateResponse>()
            .await
            .map_err(DeepLError::Decode)?;
        let translated = body
            .translations
            .into_iter()
            .next()
            .ok_or(DeepLError::EmptyResponse)?;
        debug!(
            target_lang = %req.target_lang,
            detected = translated.detected_source_language.as_deref().unwrap_or("?"),
            "machine translation received"
        );
        Ok(translated.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> DeepLClient {
        DeepLClient::with_base_url("key".into(), server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn free_keys_use_free_endpoint() {
        let free = DeepLClient::new("abc:fx".into(), Duration::from_secs(5)).unwrap();
        assert_eq!(free.base_url(), FREE_API_URL);
        let pro = DeepLClient::new("abc".into(), Duration::from_secs(5)).unwrap();
        assert_eq!(pro.base_url(), PRO_API_URL);
    }

    #[tokio::test]
    async fn translate_returns_first_translation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .and(header("Authorization", "DeepL-Auth-Key key"))
            .and(body_json(json!({"text": ["Hello"], "target_lang": "PT-BR"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "translations": [{"detected_source_language": "EN", "text": "Olá"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).translate("Hello", "pt_BR").await.unwrap();
        assert_eq!(text, "Olá");
    }

    #[tokio::test]
    async fn translate_maps_quota_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .respond_with(ResponseTemplate::new(456).set_body_json(json!({"message": "Quota exceeded"})))
            .mount(&server)
            .await;

        let err = client_for(&server).translate("Hello", "fr").await.unwrap_err();
        assert!(matches!(err, DeepLError::QuotaExceeded(ref m) if m == "Quota exceeded"));
    }

    #[tokio::test]
    async fn translate_reports_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = client_for(&server).translate("Hello", "fr").await.unwrap_err();
        assert_eq!(err.to_string(), "API error (status 403): unknown error");
    }

    #[tokio::test]
    async fn translate_reports_malformed_body_as_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).translate("Hello", "fr").await.unwrap_err();
        assert!(matches!(err, DeepLError::Decode(_)));
        assert!(err.to_string().starts_with("invalid response body"));
    }

    #[tokio::test]
    async fn translate_rejects_empty_translation_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translations": []})))
            .mount(&server)
            .await;

        let err = client_for(&server).translate("Hello", "fr").await.unwrap_err();
        assert!(matches!(err, DeepLError::EmptyResponse));
    }
}
