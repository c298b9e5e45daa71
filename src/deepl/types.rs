//! Request and response bodies of DeepL's `v2/translate` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TranslateRequest<'a> {
    pub text: Vec<&'a str>,
    pub target_lang: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translations: Vec<TranslatedText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslatedText {
    #[serde(default)]
    pub detected_source_language: Option<String>,
    pub text: String,
}

/// Body DeepL sends alongside error statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Map a Lokalise language code onto DeepL's target code
/// (`fr` → `FR`, `pt_BR` → `PT-BR`).
pub fn target_lang(language_iso: &str) -> String {
    language_iso.replace('_', "-").to_uppercase()
}
