//! Data types for the Lokalise API v2 keys and translations endpoints.
//!
//! Only the fields this tool reads are modelled; everything else in the
//! payloads is ignored by serde.

use serde::{Deserialize, Serialize};

/// One page of `GET /keys`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeysPage {
    #[serde(default)]
    pub keys: Vec<Key>,
}

/// A translatable string with one [`Translation`] per project language.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Key {
    pub key_id: u64,
    #[serde(default)]
    pub key_name: KeyName,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// Per-platform key names. Projects that are not per-platform repeat the
/// same name in every field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyName {
    pub ios: Option<String>,
    pub android: Option<String>,
    pub web: Option<String>,
    pub other: Option<String>,
}

impl KeyName {
    /// The first available name, preferring `web`.
    pub fn display(&self) -> &str {
        [&self.web, &self.other, &self.ios, &self.android]
            .into_iter()
            .find_map(|name| name.as_deref())
            .unwrap_or("<unnamed>")
    }
}

/// The text of a key in one language.
///
/// `translation` stays an `Option` so that an explicit `null` is
/// distinguishable from the empty string Lokalise uses for untranslated
/// entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translation {
    pub translation_id: u64,
    pub language_iso: String,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub is_unverified: bool,
}

/// Body of `PUT /translations/{id}`.
///
/// Fields are private: the only way to build one is
/// [`TranslationUpdate::machine_translated`], which always flags the text as
/// unverified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationUpdate {
    translation: String,
    is_unverified: bool,
}

impl TranslationUpdate {
    pub fn machine_translated(text: impl Into<String>) -> Self {
        Self {
            translation: text.into(),
            is_unverified: true,
        }
    }
}

/// Response of `PUT /translations/{id}`.
///
/// Every field is optional. The write already happened once Lokalise
/// answers 200, so the body is only read for log context.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatedTranslation {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub translation: Option<WrittenTranslation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WrittenTranslation {
    #[serde(default)]
    pub translation_id: Option<u64>,
    #[serde(default)]
    pub is_unverified: Option<bool>,
}

impl UpdatedTranslation {
    /// Best-effort view of a 200 body; anything unexpected reads as empty.
    pub fn from_body(body: serde_json::Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }
}

/// Error envelope returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}
