use tracing::error;

use crate::deepl::MachineTranslator;
use crate::error::UpdateError;
use crate::lokalise::{TranslationStore, TranslationUpdate};
use crate::sync::WorkItem;

/// Machine-translates one work item and writes the result back.
pub struct TranslationUpdater<'a, S, T> {
    store: &'a S,
    translator: &'a T,
}

impl<'a, S: TranslationStore, T: MachineTranslator> TranslationUpdater<'a, S, T> {
    pub fn new(store: &'a S, translator: &'a T) -> Self {
        Self { store, translator }
    }

    /// Returns the text that was written. Nothing is written when the
    /// translation itself fails, and the write is attempted exactly once.
    pub async fn translate_and_update(&self, item: &WorkItem) -> Result<String, UpdateError> {
        let translated = self
            .translator
            .translate(&item.source_text, &item.language_iso)
            .await
            .inspect_err(|e| error!("Error translating into '{}': {e}", item.language_iso))?;

        let update = TranslationUpdate::machine_translated(translated.as_str());
        self.store
            .update_translation(item.translation_id, &update)
            .await
            .inspect_err(|e| error!("Error updating translation: {e}"))?;

        Ok(translated)
    }
}

#[cfg(test)]
pub(crate) mod mocks {
    use std::cell::RefCell;

    use crate::deepl::{DeepLError, MachineTranslator};
    use crate::lokalise::types::{UpdatedTranslation, WrittenTranslation};
    use crate::lokalise::{Key, LokaliseError, TranslationStore, TranslationUpdate};

    /// Appends the target language to the source text, or fails for the
    /// languages listed in `failing`.
    #[derive(Default)]
    pub struct MockTranslator {
        pub failing: Vec<&'static str>,
        pub calls: RefCell<Vec<(String, String)>>,
    }

    impl MachineTranslator for MockTranslator {
        async fn translate(&self, text: &str, language_iso: &str) -> Result<String, DeepLError> {
            self.calls
                .borrow_mut()
                .push((text.to_string(), language_iso.to_string()));
            if self.failing.contains(&language_iso) {
                return Err(DeepLError::ApiError {
                    status: 500,
                    message: "mock error".into(),
                });
            }
            Ok(format!("{text} [{language_iso}]"))
        }
    }

    /// Serves fixed keys and records every update, rejecting the
    /// translation ids listed in `rejecting`.
    #[derive(Default)]
    pub struct MockStore {
        pub keys: Vec<Key>,
        pub rejecting: Vec<u64>,
        pub updates: RefCell<Vec<(u64, serde_json::Value)>>,
    }

    impl TranslationStore for MockStore {
        async fn fetch_all_keys(&self) -> Vec<Key> {
            self.keys.clone()
        }

        async fn update_translation(
            &self,
            translation_id: u64,
            update: &TranslationUpdate,
        ) -> Result<UpdatedTranslation, LokaliseError> {
            let body = serde_json::to_value(update).unwrap();
            self.updates.borrow_mut().push((translation_id, body.clone()));
            if self.rejecting.contains(&translation_id) {
                return Err(LokaliseError::Api {
                    status: 400,
                    message: "mock rejection".into(),
                });
            }
            Ok(UpdatedTranslation {
                project_id: Some("mock".into()),
                translation: Some(WrittenTranslation {
                    translation_id: Some(translation_id),
                    is_unverified: body["is_unverified"].as_bool(),
                }),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::{MockStore, MockTranslator};
    use super::*;
    use serde_json::json;

    fn item(lang: &str, id: u64) -> WorkItem {
        WorkItem {
            key_id: 1,
            language_iso: lang.into(),
            translation_id: id,
            source_text: "Hello".into(),
        }
    }

    #[tokio::test]
    async fn success_writes_unverified_translation() {
        let store = MockStore::default();
        let translator = MockTranslator::default();
        let updater = TranslationUpdater::new(&store, &translator);

        let text = updater.translate_and_update(&item("fr", 12)).await.unwrap();

        assert_eq!(text, "Hello [fr]");
        assert_eq!(
            *store.updates.borrow(),
            vec![(12, json!({"translation": "Hello [fr]", "is_unverified": true}))]
        );
    }

    #[tokio::test]
    async fn rejected_write_is_a_failure() {
        let store = MockStore {
            rejecting: vec![12],
            ..Default::default()
        };
        let translator = MockTranslator::default();
        let updater = TranslationUpdater::new(&store, &translator);

        let err = updater.translate_and_update(&item("fr", 12)).await.unwrap_err();

        assert!(matches!(err, UpdateError::Write(_)));
        assert_eq!(store.updates.borrow().len(), 1);
    }

    #[tokio::test]
    async fn translation_failure_skips_the_write() {
        let store = MockStore::default();
        let translator = MockTranslator {
            failing: vec!["de"],
            ..Default::default()
        };
        let updater = TranslationUpdater::new(&store, &translator);

        let err = updater.translate_and_update(&item("de", 3)).await.unwrap_err();

        assert!(matches!(err, UpdateError::Translate(_)));
        assert!(store.updates.borrow().is_empty());
    }
}
