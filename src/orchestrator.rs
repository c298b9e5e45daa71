use tracing::{debug, error, info};

use crate::deepl::MachineTranslator;
use crate::lokalise::TranslationStore;
use crate::selector::work_items;
use crate::sync::{ItemOutcome, Phase, SyncReport, WorkItem};
use crate::updater::TranslationUpdater;

/// Drives one sync run: fetch every key, select what is untranslated, then
/// translate and write back item by item.
pub struct SyncOrchestrator<S, T> {
    store: S,
    translator: T,
}

impl<S, T> std::fmt::Debug for SyncOrchestrator<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncOrchestrator").finish_non_exhaustive()
    }
}

impl<S: TranslationStore, T: MachineTranslator> SyncOrchestrator<S, T> {
    pub fn new(store: S, translator: T) -> Self {
        Self { store, translator }
    }

    /// Run the whole pipeline. Individual failures are logged and recorded in
    /// the report; they never stop the run.
    pub async fn run(&self) -> SyncReport {
        let mut report = SyncReport::new();

        report.advance(Phase::Fetching);
        let keys = self.store.fetch_all_keys().await;
        report.keys_fetched = keys.len();
        info!("Fetched {} keys", keys.len());

        let updater = TranslationUpdater::new(&self.store, &self.translator);
        for key in &keys {
            report.advance(Phase::Selecting);
            let items = work_items(key);
            if !items.is_empty() {
                debug!(
                    key_id = key.key_id,
                    key = key.key_name.display(),
                    pending = items.len(),
                    unverified = key.translations.iter().filter(|t| t.is_unverified).count(),
                    "key has untranslated languages"
                );
            }

            for item in items {
                report.advance(Phase::Translating);
                let outcome = process_item(&updater, item).await;
                report.record(outcome);
            }
        }

        report.advance(Phase::Terminal);
        info!(
            "Sync finished: {} updated, {} failed",
            report.updated(),
            report.failed()
        );
        report
    }

    /// Fetch and select without translating or writing anything.
    pub async fn pending(&self) -> Vec<WorkItem> {
        self.store
            .fetch_all_keys()
            .await
            .iter()
            .flat_map(work_items)
            .collect()
    }
}

async fn process_item<S: TranslationStore, T: MachineTranslator>(
    updater: &TranslationUpdater<'_, S, T>,
    item: WorkItem,
) -> ItemOutcome {
    match updater.translate_and_update(&item).await {
        Ok(text) => {
            info!(
                "Translation updated for language '{}': '{}'",
                item.language_iso, text
            );
            ItemOutcome::Updated {
                language_iso: item.language_iso,
                translation_id: item.translation_id,
                text,
            }
        }
        Err(e) => {
            error!(
                "Failed to update translation for language '{}'",
                item.language_iso
            );
            ItemOutcome::Failed {
                language_iso: item.language_iso,
                translation_id: item.translation_id,
                reason: e.to_string(),
            }
        }
    }
}
