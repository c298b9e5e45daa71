//! Picks the translations of a key that still need machine translation.
//!
//! A translation is untranslated only when its text is exactly the empty
//! string. Whitespace and `null` do not count.

use crate::lokalise::{Key, Translation};
use crate::sync::WorkItem;

/// Language code of the source text.
pub const SOURCE_LANGUAGE: &str = "en";

/// English source text of a key and the translations waiting for it.
#[derive(Debug, PartialEq, Eq)]
pub struct Untranslated<'a> {
    pub source_text: &'a str,
    /// `(language_iso, translation_id)` in the key's translation order.
    pub targets: Vec<(&'a str, u64)>,
}

/// Returns `None` if the key has no non-empty English text or nothing left to
/// translate.
pub fn select_untranslated(translations: &[Translation]) -> Option<Untranslated<'_>> {
    let source_text = translations
        .iter()
        .find(|t| t.language_iso == SOURCE_LANGUAGE)?
        .translation
        .as_deref()
        .filter(|text| !text.is_empty())?;

    let targets: Vec<_> = translations
        .iter()
        .filter(|t| t.language_iso != SOURCE_LANGUAGE && t.translation.as_deref() == Some(""))
        .map(|t| (t.language_iso.as_str(), t.translation_id))
        .collect();

    if targets.is_empty() {
        return None;
    }
    Some(Untranslated {
        source_text,
        targets,
    })
}

pub fn work_items(key: &Key) -> Vec<WorkItem> {
    let Some(selection) = select_untranslated(&key.translations) else {
        return Vec::new();
    };
    selection
        .targets
        .into_iter()
        .map(|(language_iso, translation_id)| WorkItem {
            key_id: key.key_id,
            language_iso: language_iso.to_string(),
            translation_id,
            source_text: selection.source_text.to_string(),
        })
        .collect()
}
