pub mod client;
pub mod error;
pub mod types;

pub use client::{LokaliseClient, TranslationStore};
pub use error::LokaliseError;
pub use types::{Key, Translation, TranslationUpdate};

/// Lokalise project whose keys are synchronized.
pub const PROJECT_ID: &str = "9763876266290d71498b88.53651952";
