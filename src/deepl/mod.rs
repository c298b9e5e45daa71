pub mod client;
pub mod error;
pub mod types;

pub use client::{DeepLClient, MachineTranslator};
pub use error::DeepLError;
