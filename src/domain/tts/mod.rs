pub mod error;
pub mod language;
pub mod selection;
pub mod service;

pub use error::{CatalogError, SynthesisError};
pub use language::{CatalogEntry, LanguageCatalog, LanguageCode};
pub use service::{SynthesisOutcome, TtsService, TtsServiceApi};
