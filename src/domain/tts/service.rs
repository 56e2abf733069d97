use super::language::{LanguageCatalog, LanguageCode};
use super::selection;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Result of handling one synthesis request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisOutcome {
    /// The engine produced an audio artifact at this path
    Produced(PathBuf),
    /// No text was supplied, so nothing was attempted
    Empty,
    /// Synthesis was attempted and failed for the given reason
    Failed(String),
}

impl SynthesisOutcome {
    /// Collapse the outcome to what a caller may see: a path or nothing
    pub fn into_audio_path(self) -> Option<PathBuf> {
        match self {
            SynthesisOutcome::Produced(path) => Some(path),
            SynthesisOutcome::Empty | SynthesisOutcome::Failed(_) => None,
        }
    }
}

pub struct TtsService {
    catalog: Arc<LanguageCatalog>,
    tts_repo: Arc<dyn TtsRepository>,
}

impl TtsService {
    pub fn new(catalog: Arc<LanguageCatalog>, tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { catalog, tts_repo }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    /// Selection strings for every offered language, in catalog order
    pub fn format_languages(&self) -> Vec<String> {
        selection::format_languages(&self.catalog)
    }

    pub fn default_selection(&self) -> String {
        selection::default_selection(&self.catalog)
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text in the language named by a selection string
    ///
    /// This operation:
    /// - Returns `Empty` without touching the engine when text is missing or empty
    /// - Decodes the language code from the selection
    /// - Calls the TTS repository
    ///
    /// Never fails: every engine error or panic becomes `Failed` and is logged
    async fn handle(&self, text: Option<&str>, selection: &str) -> SynthesisOutcome;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn handle(&self, text: Option<&str>, selection: &str) -> SynthesisOutcome {
        let text = match text {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => {
                tracing::debug!("Empty text, skipping synthesis");
                return SynthesisOutcome::Empty;
            }
        };

        let language = selection::decode(selection);

        tracing::info!(
            selection = %selection,
            language = %language,
            language_name = self.catalog.name_of(&language).unwrap_or("unknown"),
            text_length = text.len(),
            "TTS synthesis request"
        );

        match self.dispatch(text, language.clone()).await {
            Ok(path) => {
                tracing::info!(
                    language = %language,
                    path = %path.display(),
                    "TTS synthesis completed"
                );
                SynthesisOutcome::Produced(path)
            }
            Err(reason) => {
                tracing::error!(
                    language = %language,
                    error = %reason,
                    "Synthesis error"
                );
                SynthesisOutcome::Failed(reason)
            }
        }
    }
}

impl TtsService {
    /// Run the repository call on its own task so a panicking engine is
    /// reported as a failure instead of unwinding into the caller
    async fn dispatch(&self, text: String, language: LanguageCode) -> Result<PathBuf, String> {
        let tts_repo = Arc::clone(&self.tts_repo);
        let task = tokio::spawn(async move { tts_repo.synthesize(&text, &language).await });

        match task.await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(join_error) if join_error.is_panic() => {
                Err(format!("synthesis engine panicked: {}", join_error))
            }
            Err(join_error) => Err(join_error.to_string()),
        }
    }
}
