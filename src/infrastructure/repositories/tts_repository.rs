use crate::domain::tts::{LanguageCode, SynthesisError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech engine (espeak-ng, a neural model, a cloud API, etc.)
///
/// Implementations are responsible for:
/// - Deciding which language codes they accept
/// - Running the engine and writing the audio artifact
/// - Choosing where artifacts are stored
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech for a given language
    ///
    /// Returns the path of the produced audio file
    ///
    /// # Arguments
    /// * `text` - The text to synthesize, never empty when called by the service
    /// * `language` - The decoded language code, possibly unknown to the engine
    ///
    /// # Errors
    /// Returns error if the language is unsupported or the engine fails for any reason
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<PathBuf, SynthesisError>;
}
