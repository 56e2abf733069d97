use super::tts_repository::TtsRepository;
use crate::domain::tts::{LanguageCatalog, LanguageCode, SynthesisError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use uuid::Uuid;

/// espeak-ng accepts speaking rates between these words-per-minute bounds
const MIN_WORDS_PER_MINUTE: u32 = 80;
const MAX_WORDS_PER_MINUTE: u32 = 450;

/// Local espeak-ng implementation of TTS repository.
///
/// Each call writes a fresh `tts_<uuid>.wav` into the output directory. The
/// language code is passed to espeak-ng as its voice name.
pub struct EspeakTtsRepository {
    catalog: Arc<LanguageCatalog>,
    espeak_bin: PathBuf,
    output_dir: PathBuf,
    words_per_minute: Option<u32>,
}

impl EspeakTtsRepository {
    pub fn new(
        catalog: Arc<LanguageCatalog>,
        espeak_bin: PathBuf,
        output_dir: PathBuf,
        words_per_minute: Option<u32>,
    ) -> Self {
        Self {
            catalog,
            espeak_bin,
            output_dir,
            words_per_minute: words_per_minute
                .map(|wpm| wpm.clamp(MIN_WORDS_PER_MINUTE, MAX_WORDS_PER_MINUTE)),
        }
    }

    fn build_command(&self, text: &str, language: &LanguageCode, out_wav: &Path) -> Command {
        let mut cmd = Command::new(&self.espeak_bin);
        cmd.arg("-v").arg(language.as_str());
        if let Some(wpm) = self.words_per_minute {
            cmd.arg("-s").arg(wpm.to_string());
        }
        cmd.arg("-w").arg(out_wav);
        // Keeps text starting with '-' from being read as a flag
        cmd.arg("--").arg(text);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::piped());
        cmd
    }
}

#[async_trait]
impl TtsRepository for EspeakTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<PathBuf, SynthesisError> {
        if text.is_empty() {
            return Err(SynthesisError::EmptyText);
        }
        if !self.catalog.contains(language) {
            return Err(SynthesisError::UnsupportedLanguage(language.to_string()));
        }

        tokio::fs::create_dir_all(&self.output_dir).await?;
        let out_wav = self.output_dir.join(format!("tts_{}.wav", Uuid::new_v4()));

        tracing::debug!(
            language = %language,
            path = %out_wav.display(),
            text_length = text.len(),
            "Running espeak-ng"
        );

        if let Err(err) = self.run_engine(text, language, &out_wav).await {
            discard_partial_output(&out_wav).await;
            return Err(err);
        }

        tracing::info!(
            language = %language,
            path = %out_wav.display(),
            "Audio artifact written"
        );

        Ok(out_wav)
    }
}

impl EspeakTtsRepository {
    async fn run_engine(
        &self,
        text: &str,
        language: &LanguageCode,
        out_wav: &Path,
    ) -> Result<(), SynthesisError> {
        let output = self.build_command(text, language, out_wav).output().await?;
        if !output.status.success() {
            return Err(SynthesisError::Engine(format!(
                "espeak-ng failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        if !tokio::fs::try_exists(out_wav).await.unwrap_or(false) {
            return Err(SynthesisError::Engine(format!(
                "espeak-ng produced no audio at {}",
                out_wav.display()
            )));
        }

        Ok(())
    }
}

/// Remove whatever a failed run left at the artifact path
async fn discard_partial_output(out_wav: &Path) {
    match tokio::fs::remove_file(out_wav).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            path = %out_wav.display(),
            error = %e,
            "Failed to remove partial audio file"
        ),
    }
}
