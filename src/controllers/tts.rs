use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    domain::tts::{TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub const INTERFACE_TITLE: &str = "Interlink AI - Text to Speech";
pub const INTERFACE_DESCRIPTION: &str = "Generate high-quality speech from text.";

/// Request for POST /api/tts/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Response for POST /api/tts/synthesize; `audio_path` is null when no audio was produced.
///
/// `audio_path` is the engine's artifact path as written on the server. Its
/// file name component is what GET /api/tts/audio/:file_name expects, e.g.
/// `/tmp/interlink-tts/tts_<uuid>.wav` is fetched from `/api/tts/audio/tts_<uuid>.wav`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsResponse {
    pub audio_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<String>,
    pub default: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InterfaceResponse {
    pub title: String,
    pub description: String,
    /// Each example is a `[text, selection]` pair
    pub examples: Vec<[String; 2]>,
}

pub struct TtsController {
    tts_service: Arc<TtsService>,
    output_dir: PathBuf,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>, output_dir: PathBuf) -> Self {
        Self {
            tts_service,
            output_dir,
        }
    }

    /// GET /api/languages - Selection strings for the language picker
    pub async fn list_languages(
        State(controller): State<Arc<TtsController>>,
    ) -> Json<LanguagesResponse> {
        Json(LanguagesResponse {
            languages: controller.tts_service.format_languages(),
            default: controller.tts_service.default_selection(),
        })
    }

    /// GET /api/interface - Title, description and examples for the front-end
    pub async fn get_interface(
        State(controller): State<Arc<TtsController>>,
    ) -> Json<InterfaceResponse> {
        let first = controller.tts_service.catalog().first();
        let example_text = format!("This is a demo for {}.", first.name);

        Json(InterfaceResponse {
            title: INTERFACE_TITLE.to_string(),
            description: INTERFACE_DESCRIPTION.to_string(),
            examples: vec![[example_text, controller.tts_service.default_selection()]],
        })
    }

    /// POST /api/tts/synthesize - Convert text to speech
    ///
    /// Always answers 200; a failed or skipped synthesis yields a null path
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> Json<TtsResponse> {
        let selection = request
            .language
            .unwrap_or_else(|| controller.tts_service.default_selection());

        let audio_path = controller
            .tts_service
            .handle(request.text.as_deref(), &selection)
            .await
            .into_audio_path()
            .map(|path| path.to_string_lossy().to_string());

        Json(TtsResponse { audio_path })
    }

    /// GET /api/tts/audio/:file_name - Stream a produced WAV file
    pub async fn get_audio(
        State(controller): State<Arc<TtsController>>,
        Path(file_name): Path<String>,
    ) -> AppResult<(StatusCode, HeaderMap, Vec<u8>)> {
        if !is_plain_file_name(&file_name) {
            return Err(AppError::BadRequest(format!(
                "Invalid audio file name: {}",
                file_name
            )));
        }

        let audio = tokio::fs::read(controller.output_dir.join(&file_name)).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/wav"));

        Ok((StatusCode::OK, headers, audio))
    }
}

/// A single path component that cannot escape the output directory
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && std::path::Path::new(name).file_name() == Some(std::ffi::OsStr::new(name))
}
