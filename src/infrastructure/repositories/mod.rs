pub mod espeak_tts_repository;
pub mod tts_repository;

pub use espeak_tts_repository::EspeakTtsRepository;
pub use tts_repository::TtsRepository;
