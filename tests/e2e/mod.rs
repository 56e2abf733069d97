// End-to-end integration tests for the Interlink TTS API
//
// Every test starts the real axum router on an ephemeral local port. The
// speech engine is replaced by a fake repository that writes small WAV stubs
// into a per-test temporary directory and records each call it receives.
//
// Architecture:
// - Catalog fixed to English and French
// - One server, output directory and fake engine per test via test-context
// - Requests go over TCP through a hyper-util client

mod test_languages;
mod test_tts;
