/// Reasons a language catalog cannot be built. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("language catalog is empty")]
    Empty,
    #[error("duplicate language code: {0}")]
    DuplicateCode(String),
    #[error("invalid language code: {0:?}")]
    InvalidCode(String),
    #[error("failed to read language catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed language catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures raised by a synthesis engine
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("text is empty")]
    EmptyText,
    #[error("engine error: {0}")]
    Engine(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
