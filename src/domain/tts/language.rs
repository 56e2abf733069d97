use super::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Short identifier of a spoken language or locale (e.g. "en", "pt-br")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// One offered language: its code and the name shown to users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: LanguageCode,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: LanguageCode::new(code),
            name: name.into(),
        }
    }
}

/// Languages shipped with the service when no catalog file is configured
const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("ru", "Russian"),
    ("tr", "Turkish"),
    ("hi", "Hindi"),
    ("ar", "Arabic"),
    ("ja", "Japanese"),
    ("cmn", "Chinese (Mandarin)"),
];

/// Ordered, immutable set of languages offered for synthesis.
///
/// Built once at startup and shared read-only between requests. A catalog
/// always holds at least one entry and its codes are unique.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<CatalogEntry>,
}

impl LanguageCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            let code = entry.code.as_str();
            if code.is_empty() || code.chars().any(char::is_whitespace) {
                return Err(CatalogError::InvalidCode(code.to_string()));
            }
            if entries[..index].iter().any(|e| e.code == entry.code) {
                return Err(CatalogError::DuplicateCode(code.to_string()));
            }
        }

        Ok(Self { entries })
    }

    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_LANGUAGES
                .iter()
                .map(|(code, name)| CatalogEntry::new(*code, *name))
                .collect(),
        }
    }

    /// Load a catalog from a JSON array of `{"code": .., "name": ..}` objects.
    /// Array order becomes catalog order.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The first entry; never absent since an empty catalog cannot be built
    pub fn first(&self) -> &CatalogEntry {
        &self.entries[0]
    }

    pub fn contains(&self, code: &LanguageCode) -> bool {
        self.entries.iter().any(|e| &e.code == code)
    }

    pub fn name_of(&self, code: &LanguageCode) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.code == code)
            .map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
