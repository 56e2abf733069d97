//! Conversion between language codes and the `"code (name)"` strings shown in
//! language pickers.

use super::language::{LanguageCatalog, LanguageCode};

/// Render a code and its display name as a selection string, e.g. `"en (English)"`
pub fn format(code: &LanguageCode, name: &str) -> String {
    format!("{} ({})", code, name)
}

/// Extract the language code from a selection string.
///
/// When the selection contains `(` the code is everything before the first
/// whitespace character. Otherwise the whole selection is taken as a bare code.
/// The result is not checked against any catalog.
pub fn decode(selection: &str) -> LanguageCode {
    if selection.contains('(') {
        let code = selection.split(char::is_whitespace).next().unwrap_or("");
        LanguageCode::new(code)
    } else {
        LanguageCode::new(selection)
    }
}

/// One selection string per catalog entry, in catalog order
pub fn format_languages(catalog: &LanguageCatalog) -> Vec<String> {
    catalog
        .entries()
        .iter()
        .map(|entry| format(&entry.code, &entry.name))
        .collect()
}

/// Selection string of the catalog's first entry
pub fn default_selection(catalog: &LanguageCatalog) -> String {
    let first = catalog.first();
    format(&first.code, &first.name)
}
