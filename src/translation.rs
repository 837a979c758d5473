//! Feedback translations.
//!
//! A translation is a flat JSON map from English phrase to translated
//! phrase, loaded per language code. Loading fails soft: a missing or
//! malformed file leaves feedback untranslated.

use std::collections::HashMap;
use std::path::PathBuf;

/// An exact-string phrase translation map.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    map: HashMap<String, String>,
}

/// Returns the translation file directory.
///
/// Priority:
/// 1. Environment variable `PWD_GUESS_LANG_DIR`
/// 2. Default path `./lang`
pub fn get_lang_dir() -> PathBuf {
    std::env::var("PWD_GUESS_LANG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./lang"))
}

impl Translations {
    /// Loads the translation map for a language code from
    /// `<lang_dir>/<code>.json`. Returns `None` when the file is missing or
    /// not a JSON string map.
    pub fn load(code: &str) -> Option<Self> {
        let path = get_lang_dir().join(format!("{}.json", code));
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Translation file not found: {}", path.display());
                return None;
            }
        };
        match serde_json::from_str::<HashMap<String, String>>(&content) {
            Ok(map) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Loaded {} translations from {}", map.len(), path.display());
                Some(Self { map })
            }
            Err(_error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Invalid translation file {}: {}", path.display(), _error);
                None
            }
        }
    }

    /// Translates a phrase, falling back to the phrase itself when the map
    /// has no non-empty entry for it.
    pub fn translate<'a>(&'a self, phrase: &'a str) -> &'a str {
        match self.map.get(phrase) {
            Some(translated) if !translated.is_empty() => translated,
            _ => phrase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::TempDir;

    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_load_and_translate() {
        let dir = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(dir.path().join("xx.json")).expect("create");
        write!(file, r#"{{"Avoid sequences": "Vermeide Sequenzen", "Empty": ""}}"#)
            .expect("write");
        set_env("PWD_GUESS_LANG_DIR", dir.path().to_str().unwrap());

        let translations = Translations::load("xx").expect("loads");
        assert_eq!(translations.translate("Avoid sequences"), "Vermeide Sequenzen");
        // empty and missing entries fall back to the original phrase
        assert_eq!(translations.translate("Empty"), "Empty");
        assert_eq!(translations.translate("Unknown phrase"), "Unknown phrase");

        remove_env("PWD_GUESS_LANG_DIR");
    }

    #[test]
    #[serial]
    fn test_missing_file_is_none() {
        set_env("PWD_GUESS_LANG_DIR", "/nonexistent/lang");
        assert!(Translations::load("cs").is_none());
        remove_env("PWD_GUESS_LANG_DIR");
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_none() {
        let dir = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(dir.path().join("yy.json")).expect("create");
        write!(file, "not json at all").expect("write");
        set_env("PWD_GUESS_LANG_DIR", dir.path().to_str().unwrap());

        assert!(Translations::load("yy").is_none());

        remove_env("PWD_GUESS_LANG_DIR");
    }

    #[test]
    #[serial]
    fn test_bundled_czech_translations() {
        remove_env("PWD_GUESS_LANG_DIR");
        let translations = Translations::load("cs").expect("bundled cs.json");
        assert_eq!(
            translations.translate("This is a very common password"),
            "Toto heslo patří mezi častá hesla"
        );
    }
}
