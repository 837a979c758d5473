//! Ranked frequency dictionaries.
//!
//! Handles loading and querying the bundled word frequency lists.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

static RANKED_DICTIONARIES: RwLock<Option<RankedDictionaries>> = RwLock::new(None);

/// Bundled frequency lists, in the order they are loaded.
/// Every list is required; a missing file is a fatal startup condition.
const FREQUENCY_LISTS: &[(&str, &str)] = &[
    ("passwords", "passwords.txt"),
    ("english_wikipedia", "english_wikipedia.txt"),
    ("us_tv_and_film", "us_tv_and_film.txt"),
    ("surnames", "surnames.txt"),
    ("male_names", "male_names.txt"),
    ("female_names", "female_names.txt"),
];

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Frequency list not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read frequency list: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Frequency list is empty: {0}")]
    EmptyList(String),
}

/// Immutable mapping from list name to (lowercased word -> 1-based rank).
///
/// Rank 1 is the most common word of its list. Loaded once per process and
/// shared read-only by every evaluation.
#[derive(Debug, Clone, Default)]
pub struct RankedDictionaries {
    lists: BTreeMap<String, HashMap<String, usize>>,
}

impl RankedDictionaries {
    /// Builds dictionaries from in-memory word lists, ranking each word by
    /// its position (first occurrence wins).
    pub fn from_word_lists(lists: &[(&str, &[&str])]) -> Self {
        let mut out = Self::default();
        for (name, words) in lists {
            out.lists.insert((*name).to_string(), rank_words(words.iter().copied()));
        }
        out
    }

    /// Iterates over `(list_name, word -> rank)` pairs in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashMap<String, usize>)> {
        self.lists.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Total number of ranked words across all lists.
    pub fn word_count(&self) -> usize {
        self.lists.values().map(|table| table.len()).sum()
    }
}

/// Ranks words by order of first appearance, 1-based. Words are lowercased.
pub(crate) fn rank_words<'a>(words: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    let mut table = HashMap::new();
    let mut rank = 0;
    for word in words {
        let word = word.trim().to_lowercase();
        if word.is_empty() || table.contains_key(&word) {
            continue;
        }
        rank += 1;
        table.insert(word, rank);
    }
    table
}

/// Returns the frequency-list data directory.
///
/// Priority:
/// 1. Environment variable `PWD_GUESS_DATA_DIR`
/// 2. Default path `./assets`
pub fn get_data_dir() -> PathBuf {
    std::env::var("PWD_GUESS_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets"))
}

/// Initializes the ranked dictionaries from the bundled frequency lists.
///
/// Call once at startup; a failure here means no evaluation can be served.
/// Idempotent: once loaded, later calls return the loaded word count.
///
/// # Environment Variable
///
/// Set `PWD_GUESS_DATA_DIR` to load the lists from a custom directory.
///
/// # Errors
///
/// Returns an error if any bundled list is missing, unreadable, or empty.
pub fn init_dictionaries() -> Result<usize, DictionaryError> {
    init_dictionaries_from_dir(get_data_dir())
}

/// Initializes the ranked dictionaries from a specific directory.
///
/// # Errors
///
/// Returns an error if any bundled list is missing, unreadable, or empty.
pub fn init_dictionaries_from_dir<P: AsRef<Path>>(dir: P) -> Result<usize, DictionaryError> {
    {
        let guard = RANKED_DICTIONARIES.read().unwrap();
        if let Some(dicts) = guard.as_ref() {
            return Ok(dicts.word_count());
        }
    }

    let dir = dir.as_ref();
    let mut dicts = RankedDictionaries::default();

    for (name, file) in FREQUENCY_LISTS {
        let path = dir.join(file);
        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary initialization FAILED: missing {}", path.display());
            return Err(DictionaryError::FileNotFound(path));
        }

        let content = std::fs::read_to_string(&path)?;
        let table = rank_words(content.lines());
        if table.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary initialization FAILED: empty list {}", name);
            return Err(DictionaryError::EmptyList((*name).to_string()));
        }
        dicts.lists.insert((*name).to_string(), table);
    }

    let count = dicts.word_count();
    {
        let mut guard = RANKED_DICTIONARIES.write().unwrap();
        *guard = Some(dicts);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Dictionaries initialized: {} words from {:?}", count, dir);

    Ok(count)
}

/// Runs `f` against the loaded dictionaries, initializing them from the
/// default location on first use.
pub(crate) fn with_dictionaries<R>(
    f: impl FnOnce(&RankedDictionaries) -> R,
) -> Result<R, DictionaryError> {
    {
        let guard = RANKED_DICTIONARIES.read().unwrap();
        if let Some(dicts) = guard.as_ref() {
            return Ok(f(dicts));
        }
    }

    init_dictionaries()?;

    let guard = RANKED_DICTIONARIES.read().unwrap();
    match guard.as_ref() {
        Some(dicts) => Ok(f(dicts)),
        None => Err(DictionaryError::EmptyList("no frequency lists loaded".to_string())),
    }
}

/// Resets the dictionary state for testing purposes.
#[cfg(test)]
pub(crate) fn reset_dictionaries_for_testing() {
    let mut guard = RANKED_DICTIONARIES.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::TempDir;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    fn write_lists(dir: &TempDir, words: &[&str]) {
        for (_, file) in FREQUENCY_LISTS {
            let mut f = std::fs::File::create(dir.path().join(file)).expect("create list");
            for w in words {
                writeln!(f, "{}", w).expect("write word");
            }
        }
    }

    #[test]
    #[serial]
    fn test_get_data_dir_default() {
        remove_env("PWD_GUESS_DATA_DIR");

        let dir = get_data_dir();
        assert_eq!(dir, PathBuf::from("./assets"));
    }

    #[test]
    #[serial]
    fn test_get_data_dir_from_env() {
        let custom = "/custom/path/assets";
        set_env("PWD_GUESS_DATA_DIR", custom);

        let dir = get_data_dir();
        assert_eq!(dir, PathBuf::from(custom));

        remove_env("PWD_GUESS_DATA_DIR");
    }

    #[test]
    #[serial]
    fn test_init_dictionaries_missing_list() {
        reset_dictionaries_for_testing();
        set_env("PWD_GUESS_DATA_DIR", "/nonexistent/path");

        let result = init_dictionaries();
        assert!(matches!(result, Err(DictionaryError::FileNotFound(_))));

        remove_env("PWD_GUESS_DATA_DIR");
    }

    #[test]
    #[serial]
    fn test_init_dictionaries_empty_list() {
        reset_dictionaries_for_testing();
        let dir = TempDir::new().expect("temp dir");
        write_lists(&dir, &[]);
        set_env("PWD_GUESS_DATA_DIR", dir.path().to_str().unwrap());

        let result = init_dictionaries();
        assert!(matches!(result, Err(DictionaryError::EmptyList(_))));

        remove_env("PWD_GUESS_DATA_DIR");
        reset_dictionaries_for_testing();
    }

    #[test]
    #[serial]
    fn test_init_dictionaries_success() {
        reset_dictionaries_for_testing();
        let dir = TempDir::new().expect("temp dir");
        write_lists(&dir, &["alpha", "Beta", "beta", "gamma"]);
        set_env("PWD_GUESS_DATA_DIR", dir.path().to_str().unwrap());

        let count = init_dictionaries().expect("init should succeed");
        // "Beta" lowercases into a duplicate of "beta"
        assert_eq!(count, 3 * FREQUENCY_LISTS.len());

        with_dictionaries(|dicts| {
            let (_, table) = dicts.iter().next().expect("at least one list");
            assert_eq!(table.get("alpha"), Some(&1));
            assert_eq!(table.get("beta"), Some(&2));
            assert_eq!(table.get("gamma"), Some(&3));
        })
        .expect("dictionaries loaded");

        remove_env("PWD_GUESS_DATA_DIR");
        reset_dictionaries_for_testing();
    }

    #[test]
    fn test_rank_words_first_occurrence_wins() {
        let table = rank_words(["You", "i", "you", "me"].into_iter());
        assert_eq!(table.get("you"), Some(&1));
        assert_eq!(table.get("i"), Some(&2));
        assert_eq!(table.get("me"), Some(&3));
    }

    #[test]
    fn test_from_word_lists() {
        let dicts =
            RankedDictionaries::from_word_lists(&[("words", &["aac", "password", "paassword"])]);
        assert_eq!(dicts.word_count(), 3);
        let (name, table) = dicts.iter().next().expect("one list");
        assert_eq!(name, "words");
        assert_eq!(table.get("password"), Some(&2));
    }
}
