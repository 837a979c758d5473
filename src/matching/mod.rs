//! Pattern matchers
//!
//! Each matcher scans the whole password and emits zero or more candidate
//! matches; candidates may overlap freely, the scorer picks the cheapest
//! non-overlapping cover.

pub(crate) mod adjacency;
mod date;
mod dictionary;
mod regex_match;
mod repeat;
mod sequence;
mod spatial;

use std::cell::OnceCell;
use std::collections::{BTreeMap, HashMap};

use crate::dictionary::RankedDictionaries;

pub(crate) use date::REFERENCE_YEAR;
pub(crate) use spatial::graph_lookup;

/// A claim that `password[i..=j]` (code-point indices) is explained by one
/// pattern kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub kind: MatchKind,
    /// First code-point index of the token, inclusive.
    pub i: usize,
    /// Last code-point index of the token, inclusive.
    pub j: usize,
    /// The matched substring, by code point.
    pub token: String,
    pub(crate) guesses: OnceCell<f64>,
}

/// Kind tag plus kind-specific payload for a [`Match`].
#[derive(Debug, Clone, PartialEq)]
pub enum MatchKind {
    Dictionary {
        dictionary_name: String,
        /// The dictionary entry the token mapped onto (lowercased, with
        /// leet substitutions undone).
        matched_word: String,
        rank: usize,
        reversed: bool,
        l33t: bool,
        /// Substituted character -> canonical character, for leet matches.
        substitutions: BTreeMap<char, char>,
    },
    Spatial {
        graph_name: String,
        /// Number of direction changes along the adjacency walk.
        turns: usize,
        /// Characters that require the shift key.
        shifted_count: usize,
    },
    Sequence {
        ascending: bool,
    },
    Repeat {
        base_token: String,
        base_guesses: f64,
        /// The base token's own optimal decomposition.
        base_matches: Vec<Match>,
        repeat_count: usize,
    },
    Date {
        separator: Option<char>,
        year: i32,
        month: u32,
        day: u32,
    },
    Regex {
        name: &'static str,
        year: i32,
    },
    Bruteforce,
}

impl Match {
    pub(crate) fn new(kind: MatchKind, i: usize, j: usize, token: String) -> Self {
        Self { kind, i, j, token, guesses: OnceCell::new() }
    }

    /// Pattern kind name, e.g. `"dictionary"` or `"bruteforce"`.
    pub fn pattern(&self) -> &'static str {
        match self.kind {
            MatchKind::Dictionary { .. } => "dictionary",
            MatchKind::Spatial { .. } => "spatial",
            MatchKind::Sequence { .. } => "sequence",
            MatchKind::Repeat { .. } => "repeat",
            MatchKind::Date { .. } => "date",
            MatchKind::Regex { .. } => "regex",
            MatchKind::Bruteforce => "bruteforce",
        }
    }

    /// Estimated guesses for this match.
    ///
    /// Matches in a scored sequence carry the scorer's estimate, including
    /// the minimum-guesses floor; on an unscored candidate this falls back
    /// to the raw kind formula.
    pub fn guesses(&self) -> f64 {
        match self.guesses.get() {
            Some(guesses) => *guesses,
            None => crate::scoring::raw_guesses(self),
        }
    }

    pub fn guesses_log10(&self) -> f64 {
        self.guesses().log10()
    }
}

/// Runs every matcher over the password and unions their candidates,
/// sorted by `(i, j)`.
///
/// `user_dictionary` is the per-call ranked dictionary built from
/// caller-supplied inputs. An empty password yields no matches.
pub(crate) fn find_matches(
    password: &str,
    dicts: &RankedDictionaries,
    user_dictionary: &HashMap<String, usize>,
) -> Vec<Match> {
    let chars: Vec<char> = password.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    matches.extend(dictionary::dictionary_match(&chars, dicts, user_dictionary));
    matches.extend(dictionary::reverse_dictionary_match(&chars, dicts, user_dictionary));
    matches.extend(dictionary::l33t_match(&chars, dicts, user_dictionary));
    matches.extend(spatial::spatial_match(&chars));
    matches.extend(sequence::sequence_match(&chars));
    matches.extend(repeat::repeat_match(&chars, dicts));
    matches.extend(date::date_match(&chars));
    matches.extend(regex_match::regex_match(&chars));

    matches.sort_by_key(|m| (m.i, m.j));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_yields_no_matches() {
        let dicts = RankedDictionaries::from_word_lists(&[("words", &["abc"])]);
        let matches = find_matches("", &dicts, &HashMap::new());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_matches_sorted_by_position() {
        let dicts = RankedDictionaries::from_word_lists(&[("words", &["abc", "bcd"])]);
        let matches = find_matches("abcd", &dicts, &HashMap::new());
        for pair in matches.windows(2) {
            assert!((pair[0].i, pair[0].j) <= (pair[1].i, pair[1].j));
        }
    }

    #[test]
    fn test_match_invariants() {
        let dicts = RankedDictionaries::from_word_lists(&[("words", &["password", "word"])]);
        let password = "password123";
        let matches = find_matches(password, &dicts, &HashMap::new());
        assert!(!matches.is_empty());
        for m in &matches {
            assert!(m.i <= m.j);
            assert!(m.j < password.chars().count());
            assert_eq!(m.token.chars().count(), m.j - m.i + 1);
        }
    }
}
