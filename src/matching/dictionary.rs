//! Dictionary matchers - plain, reversed, and leetspeak lookups against the
//! ranked frequency lists.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{Match, MatchKind};
use crate::dictionary::RankedDictionaries;

/// Substitutable characters and the letters they can stand for.
const L33T_TABLE: &[(char, &[char])] = &[
    ('a', &['4', '@']),
    ('b', &['8']),
    ('c', &['(', '{', '[', '<']),
    ('e', &['3']),
    ('g', &['6', '9']),
    ('i', &['1', '!', '|']),
    ('l', &['1', '|', '7']),
    ('o', &['0']),
    ('s', &['$', '5']),
    ('t', &['+', '7']),
    ('x', &['%']),
    ('z', &['2']),
];

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Probes every substring of the password against every ranked dictionary,
/// including the per-call user-input dictionary.
pub(crate) fn dictionary_match(
    chars: &[char],
    dicts: &RankedDictionaries,
    user_dictionary: &HashMap<String, usize>,
) -> Vec<Match> {
    let n = chars.len();
    let lowered: Vec<char> = chars.iter().map(|c| lower(*c)).collect();
    let mut matches = Vec::new();

    for i in 0..n {
        for j in i..n {
            let word: String = lowered[i..=j].iter().collect();
            let tables = dicts
                .iter()
                .chain(std::iter::once(("user_inputs", user_dictionary)));
            for (dictionary_name, table) in tables {
                if let Some(&rank) = table.get(&word) {
                    matches.push(Match::new(
                        MatchKind::Dictionary {
                            dictionary_name: dictionary_name.to_string(),
                            matched_word: word.clone(),
                            rank,
                            reversed: false,
                            l33t: false,
                            substitutions: BTreeMap::new(),
                        },
                        i,
                        j,
                        chars[i..=j].iter().collect(),
                    ));
                }
            }
        }
    }

    matches
}

/// Dictionary matcher over the code-point-reversed password. Emitted matches
/// keep the original (non-reversed) token and positions.
pub(crate) fn reverse_dictionary_match(
    chars: &[char],
    dicts: &RankedDictionaries,
    user_dictionary: &HashMap<String, usize>,
) -> Vec<Match> {
    let n = chars.len();
    let reversed_chars: Vec<char> = chars.iter().rev().copied().collect();
    let mut matches = dictionary_match(&reversed_chars, dicts, user_dictionary);

    for m in &mut matches {
        let (i, j) = (n - 1 - m.j, n - 1 - m.i);
        m.i = i;
        m.j = j;
        m.token = chars[i..=j].iter().collect();
        if let MatchKind::Dictionary { reversed, .. } = &mut m.kind {
            *reversed = true;
        }
    }

    matches.sort_by_key(|m| (m.i, m.j));
    matches
}

/// Substituted character -> letters it can represent, restricted to the
/// characters actually present in the password.
///
/// Restricting to present characters bounds the substitution enumeration;
/// this is a required invariant, not an optimization.
fn relevant_substitutions(chars: &[char]) -> BTreeMap<char, Vec<char>> {
    let present: HashSet<char> = chars.iter().copied().collect();
    let mut by_char: BTreeMap<char, Vec<char>> = BTreeMap::new();
    for (letter, subs) in L33T_TABLE {
        for sub in *subs {
            if present.contains(sub) {
                by_char.entry(*sub).or_default().push(*letter);
            }
        }
    }
    by_char
}

/// Enumerates every assignment of present substituted characters to one of
/// their candidate letters.
pub(crate) fn enumerate_substitution_maps(
    by_char: &BTreeMap<char, Vec<char>>,
) -> Vec<BTreeMap<char, char>> {
    let mut maps: Vec<BTreeMap<char, char>> = vec![BTreeMap::new()];
    for (&sub, letters) in by_char {
        let mut next = Vec::with_capacity(maps.len() * letters.len());
        for map in &maps {
            for &letter in letters {
                let mut extended = map.clone();
                extended.insert(sub, letter);
                next.push(extended);
            }
        }
        maps = next;
    }
    maps
}

/// Leetspeak matcher: applies every substitution assignment, runs the
/// dictionary matcher on the substituted variant, and keeps matches whose
/// span used at least one real substitution.
pub(crate) fn l33t_match(
    chars: &[char],
    dicts: &RankedDictionaries,
    user_dictionary: &HashMap<String, usize>,
) -> Vec<Match> {
    let mut matches = Vec::new();

    for sub in enumerate_substitution_maps(&relevant_substitutions(chars)) {
        if sub.is_empty() {
            continue;
        }
        let subbed: Vec<char> =
            chars.iter().map(|c| sub.get(c).copied().unwrap_or(*c)).collect();

        for m in dictionary_match(&subbed, dicts, user_dictionary) {
            let MatchKind::Dictionary { dictionary_name, matched_word, rank, .. } = &m.kind
            else {
                continue;
            };
            let token: String = chars[m.i..=m.j].iter().collect();
            // a span identical to the dictionary entry used no substitution
            // and is already covered by the plain matcher
            if token.to_lowercase() == *matched_word {
                continue;
            }
            let substitutions: BTreeMap<char, char> = sub
                .iter()
                .filter(|(s, _)| token.contains(**s))
                .map(|(s, l)| (*s, *l))
                .collect();
            matches.push(Match::new(
                MatchKind::Dictionary {
                    dictionary_name: dictionary_name.clone(),
                    matched_word: matched_word.clone(),
                    rank: *rank,
                    reversed: false,
                    l33t: true,
                    substitutions,
                },
                m.i,
                m.j,
                token,
            ));
        }
    }

    // single-character leet matches are noise: '1' matches 'i', '$' matches 's'
    matches.retain(|m| m.token.chars().count() > 1);
    matches
}
