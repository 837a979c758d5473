//! Repeat matcher - blocks of the password repeated two or more times in a
//! row, with the repeated unit scored recursively.

use std::collections::HashMap;

use super::{Match, MatchKind, find_matches};
use crate::dictionary::RankedDictionaries;
use crate::scoring;

/// Finds repeated blocks, earliest first. For each repeated region the
/// candidate covering the longest span wins, with its unit reduced to the
/// shortest block that exactly tiles the span; ties prefer the shortest
/// unit. The scan resumes after each region.
pub(crate) fn repeat_match(chars: &[char], dicts: &RankedDictionaries) -> Vec<Match> {
    let n = chars.len();
    let mut matches = Vec::new();
    // the base token is scored on its own, without the caller's user inputs
    let empty_user = HashMap::new();
    let mut search_from = 0;

    while search_from + 1 < n {
        let Some((i, base_len, span)) = next_repeat(chars, search_from) else {
            break;
        };
        let j = i + span - 1;

        let base_token: String = chars[i..i + base_len].iter().collect();
        let base_chars: Vec<char> = chars[i..i + base_len].to_vec();
        let base_candidates = find_matches(&base_token, dicts, &empty_user);
        let scored = scoring::most_guessable_match_sequence(&base_chars, base_candidates);

        matches.push(Match::new(
            MatchKind::Repeat {
                base_token,
                base_guesses: scored.guesses,
                base_matches: scored.sequence,
                repeat_count: span / base_len,
            },
            i,
            j,
            chars[i..=j].iter().collect(),
        ));
        search_from = j + 1;
    }

    matches
}

/// Earliest position at or after `from` where some block repeats at least
/// twice, returning `(start, base_len, total_span)`.
fn next_repeat(chars: &[char], from: usize) -> Option<(usize, usize, usize)> {
    let n = chars.len();
    for start in from..n {
        let rest = n - start;
        let mut shortest: Option<(usize, usize)> = None;
        let mut longest: Option<(usize, usize)> = None;
        for base_len in 1..=rest / 2 {
            let count = repetitions(chars, start, base_len);
            if count >= 2 {
                if shortest.is_none() {
                    shortest = Some((base_len, base_len * count));
                }
                longest = Some((base_len, base_len * count));
            }
        }
        let (Some((short_len, short_span)), Some((_, long_span))) = (shortest, longest) else {
            continue;
        };
        if long_span > short_span {
            // a longer unit covers more; reduce it to the shortest block
            // that exactly tiles the span
            let base_len = shortest_tiling_unit(&chars[start..start + long_span]);
            return Some((start, base_len, long_span));
        }
        return Some((start, short_len, short_span));
    }
    None
}

/// Number of consecutive copies of `chars[start..start + base_len]` found at
/// `start`, including the first.
fn repetitions(chars: &[char], start: usize, base_len: usize) -> usize {
    let base = &chars[start..start + base_len];
    let mut count = 1;
    let mut pos = start + base_len;
    while pos + base_len <= chars.len() && &chars[pos..pos + base_len] == base {
        count += 1;
        pos += base_len;
    }
    count
}

/// Shortest block length that tiles `region` exactly.
fn shortest_tiling_unit(region: &[char]) -> usize {
    let span = region.len();
    for base_len in 1..=span / 2 {
        if span % base_len == 0
            && region.chunks(base_len).all(|chunk| chunk == &region[..base_len])
        {
            return base_len;
        }
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(password: &str) -> Vec<Match> {
        let dicts = RankedDictionaries::from_word_lists(&[("words", &["winter"])]);
        let chars: Vec<char> = password.chars().collect();
        repeat_match(&chars, &dicts)
    }

    fn payload(m: &Match) -> (&str, usize, f64) {
        match &m.kind {
            MatchKind::Repeat { base_token, repeat_count, base_guesses, .. } => {
                (base_token.as_str(), *repeat_count, *base_guesses)
            }
            other => panic!("expected repeat match, got {:?}", other),
        }
    }

    #[test]
    fn test_single_character_repeat() {
        let matches = run("aaaa");
        assert_eq!(matches.len(), 1);
        let (base, count, _) = payload(&matches[0]);
        assert_eq!(base, "a");
        assert_eq!(count, 4);
    }

    #[test]
    fn test_block_repeat() {
        let matches = run("sdfgsdfg");
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].i, matches[0].j), (0, 7));
        let (base, count, _) = payload(&matches[0]);
        assert_eq!(base, "sdfg");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_longest_span_wins_over_shortest_unit() {
        // "aab" repeated beats the two-character run "aa"
        let matches = run("aabaab");
        assert_eq!((matches[0].i, matches[0].j), (0, 5));
        let (base, count, _) = payload(&matches[0]);
        assert_eq!(base, "aab");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_embedded_repeat() {
        let matches = run("xyabcabcq");
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].i, matches[0].j), (2, 7));
        let (base, count, _) = payload(&matches[0]);
        assert_eq!(base, "abc");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_multiple_regions() {
        let matches = run("aaaXbcbc");
        assert_eq!(matches.len(), 2);
        assert_eq!(payload(&matches[0]).0, "a");
        assert_eq!(payload(&matches[1]).0, "bc");
    }

    #[test]
    fn test_base_token_is_scored_recursively() {
        let matches = run("winterwinter");
        assert_eq!(matches.len(), 1);
        let (base, count, base_guesses) = payload(&matches[0]);
        assert_eq!(base, "winter");
        assert_eq!(count, 2);
        // rank 1 dictionary word, plus the single-sequence additive term
        assert_eq!(base_guesses, 2.0);
        match &matches[0].kind {
            MatchKind::Repeat { base_matches, .. } => {
                assert_eq!(base_matches.len(), 1);
                assert_eq!(base_matches[0].pattern(), "dictionary");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_no_repeat() {
        assert!(run("abcdefg").is_empty());
    }
}
