//! Guess estimation and the minimum-guesses decomposition search.
//!
//! The cost of a decomposition of `l` matches with guess counts `g_1..g_l`
//! is `l! * product(g_i) + D^(l-1)`: the factorial term models an attacker
//! trying orderings of the chosen patterns, the additive term the minimum
//! number of guesses spent before growing the sequence by one more pattern.

use std::collections::BTreeMap;

use crate::matching::{graph_lookup, Match, MatchKind, REFERENCE_YEAR};

/// Minimum guesses spent per extra pattern in a sequence (the `D` in the
/// additive term).
const MIN_GUESSES_BEFORE_GROWING_SEQUENCE: f64 = 10_000.0;
const MIN_SUBMATCH_GUESSES_SINGLE_CHAR: f64 = 10.0;
const MIN_SUBMATCH_GUESSES_MULTI_CHAR: f64 = 40.0;
const MIN_YEAR_SPACE: i32 = 20;

/// Result of the decomposition search.
#[derive(Debug, Clone)]
pub(crate) struct ScoredSequence {
    pub guesses: f64,
    pub guesses_log10: f64,
    pub sequence: Vec<Match>,
}

/// Buckets total guesses into the 0-4 score.
///
/// The boundaries carry a small slack so that a bruteforce estimate landing
/// exactly on a power of ten still falls in the lower bucket.
pub fn guesses_to_score(guesses: f64) -> u8 {
    const DELTA: f64 = 5.0;
    if guesses < 1e3 + DELTA {
        0
    } else if guesses < 1e6 + DELTA {
        1
    } else if guesses < 1e8 + DELTA {
        2
    } else if guesses < 1e10 + DELTA {
        3
    } else {
        4
    }
}

/// Guess estimate for a match within `password`, floored for tokens shorter
/// than the whole password. Cached on the match.
pub(crate) fn estimate_guesses(m: &Match, password: &[char]) -> f64 {
    *m.guesses.get_or_init(|| {
        let token_len = m.j - m.i + 1;
        let min_guesses = if token_len < password.len() {
            if token_len == 1 {
                MIN_SUBMATCH_GUESSES_SINGLE_CHAR
            } else {
                MIN_SUBMATCH_GUESSES_MULTI_CHAR
            }
        } else {
            1.0
        };
        raw_guesses(m).max(min_guesses)
    })
}

/// Kind-specific guess formula, without the minimum-guesses floor.
pub(crate) fn raw_guesses(m: &Match) -> f64 {
    let guesses = match &m.kind {
        MatchKind::Dictionary { rank, reversed, substitutions, .. } => {
            (*rank as f64)
                * uppercase_variations(&m.token)
                * l33t_variations(&m.token, substitutions)
                * if *reversed { 2.0 } else { 1.0 }
        }
        MatchKind::Spatial { graph_name, turns, shifted_count } => {
            spatial_guesses(m.token.chars().count(), graph_name, *turns, *shifted_count)
        }
        MatchKind::Sequence { ascending } => sequence_guesses(&m.token, *ascending),
        MatchKind::Repeat { base_guesses, repeat_count, .. } => {
            base_guesses * (*repeat_count as f64)
        }
        MatchKind::Date { separator, year, .. } => {
            let year_space = (year - REFERENCE_YEAR).abs().max(MIN_YEAR_SPACE) as f64;
            year_space * 365.0 * if separator.is_some() { 4.0 } else { 1.0 }
        }
        MatchKind::Regex { year, .. } => {
            (year - REFERENCE_YEAR).abs().max(MIN_YEAR_SPACE) as f64
        }
        MatchKind::Bruteforce => bruteforce_guesses(&m.token),
    };
    guesses.max(1.0)
}

fn uppercase_variations(token: &str) -> f64 {
    let chars: Vec<char> = token.chars().collect();
    if !chars.iter().any(|c| c.is_uppercase()) {
        return 1.0;
    }
    let no_upper = |slice: &[char]| slice.iter().all(|c| !c.is_uppercase());
    // a capitalized, all-caps or end-capitalized word is one obvious variant
    // away from its lowercase form
    if chars.len() > 1 {
        if chars[0].is_uppercase() && no_upper(&chars[1..]) {
            return 2.0;
        }
        if chars[chars.len() - 1].is_uppercase() && no_upper(&chars[..chars.len() - 1]) {
            return 2.0;
        }
    }
    if chars.iter().all(|c| !c.is_lowercase()) {
        return 2.0;
    }
    let upper = chars.iter().filter(|c| c.is_uppercase()).count();
    let lower = chars.iter().filter(|c| c.is_lowercase()).count();
    (1..=upper.min(lower)).map(|i| n_ck(upper + lower, i)).sum()
}

fn l33t_variations(token: &str, substitutions: &BTreeMap<char, char>) -> f64 {
    if substitutions.is_empty() {
        return 1.0;
    }
    let lowered: Vec<char> = token.to_lowercase().chars().collect();
    let mut variations = 1.0;
    for (&subbed, &unsubbed) in substitutions {
        let s = lowered.iter().filter(|&&c| c == subbed).count();
        let u = lowered.iter().filter(|&&c| c == unsubbed).count();
        if s == 0 || u == 0 {
            // the token is fully substituted (or not at all) for this pair;
            // the attacker tries both the subbed and unsubbed spelling
            variations *= 2.0;
        } else {
            let possibilities: f64 = (1..=s.min(u)).map(|i| n_ck(s + u, i)).sum();
            variations *= possibilities;
        }
    }
    variations
}

fn spatial_guesses(length: usize, graph_name: &str, turns: usize, shifted_count: usize) -> f64 {
    let (starting_positions, average_degree) = match graph_lookup(graph_name) {
        Some(graph) => (graph.starting_positions, graph.average_degree),
        None => (94.0, 432.0 / 94.0),
    };

    let mut guesses = 0.0;
    for i in 2..=length {
        let possible_turns = turns.min(i - 1);
        for j in 1..=possible_turns {
            guesses += n_ck(i - 1, j - 1) * starting_positions * average_degree.powi(j as i32);
        }
    }

    if shifted_count > 0 {
        let unshifted = length - shifted_count;
        if unshifted == 0 {
            guesses *= 2.0;
        } else {
            let shifted_variations: f64 = (1..=shifted_count.min(unshifted))
                .map(|i| n_ck(shifted_count + unshifted, i))
                .sum();
            guesses *= shifted_variations;
        }
    }
    guesses
}

fn sequence_guesses(token: &str, ascending: bool) -> f64 {
    let base = match token.chars().next() {
        // obvious starting points
        Some('a' | 'A' | 'z' | 'Z' | '0' | '1' | '9') => 4.0,
        Some(c) if c.is_ascii_digit() => 10.0,
        _ => 26.0,
    };
    // a descending sequence doubles the search: the attacker tries every
    // ascending sequence both ways
    let base = if ascending { base } else { base * 2.0 };
    base * token.chars().count() as f64
}

fn bruteforce_guesses(token: &str) -> f64 {
    let mut digits = false;
    let mut lower = false;
    let mut upper = false;
    let mut symbols = false;
    let mut other = false;
    for c in token.chars() {
        if c.is_ascii_digit() {
            digits = true;
        } else if c.is_ascii_lowercase() {
            lower = true;
        } else if c.is_ascii_uppercase() {
            upper = true;
        } else if c.is_ascii() {
            symbols = true;
        } else {
            other = true;
        }
    }
    let charset = [
        (digits, 10.0),
        (lower, 26.0),
        (upper, 26.0),
        (symbols, 33.0),
        (other, 100.0),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, size)| size)
    .sum::<f64>();

    let guesses = charset.powi(token.chars().count() as i32);
    if guesses.is_finite() { guesses } else { f64::MAX }
}

fn n_ck(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 {
        return 1.0;
    }
    let mut result = 1.0;
    let mut n = n as f64;
    for denominator in 1..=k {
        result *= n;
        result /= denominator as f64;
        n -= 1.0;
    }
    result
}

fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, x| acc * x as f64)
}

/// Per-position DP state: for prefix ending at `k` and sequence length `l`,
/// the last match, the minimal guess product, and the minimization target.
struct Optimal {
    last: Vec<BTreeMap<usize, Match>>,
    product: Vec<BTreeMap<usize, f64>>,
    score: Vec<BTreeMap<usize, f64>>,
}

/// Selects the non-overlapping, gap-free decomposition of `password` that
/// minimizes `l! * product(guesses) + D^(l-1)` over the candidate matches.
///
/// Gaps are covered by synthetic bruteforce matches generated inside the
/// scan; the candidate set never needs to contain them.
pub(crate) fn most_guessable_match_sequence(
    password: &[char],
    matches: Vec<Match>,
) -> ScoredSequence {
    let n = password.len();
    if n == 0 {
        return ScoredSequence { guesses: 1.0, guesses_log10: 0.0, sequence: Vec::new() };
    }

    let mut matches_by_end: Vec<Vec<Match>> = vec![Vec::new(); n];
    for m in matches {
        if m.j < n {
            matches_by_end[m.j].push(m);
        }
    }
    for list in &mut matches_by_end {
        list.sort_by_key(|m| m.i);
    }

    let mut optimal = Optimal {
        last: vec![BTreeMap::new(); n],
        product: vec![BTreeMap::new(); n],
        score: vec![BTreeMap::new(); n],
    };

    for k in 0..n {
        for m in matches_by_end[k].clone() {
            if m.i > 0 {
                let lengths: Vec<usize> = optimal.last[m.i - 1].keys().copied().collect();
                for l in lengths {
                    update(&mut optimal, m.clone(), l + 1, password);
                }
            } else {
                update(&mut optimal, m, 1, password);
            }
        }
        bruteforce_update(&mut optimal, k, password);
    }

    // find the cheapest sequence length at the final position and walk the
    // chosen matches back to the start
    let mut best: Option<(usize, f64)> = None;
    for (&l, &score) in &optimal.score[n - 1] {
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((l, score));
        }
    }
    let Some((mut l, guesses)) = best else {
        return ScoredSequence { guesses: 1.0, guesses_log10: 0.0, sequence: Vec::new() };
    };

    let mut sequence = Vec::new();
    let mut k = n - 1;
    while let Some(m) = optimal.last[k].get(&l).cloned() {
        let start = m.i;
        sequence.push(m);
        if start == 0 {
            break;
        }
        k = start - 1;
        l -= 1;
    }
    sequence.reverse();

    ScoredSequence { guesses, guesses_log10: guesses.log10(), sequence }
}

/// Considers a length-`l` sequence ending with `m`; records it when it beats
/// every recorded sequence of the same or smaller length at that position.
fn update(optimal: &mut Optimal, m: Match, l: usize, password: &[char]) {
    let k = m.j;
    let mut product = estimate_guesses(&m, password);
    if l > 1 {
        let Some(&prev) = optimal.product[m.i - 1].get(&(l - 1)) else {
            return;
        };
        product *= prev;
    }

    let score = factorial(l) * product + MIN_GUESSES_BEFORE_GROWING_SEQUENCE.powi(l as i32 - 1);

    for (&competing_l, &competing_score) in &optimal.score[k] {
        if competing_l > l {
            continue;
        }
        if competing_score <= score {
            return;
        }
    }

    optimal.score[k].insert(l, score);
    optimal.product[k].insert(l, product);
    optimal.last[k].insert(l, m);
}

/// Tries covering the prefix end `k` with a synthetic bruteforce match:
/// either one spanning the whole prefix, or one closing the gap after every
/// recorded state.
fn bruteforce_update(optimal: &mut Optimal, k: usize, password: &[char]) {
    update(optimal, make_bruteforce_match(password, 0, k), 1, password);

    for i in 1..=k {
        let states: Vec<(usize, bool)> = optimal.last[i - 1]
            .iter()
            .map(|(&l, last)| (l, matches!(last.kind, MatchKind::Bruteforce)))
            .collect();
        for (l, ends_in_bruteforce) in states {
            // a single bruteforce match spanning both regions always beats
            // two adjacent ones
            if ends_in_bruteforce {
                continue;
            }
            update(optimal, make_bruteforce_match(password, i, k), l + 1, password);
        }
    }
}

fn make_bruteforce_match(password: &[char], i: usize, j: usize) -> Match {
    Match::new(MatchKind::Bruteforce, i, j, password[i..=j].iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::RankedDictionaries;
    use crate::matching::find_matches;
    use std::collections::HashMap;

    fn score_password(password: &str, dicts: &RankedDictionaries) -> ScoredSequence {
        let chars: Vec<char> = password.chars().collect();
        let matches = find_matches(password, dicts, &HashMap::new());
        most_guessable_match_sequence(&chars, matches)
    }

    #[test]
    fn test_n_ck() {
        assert_eq!(n_ck(4, 2), 6.0);
        assert_eq!(n_ck(5, 0), 1.0);
        assert_eq!(n_ck(3, 5), 0.0);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(4), 24.0);
    }

    #[test]
    fn test_uppercase_variations() {
        assert_eq!(uppercase_variations("word"), 1.0);
        assert_eq!(uppercase_variations("Word"), 2.0);
        assert_eq!(uppercase_variations("worD"), 2.0);
        assert_eq!(uppercase_variations("WORD"), 2.0);
        assert_eq!(uppercase_variations("A"), 2.0);
        // 2 upper, 2 lower: C(4,1) + C(4,2)
        assert_eq!(uppercase_variations("WoRd"), 10.0);
    }

    #[test]
    fn test_l33t_variations() {
        let mut subs = BTreeMap::new();
        subs.insert('4', 'a');
        // one '4', no 'a': both spellings tried
        assert_eq!(l33t_variations("p4ss", &subs), 2.0);
        // one '4', one 'a': C(2,1)
        assert_eq!(l33t_variations("4a", &subs), 2.0);
        assert_eq!(l33t_variations("plain", &BTreeMap::new()), 1.0);
    }

    #[test]
    fn test_sequence_guesses() {
        let m = Match::new(MatchKind::Sequence { ascending: false }, 0, 4, "65432".to_string());
        assert_eq!(raw_guesses(&m), 100.0);
        let m = Match::new(MatchKind::Sequence { ascending: true }, 0, 3, "abcd".to_string());
        assert_eq!(raw_guesses(&m), 16.0);
    }

    #[test]
    fn test_spatial_guesses_straight_run() {
        let m = Match::new(
            MatchKind::Spatial { graph_name: "qwerty".to_string(), turns: 1, shifted_count: 0 },
            0,
            3,
            "sdfg".to_string(),
        );
        assert!((raw_guesses(&m) - 1296.0).abs() < 1e-6);
    }

    #[test]
    fn test_date_guesses() {
        let m = Match::new(
            MatchKind::Date { separator: Some('.'), year: 1997, month: 8, day: 13 },
            0,
            8,
            "13.8.1997".to_string(),
        );
        assert_eq!(raw_guesses(&m), 29.0 * 365.0 * 4.0);
    }

    #[test]
    fn test_bruteforce_guesses_charset() {
        let m = Match::new(MatchKind::Bruteforce, 0, 3, "abcd".to_string());
        assert_eq!(raw_guesses(&m), 26f64.powi(4));
        let m = Match::new(MatchKind::Bruteforce, 0, 1, "a1".to_string());
        assert_eq!(raw_guesses(&m), 36f64.powi(2));
    }

    #[test]
    fn test_guesses_to_score_boundaries() {
        assert_eq!(guesses_to_score(1.0), 0);
        assert_eq!(guesses_to_score(1_000_001.0), 1);
        assert_eq!(guesses_to_score(1_000_006.0), 2);
        assert_eq!(guesses_to_score(2e9), 3);
        assert_eq!(guesses_to_score(2e10), 4);
    }

    #[test]
    fn test_score_monotone_in_guesses() {
        let mut previous = 0;
        for guesses in [1.0, 1e2, 1e4, 1e7, 1e9, 1e12] {
            let score = guesses_to_score(guesses);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_empty_password() {
        let scored = most_guessable_match_sequence(&[], Vec::new());
        assert_eq!(scored.guesses, 1.0);
        assert!(scored.sequence.is_empty());
    }

    #[test]
    fn test_no_matches_yields_single_bruteforce() {
        let scored = most_guessable_match_sequence(
            &"dfjkym".chars().collect::<Vec<char>>(),
            Vec::new(),
        );
        assert_eq!(scored.sequence.len(), 1);
        assert_eq!(scored.sequence[0].pattern(), "bruteforce");
        assert_eq!(scored.guesses, 26f64.powi(6) + 1.0);
    }

    #[test]
    fn test_submatch_floor_applies_inside_longer_password() {
        let dicts = RankedDictionaries::from_word_lists(&[("words", &["rock", "you"])]);
        let scored = score_password("rockyou", &dicts);
        let patterns: Vec<&str> = scored.sequence.iter().map(|m| m.pattern()).collect();
        assert_eq!(patterns, vec!["dictionary", "dictionary"]);
        // rank 2, floored at the multi-character minimum
        assert_eq!(scored.sequence[1].guesses(), 40.0);
    }

    #[test]
    fn test_fewer_matches_beat_many_cheap_ones() {
        let dicts = RankedDictionaries::from_word_lists(&[("words", &["aa", "aaaa"])]);
        let scored = score_password("aaaa", &dicts);
        assert_eq!(scored.sequence.len(), 1);
        assert_eq!(scored.sequence[0].token, "aaaa");
    }

    #[test]
    fn test_sequence_scenario() {
        let scored = score_password("65432", &RankedDictionaries::default());
        let patterns: Vec<&str> = scored.sequence.iter().map(|m| m.pattern()).collect();
        assert_eq!(patterns, vec!["sequence"]);
        assert_eq!(scored.guesses, 101.0);
    }

    #[test]
    fn test_coverage_invariant() {
        let dicts = RankedDictionaries::from_word_lists(&[("words", &["winter", "word"])]);
        for password in ["winterword99", "xx13.8.1997zz", "a", "Tr0ub4dour&3"] {
            let scored = score_password(password, &dicts);
            let n = password.chars().count();
            let mut expected_start = 0;
            for m in &scored.sequence {
                assert_eq!(m.i, expected_start);
                expected_start = m.j + 1;
            }
            assert_eq!(expected_start, n);
        }
    }
}
