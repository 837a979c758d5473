//! Sequence matcher - runs of consecutive code points like "abcd" or "4321".

use super::{Match, MatchKind};

const MIN_SEQUENCE_LENGTH: usize = 3;

/// Finds maximal runs of length >= 3 where consecutive code points differ by
/// a constant delta of +1 or -1.
pub(crate) fn sequence_match(chars: &[char]) -> Vec<Match> {
    let n = chars.len();
    let mut matches = Vec::new();
    let mut i = 0;

    while i + 1 < n {
        let delta = chars[i + 1] as i64 - chars[i] as i64;
        if delta.abs() != 1 {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j + 1 < n && chars[j + 1] as i64 - chars[j] as i64 == delta {
            j += 1;
        }

        if j - i + 1 >= MIN_SEQUENCE_LENGTH {
            matches.push(Match::new(
                MatchKind::Sequence { ascending: delta > 0 },
                i,
                j,
                chars[i..=j].iter().collect(),
            ));
        }
        // runs may share their boundary character with the next run
        i = j;
    }

    matches
}
