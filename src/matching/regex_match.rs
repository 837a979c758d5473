//! Fixed-pattern matcher. The only pattern is a bare four-digit year in a
//! plausible range.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Match, MatchKind};

static RECENT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"19\d\d|20\d\d").expect("recent year pattern compiles"));

pub(crate) fn regex_match(chars: &[char]) -> Vec<Match> {
    let password: String = chars.iter().collect();
    let mut matches = Vec::new();

    for found in RECENT_YEAR.find_iter(&password) {
        // byte offsets -> code-point indices
        let i = password[..found.start()].chars().count();
        let j = i + found.as_str().chars().count() - 1;
        let year = found.as_str().parse().unwrap_or(0);
        matches.push(Match::new(
            MatchKind::Regex { name: "recent_year", year },
            i,
            j,
            found.as_str().to_string(),
        ));
    }

    matches
}
