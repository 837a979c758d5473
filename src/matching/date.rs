//! Date matcher - numeric dates in day/month/year orderings, with and
//! without separators.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Match, MatchKind};

pub(crate) const REFERENCE_YEAR: i32 = 2026;
const DATE_MIN_YEAR: i32 = 1000;
const DATE_MAX_YEAR: i32 = 2050;

/// How an unseparated digit run of a given length can split into three
/// fields: `(k, l)` splits `token` into `[..k]`, `[k..l]`, `[l..]`.
fn date_splits(len: usize) -> &'static [(usize, usize)] {
    match len {
        4 => &[(1, 2), (2, 3)],
        5 => &[(1, 3), (2, 3)],
        6 => &[(1, 2), (2, 4), (4, 5)],
        7 => &[(1, 3), (2, 3), (4, 5), (4, 6)],
        8 => &[(2, 4), (4, 6)],
        _ => &[],
    }
}

// the reference pattern uses a backreference for "same separator twice";
// matched here with two separator groups compared afterwards
static SEPARATED_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,4})([\s/\\_.-])(\d{1,2})([\s/\\_.-])(\d{1,4})$")
        .expect("separated date pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq)]
struct Dmy {
    year: i32,
    month: u32,
    day: u32,
}

/// Finds date-like substrings, preferring the reading closest to the
/// reference year for ambiguous digit runs, and dropping any date match
/// fully contained in another.
pub(crate) fn date_match(chars: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    let n = chars.len();

    // dates without separators: 4-8 digit runs
    for i in 0..n {
        for j in (i + 3)..n.min(i + 8) {
            let token = &chars[i..=j];
            if !token.iter().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let best = date_splits(token.len())
                .iter()
                .filter_map(|&(k, l)| {
                    map_ints_to_dmy([
                        to_int(&token[..k]),
                        to_int(&token[k..l]),
                        to_int(&token[l..]),
                    ])
                })
                .min_by_key(|dmy| (dmy.year - REFERENCE_YEAR).abs());
            if let Some(dmy) = best {
                matches.push(date(i, j, token, None, dmy));
            }
        }
    }

    // dates with separators: 6-10 characters
    for i in 0..n {
        for j in (i + 5)..n.min(i + 10) {
            let token: String = chars[i..=j].iter().collect();
            let Some(caps) = SEPARATED_DATE.captures(&token) else { continue };
            if caps[2] != caps[4] {
                continue;
            }
            let ints = [
                caps[1].parse().unwrap_or(0),
                caps[3].parse().unwrap_or(0),
                caps[5].parse().unwrap_or(0),
            ];
            if let Some(dmy) = map_ints_to_dmy(ints) {
                let separator = caps[2].chars().next();
                matches.push(date(i, j, &chars[i..=j], separator, dmy));
            }
        }
    }

    // a date embedded in a longer date is a weaker reading of the same run
    let contained: Vec<bool> = matches
        .iter()
        .map(|m| {
            matches
                .iter()
                .any(|o| (o.i, o.j) != (m.i, m.j) && o.i <= m.i && o.j >= m.j)
        })
        .collect();
    let mut keep = contained.iter().copied();
    matches.retain(|_| !keep.next().unwrap_or(false));
    matches.sort_by_key(|m| (m.i, m.j));
    matches
}

fn date(i: usize, j: usize, token: &[char], separator: Option<char>, dmy: Dmy) -> Match {
    Match::new(
        MatchKind::Date { separator, year: dmy.year, month: dmy.month, day: dmy.day },
        i,
        j,
        token.iter().collect(),
    )
}

fn to_int(digits: &[char]) -> i32 {
    digits.iter().fold(0, |acc, c| acc * 10 + (*c as i32 - '0' as i32))
}

/// Maps three integers onto a calendar date, trying year-last then
/// year-first, with two-digit years pushed into a plausible century.
fn map_ints_to_dmy(ints: [i32; 3]) -> Option<Dmy> {
    // the middle field is a day or a month in every supported ordering
    if ints[1] > 31 || ints[1] <= 0 {
        return None;
    }

    let mut over_12 = 0;
    let mut over_31 = 0;
    let mut under_1 = 0;
    for int in ints {
        if (99 < int && int < DATE_MIN_YEAR) || int > DATE_MAX_YEAR {
            return None;
        }
        if int > 31 {
            over_31 += 1;
        }
        if int > 12 {
            over_12 += 1;
        }
        if int <= 0 {
            under_1 += 1;
        }
    }
    if over_31 >= 2 || over_12 == 3 || under_1 >= 2 {
        return None;
    }

    let year_splits = [(ints[2], [ints[0], ints[1]]), (ints[0], [ints[1], ints[2]])];

    for (year, rest) in year_splits {
        if (DATE_MIN_YEAR..=DATE_MAX_YEAR).contains(&year) {
            // a four-digit year with no valid day/month reading invalidates
            // the whole candidate
            return map_ints_to_dm(rest).map(|(day, month)| Dmy { year, month, day });
        }
    }
    for (year, rest) in year_splits {
        if let Some((day, month)) = map_ints_to_dm(rest) {
            return Some(Dmy { year: two_to_four_digit_year(year), month, day });
        }
    }
    None
}

fn map_ints_to_dm(ints: [i32; 2]) -> Option<(u32, u32)> {
    for (day, month) in [(ints[0], ints[1]), (ints[1], ints[0])] {
        if (1..=31).contains(&day) && (1..=12).contains(&month) {
            return Some((day as u32, month as u32));
        }
    }
    None
}

fn two_to_four_digit_year(year: i32) -> i32 {
    if year > 99 {
        year
    } else if year > 50 {
        year + 1900
    } else {
        year + 2000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(password: &str) -> Vec<Match> {
        let chars: Vec<char> = password.chars().collect();
        date_match(&chars)
    }

    fn payload(m: &Match) -> (Option<char>, i32, u32, u32) {
        match &m.kind {
            MatchKind::Date { separator, year, month, day } => {
                (*separator, *year, *month, *day)
            }
            other => panic!("expected date match, got {:?}", other),
        }
    }

    #[test]
    fn test_separated_date() {
        let matches = run("13.8.1997");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token, "13.8.1997");
        assert_eq!(payload(&matches[0]), (Some('.'), 1997, 8, 13));
    }

    #[test]
    fn test_mismatched_separators_are_rejected() {
        assert!(run("13.8/97").is_empty());
    }

    #[test]
    fn test_unseparated_date() {
        let matches = run("1391997");
        assert_eq!(matches.len(), 1);
        let (sep, year, _, _) = payload(&matches[0]);
        assert_eq!(sep, None);
        assert_eq!(year, 1997);
    }

    #[test]
    fn test_ambiguous_run_prefers_year_closest_to_reference() {
        // 111524 reads as 11/15/24 (2024) rather than 1/1/1524
        let matches = run("111524");
        let full = matches.iter().find(|m| m.token == "111524").expect("full run");
        let (_, year, _, _) = payload(full);
        assert_eq!(year, 2024);
    }

    #[test]
    fn test_two_digit_years_map_into_plausible_centuries() {
        assert_eq!(two_to_four_digit_year(97), 1997);
        assert_eq!(two_to_four_digit_year(12), 2012);
        assert_eq!(two_to_four_digit_year(1987), 1987);
    }

    #[test]
    fn test_invalid_day_month_combinations_are_rejected() {
        assert!(run("99.99.97").is_empty());
        assert!(run("0.0.97").is_empty());
    }

    #[test]
    fn test_embedded_date() {
        let matches = run("x13.8.1997x");
        assert_eq!(matches.len(), 1);
        assert_eq!((matches[0].i, matches[0].j), (1, 9));
    }

    #[test]
    fn test_contained_dates_are_pruned() {
        // the 8-digit run also contains valid shorter runs
        let matches = run("11151991");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token, "11151991");
        let (_, year, _, _) = payload(&matches[0]);
        assert_eq!(year, 1991);
    }

    #[test]
    fn test_plain_words_have_no_dates() {
        assert!(run("justaword").is_empty());
    }
}
