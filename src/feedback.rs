//! Feedback generation - a warning and suggestions derived from the score
//! and the chosen match sequence.

use crate::matching::{Match, MatchKind};
use crate::translation::Translations;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feedback {
    pub warning: String,
    pub suggestions: Vec<String>,
}

const EXTRA_SUGGESTION: &str = "Add another word or two. Uncommon words are better.";

/// Builds feedback for a scored password. Strong passwords (score > 2) get
/// none; weak ones get advice keyed off the longest match in the sequence.
pub(crate) fn get_feedback(score: u8, sequence: &[Match]) -> Feedback {
    if sequence.is_empty() {
        return Feedback {
            warning: String::new(),
            suggestions: vec![
                "Use a few words, avoid common phrases".to_string(),
                "No need for symbols, digits, or uppercase letters".to_string(),
            ],
        };
    }
    if score > 2 {
        return Feedback::default();
    }

    let longest = sequence
        .iter()
        .fold(&sequence[0], |longest, m| {
            if m.token.chars().count() > longest.token.chars().count() { m } else { longest }
        });

    let mut feedback = get_match_feedback(longest, sequence.len() == 1);
    feedback.suggestions.insert(0, EXTRA_SUGGESTION.to_string());
    feedback
}

fn get_match_feedback(m: &Match, is_sole_match: bool) -> Feedback {
    match &m.kind {
        MatchKind::Dictionary { .. } => dictionary_feedback(m, is_sole_match),
        MatchKind::Spatial { turns, .. } => Feedback {
            warning: if *turns == 1 {
                "Straight rows of keys are easy to guess".to_string()
            } else {
                "Short keyboard patterns are easy to guess".to_string()
            },
            suggestions: vec!["Use a longer keyboard pattern with more turns".to_string()],
        },
        MatchKind::Repeat { base_token, .. } => Feedback {
            warning: if base_token.chars().count() == 1 {
                "Repeats like \"aaa\" are easy to guess".to_string()
            } else {
                "Repeats like \"abcabcabc\" are only slightly harder to guess than \"abc\""
                    .to_string()
            },
            suggestions: vec!["Avoid repeated words and characters".to_string()],
        },
        MatchKind::Sequence { .. } => Feedback {
            warning: "Sequences like abc or 6543 are easy to guess".to_string(),
            suggestions: vec!["Avoid sequences".to_string()],
        },
        MatchKind::Regex { name, .. } if *name == "recent_year" => Feedback {
            warning: "Recent years are easy to guess".to_string(),
            suggestions: vec![
                "Avoid recent years".to_string(),
                "Avoid years that are associated with you".to_string(),
            ],
        },
        MatchKind::Date { .. } => Feedback {
            warning: "Dates are often easy to guess".to_string(),
            suggestions: vec![
                "Avoid dates and years that are associated with you".to_string(),
            ],
        },
        _ => Feedback::default(),
    }
}

fn dictionary_feedback(m: &Match, is_sole_match: bool) -> Feedback {
    let MatchKind::Dictionary { dictionary_name, rank, reversed, l33t, .. } = &m.kind else {
        return Feedback::default();
    };

    let warning = if dictionary_name == "passwords" {
        if is_sole_match && !*l33t && !*reversed {
            if *rank <= 10 {
                "This is a top-10 common password"
            } else if *rank <= 100 {
                "This is a top-100 common password"
            } else {
                "This is a very common password"
            }
        } else if m.guesses_log10() <= 4.0 {
            "This is similar to a commonly used password"
        } else {
            ""
        }
    } else if dictionary_name == "english_wikipedia" {
        if is_sole_match { "A word by itself is easy to guess" } else { "" }
    } else if dictionary_name == "surnames"
        || dictionary_name == "male_names"
        || dictionary_name == "female_names"
    {
        if is_sole_match {
            "Names and surnames by themselves are easy to guess"
        } else {
            "Common names and surnames are easy to guess"
        }
    } else {
        ""
    };

    let mut suggestions = Vec::new();
    let chars: Vec<char> = m.token.chars().collect();
    if chars.len() > 1
        && chars[0].is_uppercase()
        && chars[1..].iter().all(|c| !c.is_uppercase())
    {
        suggestions.push("Capitalization doesn't help very much".to_string());
    } else if chars.iter().any(|c| c.is_uppercase()) && chars.iter().all(|c| !c.is_lowercase()) {
        suggestions
            .push("All-uppercase is almost as easy to guess as all-lowercase".to_string());
    }
    if *reversed && chars.len() >= 4 {
        suggestions.push("Reversed words aren't much harder to guess".to_string());
    }
    if *l33t {
        suggestions.push(
            "Predictable substitutions like '@' instead of 'a' don't help very much".to_string(),
        );
    }

    Feedback { warning: warning.to_string(), suggestions }
}

/// Translates the warning and every suggestion, falling back to the
/// untranslated phrase where the map has no entry.
pub(crate) fn localize(feedback: Feedback, translations: Option<&Translations>) -> Feedback {
    let Some(translations) = translations else {
        return feedback;
    };
    Feedback {
        warning: translations.translate(&feedback.warning).to_string(),
        suggestions: feedback
            .suggestions
            .into_iter()
            .map(|s| translations.translate(&s).to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn dictionary_match(
        dictionary_name: &str,
        rank: usize,
        token: &str,
        reversed: bool,
        l33t: bool,
    ) -> Match {
        Match::new(
            MatchKind::Dictionary {
                dictionary_name: dictionary_name.to_string(),
                matched_word: token.to_lowercase(),
                rank,
                reversed,
                l33t,
                substitutions: BTreeMap::new(),
            },
            0,
            token.chars().count() - 1,
            token.to_string(),
        )
    }

    #[test]
    fn test_empty_sequence_gets_default_advice() {
        let feedback = get_feedback(0, &[]);
        assert_eq!(feedback.warning, "");
        assert_eq!(feedback.suggestions.len(), 2);
    }

    #[test]
    fn test_strong_password_gets_no_feedback() {
        let m = dictionary_match("passwords", 5, "password", false, false);
        let feedback = get_feedback(3, &[m]);
        assert_eq!(feedback, Feedback::default());
    }

    #[test]
    fn test_top_ten_password_warning() {
        let m = dictionary_match("passwords", 5, "password", false, false);
        let feedback = get_feedback(0, std::slice::from_ref(&m));
        assert_eq!(feedback.warning, "This is a top-10 common password");
        assert_eq!(feedback.suggestions[0], EXTRA_SUGGESTION);
    }

    #[test]
    fn test_very_common_password_warning() {
        let m = dictionary_match("passwords", 130, "password1", false, false);
        let feedback = get_feedback(0, std::slice::from_ref(&m));
        assert_eq!(feedback.warning, "This is a very common password");
    }

    #[test]
    fn test_word_by_itself_warning() {
        let m = dictionary_match("english_wikipedia", 927, "knife", false, false);
        let feedback = get_feedback(1, std::slice::from_ref(&m));
        assert_eq!(feedback.warning, "A word by itself is easy to guess");
    }

    #[test]
    fn test_capitalization_suggestion() {
        let m = dictionary_match("english_wikipedia", 927, "Knife", false, false);
        let feedback = get_feedback(1, std::slice::from_ref(&m));
        assert!(feedback
            .suggestions
            .contains(&"Capitalization doesn't help very much".to_string()));
    }

    #[test]
    fn test_l33t_suggestion() {
        let m = dictionary_match("passwords", 3, "p4ssword", false, true);
        let feedback = get_feedback(1, std::slice::from_ref(&m));
        assert!(feedback.suggestions.iter().any(|s| s.contains("Predictable substitutions")));
    }

    #[test]
    fn test_sequence_warning() {
        let m = Match::new(MatchKind::Sequence { ascending: false }, 0, 4, "65432".to_string());
        let feedback = get_feedback(0, std::slice::from_ref(&m));
        assert_eq!(feedback.warning, "Sequences like abc or 6543 are easy to guess");
    }

    #[test]
    fn test_feedback_keyed_off_longest_match() {
        let short = Match::new(MatchKind::Bruteforce, 0, 0, "x".to_string());
        let long = dictionary_match("english_wikipedia", 927, "knife", false, false);
        let mut long = long;
        long.i = 1;
        long.j = 5;
        let feedback = get_feedback(1, &[short, long]);
        // dictionary feedback, but not the sole-match phrasing
        assert_eq!(feedback.warning, "");
    }
}
