//! Password guess estimation - main evaluation logic.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::dictionary::{rank_words, with_dictionaries, DictionaryError};
use crate::feedback::{self, Feedback};
use crate::matching::{find_matches, Match};
use crate::scoring;
use crate::time_estimator::estimate_attack_times;
use crate::translation::Translations;

/// Passwords are truncated to this many code points before matching, which
/// bounds the substring scans and the decomposition search.
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Full result of one password evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The evaluated password, after truncation.
    pub password: String,
    /// Estimated guesses to crack the password.
    pub guesses: f64,
    pub guesses_log10: f64,
    /// The optimal decomposition: ordered, non-overlapping, gap-free.
    pub sequence: Vec<Match>,
    /// Strength bucket, 0 (weakest) to 4.
    pub score: u8,
    /// Crack time in seconds per attack scenario.
    pub crack_times_seconds: BTreeMap<String, f64>,
    /// Human-readable crack time per attack scenario.
    pub crack_times_display: BTreeMap<String, String>,
    pub feedback: Feedback,
    /// Evaluation wall time, in seconds.
    pub calc_time: f64,
}

/// Password strength estimator.
///
/// Holds the optional feedback translation map; the ranked dictionaries are
/// process-wide and shared by every estimator.
#[derive(Debug, Clone, Default)]
pub struct PasswordEstimator {
    translations: Option<Translations>,
}

impl PasswordEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the feedback translation map for a language code from the
    /// `lang` directory. A missing or invalid file silently disables
    /// translation.
    pub fn set_feedback_language(&mut self, code: &str) {
        self.translations = Translations::load(code);
    }

    /// Estimates how many guesses an attacker needs for `password`.
    ///
    /// `user_inputs` seeds a per-call dictionary of strings connected to the
    /// user (name, email, site name), matched like any other word list.
    ///
    /// # Errors
    ///
    /// Well-formed input never fails; the only error source is the bundled
    /// frequency lists being missing or empty on first use.
    pub fn evaluate(
        &self,
        password: &str,
        user_inputs: &[&str],
    ) -> Result<Evaluation, DictionaryError> {
        let started = Instant::now();

        let password: String = password.chars().take(MAX_PASSWORD_LENGTH).collect();
        let chars: Vec<char> = password.chars().collect();
        let sanitized_inputs: Vec<String> =
            user_inputs.iter().map(|input| input.to_lowercase()).collect();

        let scored = with_dictionaries(|dicts| {
            let user_dictionary =
                rank_words(sanitized_inputs.iter().map(|input| input.as_str()));
            let matches = find_matches(&password, dicts, &user_dictionary);
            scoring::most_guessable_match_sequence(&chars, matches)
        })?;

        let attack_times = estimate_attack_times(scored.guesses);
        let feedback = feedback::localize(
            feedback::get_feedback(attack_times.score, &scored.sequence),
            self.translations.as_ref(),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "evaluated {} candidate chars in {:?}",
            chars.len(),
            started.elapsed()
        );

        Ok(Evaluation {
            password,
            guesses: scored.guesses,
            guesses_log10: scored.guesses_log10,
            sequence: scored.sequence,
            score: attack_times.score,
            crack_times_seconds: attack_times.crack_times_seconds,
            crack_times_display: attack_times.crack_times_display,
            feedback,
            calc_time: started.elapsed().as_secs_f64(),
        })
    }
}

/// Evaluates a password with the default estimator (no translations).
///
/// # Errors
///
/// See [`PasswordEstimator::evaluate`].
pub fn evaluate(password: &str, user_inputs: &[&str]) -> Result<Evaluation, DictionaryError> {
    PasswordEstimator::new().evaluate(password, user_inputs)
}
