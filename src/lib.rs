//! Password guess estimation library
//!
//! Estimates how many guesses an attacker needs to crack a password by
//! decomposing it into recognizable patterns - dictionary words, leetspeak,
//! keyboard runs, sequences, repeats, dates - and picking the cheapest
//! gap-free decomposition.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GUESS_DATA_DIR`: Custom directory for the bundled frequency lists
//!   (default: `./assets`)
//! - `PWD_GUESS_LANG_DIR`: Custom directory for feedback translation files
//!   (default: `./lang`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_guess::{init_dictionaries, evaluate};
//!
//! // Load the bundled frequency lists (call once at startup)
//! init_dictionaries().expect("Failed to load frequency lists");
//!
//! // Evaluate a password
//! let result = evaluate("correcthorsebatterystaple", &["myusername"])
//!     .expect("dictionaries are loaded");
//!
//! println!("Score: {}/4", result.score);
//! println!("Guesses: {}", result.guesses);
//! for m in &result.sequence {
//!     println!("  {} [{}..{}] {}", m.pattern(), m.i, m.j, m.token);
//! }
//! ```

// Internal modules
mod dictionary;
mod estimator;
mod feedback;
mod matching;
mod scoring;
mod time_estimator;
mod translation;

// Public API
pub use dictionary::{
    init_dictionaries, init_dictionaries_from_dir, DictionaryError, RankedDictionaries,
};
pub use estimator::{evaluate, Evaluation, PasswordEstimator, MAX_PASSWORD_LENGTH};
pub use feedback::Feedback;
pub use matching::{Match, MatchKind};
pub use scoring::guesses_to_score;
pub use translation::Translations;
