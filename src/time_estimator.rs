//! Attack-time estimation - maps a guess count onto crack times for a few
//! fixed attack scenarios.

use std::collections::BTreeMap;

use crate::scoring::guesses_to_score;

/// Guessing rates per scenario, in guesses per second.
const SCENARIOS: &[(&str, f64)] = &[
    ("online_throttling_100_per_hour", 100.0 / 3600.0),
    ("online_no_throttling_10_per_second", 10.0),
    ("offline_slow_hashing_1e4_per_second", 1e4),
    ("offline_fast_hashing_1e10_per_second", 1e10),
];

#[derive(Debug, Clone)]
pub(crate) struct AttackTimes {
    pub crack_times_seconds: BTreeMap<String, f64>,
    pub crack_times_display: BTreeMap<String, String>,
    pub score: u8,
}

pub(crate) fn estimate_attack_times(guesses: f64) -> AttackTimes {
    let mut crack_times_seconds = BTreeMap::new();
    let mut crack_times_display = BTreeMap::new();
    for (scenario, rate) in SCENARIOS {
        let seconds = guesses / rate;
        crack_times_seconds.insert((*scenario).to_string(), seconds);
        crack_times_display.insert((*scenario).to_string(), display_time(seconds));
    }
    AttackTimes { crack_times_seconds, crack_times_display, score: guesses_to_score(guesses) }
}

fn display_time(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = MINUTE * 60.0;
    const DAY: f64 = HOUR * 24.0;
    const MONTH: f64 = DAY * 31.0;
    const YEAR: f64 = MONTH * 12.0;
    const CENTURY: f64 = YEAR * 100.0;

    let (amount, unit) = if seconds < 1.0 {
        return "less than a second".to_string();
    } else if seconds < MINUTE {
        (seconds, "second")
    } else if seconds < HOUR {
        (seconds / MINUTE, "minute")
    } else if seconds < DAY {
        (seconds / HOUR, "hour")
    } else if seconds < MONTH {
        (seconds / DAY, "day")
    } else if seconds < YEAR {
        (seconds / MONTH, "month")
    } else if seconds < CENTURY {
        (seconds / YEAR, "year")
    } else {
        return "centuries".to_string();
    };

    let amount = amount.round() as u64;
    if amount == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", amount, unit)
    }
}
