//! Guessing-round state machine.
//!
//! Every transition takes the current state by reference and returns a new
//! state by value. Callers own the only mutable binding, so a round can never
//! be mutated behind the shell's back.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::scores::ScoreRecord;

/// Bounds accepted for custom round settings.
pub mod limits {
    pub const MIN_NUMBER: i64 = 1;
    pub const MAX_NUMBER: i64 = 1000;
    pub const MIN_ATTEMPTS: u32 = 1;
    pub const MAX_ATTEMPTS: u32 = 20;
    pub const MIN_TIMER_SECONDS: u64 = 10;
    pub const MAX_TIMER_SECONDS: u64 = 300;
}

/// Named difficulty presets. `Custom` starts from the default settings and is
/// meant to be overridden by the caller before the round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom,
}

impl Difficulty {
    /// The preset round settings for this difficulty. The timer is off by
    /// default for every preset, with a 60 second budget once enabled.
    pub fn settings(self) -> RoundConfig {
        let (min_number, max_number, max_attempts) = match self {
            Difficulty::Easy => (1, 50, 10),
            Difficulty::Medium => (1, 100, 7),
            Difficulty::Hard => (1, 200, 7),
            Difficulty::Custom => (1, 100, 10),
        };

        RoundConfig {
            min_number,
            max_number,
            max_attempts,
            timer_enabled: false,
            timer_seconds: 60,
        }
    }

    /// Human-facing label, e.g. `Easy (1-50)`.
    pub fn label(self) -> String {
        let settings = self.settings();
        match self {
            Difficulty::Custom => String::from("Custom"),
            Difficulty::Easy => format!("Easy ({}-{})", settings.min_number, settings.max_number),
            Difficulty::Medium => {
                format!("Medium ({}-{})", settings.min_number, settings.max_number)
            }
            Difficulty::Hard => format!("Hard ({}-{})", settings.min_number, settings.max_number),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "custom" => Ok(Difficulty::Custom),
            other => Err(format!(
                "Invalid difficulty: {other}. Valid difficulties: easy, medium, hard, custom"
            )),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Settings a round is started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub min_number: i64,
    pub max_number: i64,
    pub max_attempts: u32,
    pub timer_enabled: bool,
    pub timer_seconds: u64,
}

impl RoundConfig {
    /// Check the settings against [`limits`]. Presets always pass; custom
    /// overrides go through here before a round starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_number < limits::MIN_NUMBER {
            return Err(ConfigError::MinBelowFloor(self.min_number));
        }

        if self.max_number > limits::MAX_NUMBER {
            return Err(ConfigError::MaxAboveCeiling(self.max_number));
        }

        if self.min_number >= self.max_number {
            return Err(ConfigError::EmptyRange {
                min: self.min_number,
                max: self.max_number,
            });
        }

        if self.max_attempts < limits::MIN_ATTEMPTS || self.max_attempts > limits::MAX_ATTEMPTS {
            return Err(ConfigError::AttemptsOutOfRange(self.max_attempts));
        }

        if self.timer_enabled
            && !(limits::MIN_TIMER_SECONDS..=limits::MAX_TIMER_SECONDS)
                .contains(&self.timer_seconds)
        {
            return Err(ConfigError::TimerOutOfRange(self.timer_seconds));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("minimum number {0} is below the floor of {floor}", floor = limits::MIN_NUMBER)]
    MinBelowFloor(i64),

    #[error("maximum number {0} is above the ceiling of {ceiling}", ceiling = limits::MAX_NUMBER)]
    MaxAboveCeiling(i64),

    #[error("minimum number {min} must be less than maximum number {max}")]
    EmptyRange { min: i64, max: i64 },

    #[error(
        "attempts must be between {min} and {max}, got {0}",
        min = limits::MIN_ATTEMPTS,
        max = limits::MAX_ATTEMPTS
    )]
    AttemptsOutOfRange(u32),

    #[error(
        "timer must be between {min} and {max} seconds, got {0}",
        min = limits::MIN_TIMER_SECONDS,
        max = limits::MAX_TIMER_SECONDS
    )]
    TimerOutOfRange(u64),
}

/// Lifecycle of a round. `Won` and `Lost` are terminal: no transition leaves
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Initial,
    Active,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Verdict on a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feedback {
    TooHigh,
    TooLow,
    Correct,
    Invalid,
}

/// Full state of one guessing round.
///
/// `feasible_min` and `feasible_max` track the interval the target can still
/// be in, given the feedback handed out so far. They only ever narrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub config: RoundConfig,
    pub target: i64,
    pub guesses: Vec<i64>,
    pub remaining_attempts: u32,
    pub feasible_min: i64,
    pub feasible_max: i64,
    pub time_remaining: u64,
    pub phase: Phase,
}

/// Start a round with a freshly drawn target.
pub fn start(config: RoundConfig) -> RoundState {
    let target = rand::thread_rng().gen_range(config.min_number..=config.max_number);
    start_with_target(config, target)
}

/// Deterministic variant of [`start`] for callers that already know the
/// target.
pub fn start_with_target(config: RoundConfig, target: i64) -> RoundState {
    RoundState {
        config,
        target,
        guesses: Vec::new(),
        remaining_attempts: config.max_attempts,
        feasible_min: config.min_number,
        feasible_max: config.max_number,
        time_remaining: if config.timer_enabled {
            config.timer_seconds
        } else {
            0
        },
        phase: Phase::Active,
    }
}

/// Parse raw user input into a guess value. Non-integer input is rejected
/// without spending an attempt, same as an out-of-range guess.
pub fn parse_guess(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// Apply one guess to the round.
///
/// Out-of-range values leave the state untouched and cost nothing. A valid
/// guess always consumes one attempt, narrows the feasible interval on a
/// miss, and ends the round on a hit or when the attempt budget runs out.
/// Terminal rounds ignore further guesses.
pub fn submit_guess(state: &RoundState, value: i64) -> (RoundState, Feedback) {
    if state.phase != Phase::Active {
        return (state.clone(), Feedback::Invalid);
    }

    if value < state.config.min_number || value > state.config.max_number {
        return (state.clone(), Feedback::Invalid);
    }

    let mut next = state.clone();
    next.guesses.push(value);
    next.remaining_attempts = next.remaining_attempts.saturating_sub(1);

    let feedback = if value == next.target {
        next.phase = Phase::Won;
        Feedback::Correct
    } else if value > next.target {
        next.feasible_max = next.feasible_max.min(value - 1);
        Feedback::TooHigh
    } else {
        next.feasible_min = next.feasible_min.max(value + 1);
        Feedback::TooLow
    };

    if next.phase != Phase::Won && next.remaining_attempts == 0 {
        next.phase = Phase::Lost;
    }

    (next, feedback)
}

/// Advance the countdown by one second. A no-op for untimed rounds and for
/// rounds that already ended; reaching zero loses the round.
pub fn tick(state: &RoundState) -> RoundState {
    if state.phase != Phase::Active || !state.config.timer_enabled {
        return state.clone();
    }

    let mut next = state.clone();
    next.time_remaining = next.time_remaining.saturating_sub(1);
    if next.time_remaining == 0 {
        next.phase = Phase::Lost;
    }
    next
}

/// Build the [`ScoreRecord`] for a finished round, or `None` while the round
/// is still running.
///
/// Timed rounds report how much of the timer budget was consumed. Untimed
/// rounds report the caller-measured wall clock on a win and nothing on a
/// loss.
pub fn completion_record(
    state: &RoundState,
    difficulty: Difficulty,
    finished_at: DateTime<Utc>,
    untimed_elapsed: Option<u64>,
) -> Option<ScoreRecord> {
    let success = match state.phase {
        Phase::Won => true,
        Phase::Lost => false,
        Phase::Initial | Phase::Active => return None,
    };

    let time_used = if state.config.timer_enabled {
        Some(state.config.timer_seconds - state.time_remaining)
    } else if success {
        untimed_elapsed
    } else {
        None
    };

    Some(ScoreRecord {
        date: finished_at,
        difficulty,
        attempts_used: state.config.max_attempts - state.remaining_attempts,
        max_attempts: state.config.max_attempts,
        success,
        number: state.target,
        time_used,
    })
}
