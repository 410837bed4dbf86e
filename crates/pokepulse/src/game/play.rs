use std::time::{Duration, Instant};

use chrono::Utc;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{self, MissedTickBehavior};

use crate::game::store::ScoreStore;
use crate::prelude::{println, *};
use pokepulse_core::round::{self, Difficulty, Feedback, Phase, RoundConfig, RoundState};
use pokepulse_core::scores::{attempts_percent, format_clock, ScoreRecord};

#[derive(Debug, clap::Args, Clone)]
pub struct PlayOptions {
    /// Difficulty preset: easy, medium, hard, custom
    #[arg(short, long, env = "POKEPULSE_DIFFICULTY", default_value = "medium")]
    pub difficulty: String,

    /// Lowest possible number (custom difficulty only)
    #[arg(long)]
    pub min: Option<i64>,

    /// Highest possible number (custom difficulty only)
    #[arg(long)]
    pub max: Option<i64>,

    /// Attempt budget per round (custom difficulty only)
    #[arg(long)]
    pub attempts: Option<u32>,

    /// Race a countdown timer
    #[arg(long, default_value = "false")]
    pub timer: bool,

    /// Countdown budget in seconds
    #[arg(long, default_value = "60")]
    pub timer_seconds: u64,
}

/// How one round handed control back to the session loop.
enum RoundEnd {
    /// The round reached a terminal phase and was recorded.
    Finished,
    /// The player quit mid-round; nothing was recorded.
    Abandoned,
}

pub async fn run(options: PlayOptions, global: crate::Global) -> Result<()> {
    let (difficulty, config) = resolve_config(&options)?;
    let store = ScoreStore::open()?;

    if global.verbose {
        println!("Score history: {}", store.path().display());
        println!();
    }

    print!("{}", format_welcome(&config, difficulty));

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        match play_round(&mut lines, config, difficulty, &store).await? {
            RoundEnd::Finished => {
                println!();
                println!("{}", "Play again? [y/N]".bright_white().bold());
                match lines.next_line().await? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
                    _ => break,
                }
            }
            RoundEnd::Abandoned => break,
        }
    }

    Ok(())
}

/// Resolve the effective round settings from the difficulty preset plus any
/// custom overrides.
pub fn resolve_config(options: &PlayOptions) -> Result<(Difficulty, RoundConfig)> {
    let difficulty: Difficulty = options.difficulty.parse().map_err(|e: String| eyre!(e))?;

    if difficulty != Difficulty::Custom
        && (options.min.is_some() || options.max.is_some() || options.attempts.is_some())
    {
        return Err(eyre!(
            "Custom bounds require --difficulty custom (got: {})",
            difficulty
        ));
    }

    let mut config = difficulty.settings();
    if let Some(min) = options.min {
        config.min_number = min;
    }
    if let Some(max) = options.max {
        config.max_number = max;
    }
    if let Some(attempts) = options.attempts {
        config.max_attempts = attempts;
    }
    config.timer_enabled = options.timer;
    config.timer_seconds = options.timer_seconds;

    config.validate().map_err(|e| eyre!("{}", e))?;

    Ok((difficulty, config))
}

/// Run one round to completion or abandonment.
///
/// The countdown interval lives inside this function: every return below
/// drops it, so a finished or abandoned round can never tick again.
async fn play_round(
    lines: &mut Lines<BufReader<Stdin>>,
    config: RoundConfig,
    difficulty: Difficulty,
    store: &ScoreStore,
) -> Result<RoundEnd> {
    let mut state = round::start(config);
    log::debug!("round target: {}", state.target);

    let started = Instant::now();

    let mut ticker = time::interval_at(
        time::Instant::now() + Duration::from_secs(1),
        Duration::from_secs(1),
    );
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    print!("{}", format_status(&state));
    print_prompt(&state);

    while !state.phase.is_terminal() {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    println!();
                    println!("{}", "Round abandoned. The number stays secret.".yellow());
                    return Ok(RoundEnd::Abandoned);
                };

                let input = line.trim();
                if input.is_empty() {
                    print_prompt(&state);
                    continue;
                }
                if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
                    println!("{}", "Round abandoned. The number stays secret.".yellow());
                    return Ok(RoundEnd::Abandoned);
                }

                let (next, feedback) = match round::parse_guess(input) {
                    Some(value) => round::submit_guess(&state, value),
                    None => (state.clone(), Feedback::Invalid),
                };
                state = next;

                println!("{}", format_feedback(feedback));
                if !state.phase.is_terminal() {
                    print!("{}", format_status(&state));
                    print_prompt(&state);
                }
            }
            _ = ticker.tick(), if state.config.timer_enabled => {
                state = round::tick(&state);
                if state.phase == Phase::Lost {
                    println!();
                    println!("{}", "Time's up!".red().bold());
                } else if let Some(warning) = format_time_warning(&state) {
                    println!("{}", warning);
                }
            }
        }
    }

    finish_round(&state, difficulty, started, store)?;
    Ok(RoundEnd::Finished)
}

fn finish_round(
    state: &RoundState,
    difficulty: Difficulty,
    started: Instant,
    store: &ScoreStore,
) -> Result<()> {
    let elapsed = started.elapsed().as_secs();
    let Some(record) = round::completion_record(state, difficulty, Utc::now(), Some(elapsed))
    else {
        return Ok(());
    };

    print!("{}", format_outcome(state, &record));
    store.append(record)?;

    Ok(())
}

fn format_welcome(config: &RoundConfig, difficulty: Difficulty) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", "NUMBER GUESSING GAME".bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(
        "\nI'll think of a number and you try to guess it. Every guess tells you\n\
         whether the target is higher or lower.\n",
    );

    result.push_str(&format!(
        "\n{}: {}\n",
        "Difficulty".green(),
        difficulty.label().bright_white().bold()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Range".green(),
        format!("{} to {}", config.min_number, config.max_number).bright_white()
    ));
    result.push_str(&format!(
        "{}: {}\n",
        "Attempts".green(),
        config.max_attempts.to_string().bright_white()
    ));
    if config.timer_enabled {
        result.push_str(&format!(
            "{}: {}\n",
            "Timer".green(),
            format_clock(config.timer_seconds).bright_white()
        ));
    }

    result.push('\n');
    result
}

/// Attempts, remaining time, the interval the target can still be in, and
/// the guesses so far.
fn format_status(state: &RoundState) -> String {
    let mut result = String::new();

    let used = attempts_percent(state.remaining_attempts, state.config.max_attempts);
    let attempts_line = format!(
        "Attempts left: {} of {}",
        state.remaining_attempts, state.config.max_attempts
    );
    let attempts_line = if used > 75.0 {
        attempts_line.red().to_string()
    } else if used > 50.0 {
        attempts_line.yellow().to_string()
    } else {
        attempts_line.green().to_string()
    };
    result.push_str(&format!("{}\n", attempts_line));

    if state.config.timer_enabled {
        result.push_str(&format!(
            "Time left: {}\n",
            format_clock(state.time_remaining)
        ));
    }

    result.push_str(&format!(
        "Possible range: {} to {}\n",
        state.feasible_min, state.feasible_max
    ));

    result.push_str(&format_history(state, false));
    result
}

fn print_prompt(state: &RoundState) {
    println!(
        "{}",
        format!(
            "Enter a number between {} and {} (or 'q' to quit):",
            state.feasible_min, state.feasible_max
        )
        .bright_white()
    );
}

fn format_feedback(feedback: Feedback) -> String {
    match feedback {
        Feedback::TooHigh => "Your guess is too high!".red().bold().to_string(),
        Feedback::TooLow => "Your guess is too low!".blue().bold().to_string(),
        Feedback::Correct => "Your guess is correct!".green().bold().to_string(),
        Feedback::Invalid => "Please enter a valid number within the range."
            .yellow()
            .to_string(),
    }
}

/// One chip per guess with its direction arrow, plus the target once the
/// round is over.
fn format_history(state: &RoundState, show_target: bool) -> String {
    if state.guesses.is_empty() {
        return String::new();
    }

    let mut result = String::new();
    result.push_str(&format!("{}: ", "Guesses".green()));

    let chips: Vec<String> = state
        .guesses
        .iter()
        .map(|&guess| {
            if guess > state.target {
                format!("{guess}↑").red().to_string()
            } else if guess < state.target {
                format!("{guess}↓").blue().to_string()
            } else {
                format!("{guess}✓").green().to_string()
            }
        })
        .collect();
    result.push_str(&chips.join(" "));

    if show_target {
        result.push_str(&format!(
            " {}",
            format!("(target: {})", state.target).bright_magenta()
        ));
    }

    result.push('\n');
    result
}

fn format_outcome(state: &RoundState, record: &ScoreRecord) -> String {
    let mut result = String::new();
    result.push('\n');

    if record.success {
        result.push_str(&format!(
            "{}\n",
            "Congratulations! You won!".green().bold()
        ));
        result.push_str(&format!(
            "You guessed the number {} correctly in {} of {} attempts.\n",
            record.number, record.attempts_used, record.max_attempts
        ));
    } else {
        result.push_str(&format!("{}\n", "Game Over!".red().bold()));
        result.push_str(&format!("The number was {}.\n", record.number));
    }

    if let Some(seconds) = record.time_used {
        result.push_str(&format!("Time: {}\n", format_clock(seconds)));
    }

    result.push_str(&format_history(state, true));
    result
}

/// Periodic countdown reminder: every ten seconds, and each of the last
/// five.
fn format_time_warning(state: &RoundState) -> Option<String> {
    if !state.config.timer_enabled || state.phase != Phase::Active {
        return None;
    }

    let remaining = state.time_remaining;
    if remaining == 0 || (remaining > 5 && remaining % 10 != 0) {
        return None;
    }

    let line = format!("Time remaining: {}", format_clock(remaining));
    let line = if remaining < 10 {
        line.red().bold().to_string()
    } else if remaining < 30 {
        line.yellow().to_string()
    } else {
        line.blue().to_string()
    };

    Some(line)
}
