use colored::Colorize;

use crate::game::store::ScoreStore;
use crate::prelude::{println, *};
use pokepulse_core::scores::{best_score, format_date, ScoreRecord};

#[derive(Debug, clap::Args, Clone)]
pub struct ScoresOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Delete the persisted score history and exit
    #[arg(long)]
    pub clear: bool,
}

pub async fn run(options: ScoresOptions, global: crate::Global) -> Result<()> {
    let store = ScoreStore::open()?;

    if global.verbose {
        println!("Score history: {}", store.path().display());
        println!();
    }

    if options.clear {
        store.clear()?;
        println!("{}", "Score history cleared.".green());
        return Ok(());
    }

    let history = store.load();

    if options.json {
        let json = serde_json::to_string_pretty(&history)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", format_scores_text(&history));
    Ok(())
}

/// Scoreboard for the persisted ledger: the best win up top, then every
/// recorded round, newest first.
fn format_scores_text(history: &[ScoreRecord]) -> String {
    let mut result = String::new();

    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!("{}\n", "SCORE HISTORY".bright_cyan().bold()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    if history.is_empty() {
        result.push_str(&f!("\n{}\n\n", "No games played yet.".yellow()));
        return result;
    }

    if let Some(best) = best_score(history) {
        let time_note = best
            .time_used
            .map(|seconds| f!(" ({} seconds)", seconds))
            .unwrap_or_default();

        result.push_str(&f!("\n{}\n", "Best Score".bright_yellow().bold()));
        result.push_str(&f!(
            "Guessed the number {} in {} attempts{} on {}.\n",
            best.number,
            best.attempts_used,
            time_note,
            format_date(best.date)
        ));
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Date".bold().cyan(),
        "Difficulty".bold().cyan(),
        "Number".bold().cyan(),
        "Attempts".bold().cyan(),
        "Result".bold().cyan()
    ]);

    for record in history {
        let attempts = match record.time_used {
            Some(seconds) => f!(
                "{}/{} ({}s)",
                record.attempts_used, record.max_attempts, seconds
            ),
            None => f!("{}/{}", record.attempts_used, record.max_attempts),
        };

        let verdict = if record.success {
            "✓ Won".green().to_string()
        } else {
            "✗ Lost".red().to_string()
        };

        table.add_row(prettytable::row![
            format_date(record.date).bright_black(),
            record.difficulty.label().bright_white(),
            record.number.to_string().bright_yellow(),
            attempts,
            verdict
        ]);
    }
    result.push_str(&f!("\n{}", table));

    result.push_str(&f!("\n{}:\n", "To play".bright_white().bold()));
    result.push_str(&f!("  {}\n", "pokepulse game play".cyan()));

    result.push('\n');
    result
}
