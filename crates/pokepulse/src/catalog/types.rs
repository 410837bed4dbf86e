use crate::prelude::{println, *};
use colored::Colorize;
use indicatif::ProgressBar;
use pokepulse_core::catalog::TypeListResponse;

use super::{get_api_base, progress_spinner, set_spinner_msg};

#[derive(Debug, clap::Args, Clone)]
pub struct TypesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: TypesOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching Pokémon types...");
    }

    let spinner = progress_spinner();
    let names = types_data(Some(&spinner)).await;
    spinner.finish_and_clear();
    let names = names?;

    if options.json {
        let json = serde_json::to_string_pretty(&names)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print!("{}", format_types_text(&names));
    }

    Ok(())
}

/// Fetches the names of all known Pokémon types.
pub async fn types_data(spinner: Option<&ProgressBar>) -> Result<Vec<String>> {
    let client = reqwest::Client::new();

    set_spinner_msg(spinner, "Fetching types...");
    let url = format!("{}/type", get_api_base());
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch types: {}", e))?;

    if !response.status().is_success() {
        return Err(eyre!("Failed to fetch types: HTTP {}", response.status()));
    }

    let list: TypeListResponse = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse types: {}", e))?;

    Ok(list.results.into_iter().map(|stub| stub.name).collect())
}

fn format_types_text(names: &[String]) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{} ({}):\n",
        "Known Pokémon types".bright_white().bold(),
        names.len()
    ));
    for name in names {
        result.push_str(&format!("  {}\n", name.bright_magenta()));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To filter the catalog".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        "pokepulse catalog list --type <type>".cyan()
    ));

    result.push('\n');
    result
}
