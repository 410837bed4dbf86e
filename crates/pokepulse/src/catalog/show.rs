use crate::prelude::{println, *};
use colored::Colorize;
use indicatif::ProgressBar;
use pokepulse_core::catalog::{
    build_catalog_detail, format_ability, format_entry_id, format_height, format_stat_name,
    format_weight, stat_percent, CatalogDetail, ImageKind,
};

use super::{fetch_pokemon, fetch_species, progress_spinner, set_spinner_msg};

#[derive(Debug, clap::Args, Clone)]
pub struct ShowOptions {
    /// Pokémon name or Pokédex number (e.g., "pikachu" or "25")
    #[clap(env = "POKEPULSE_POKEMON")]
    pub pokemon: String,

    /// Language for the Pokédex entry and genus
    #[arg(short, long, default_value = "en")]
    pub language: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching Pokémon: {}", options.pokemon);
    }

    let spinner = progress_spinner();
    let detail = show_data(&options.pokemon, &options.language, Some(&spinner)).await;
    spinner.finish_and_clear();
    let detail = detail?;

    if options.json {
        output_json(&detail)?;
    } else {
        output_formatted(&detail)?;
    }

    Ok(())
}

/// Fetches one Pokémon plus its species data and returns the combined detail.
pub async fn show_data(
    pokemon: &str,
    language: &str,
    spinner: Option<&ProgressBar>,
) -> Result<CatalogDetail> {
    let client = reqwest::Client::new();

    set_spinner_msg(spinner, f!("Fetching {pokemon}..."));
    let api_pokemon = fetch_pokemon(&client, pokemon).await?;

    set_spinner_msg(spinner, "Loading Pokédex entry...");
    let species = fetch_species(&client, &api_pokemon.species.url).await?;

    Ok(build_catalog_detail(api_pokemon, &species, language))
}

/// Convert a catalog detail to a JSON string
fn format_detail_json(detail: &CatalogDetail) -> Result<String> {
    serde_json::to_string_pretty(detail).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a catalog detail to formatted text with colors
fn format_detail_text(detail: &CatalogDetail) -> String {
    let mut result = String::new();
    let entry = &detail.entry;

    // Header
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!("{} {}", entry.name.to_uppercase(), format_entry_id(entry.id))
            .bright_cyan()
            .bold()
    ));
    result.push_str(&f!("{}\n", detail.genus.bright_black()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    result.push_str(&f!(
        "\n{}: {}\n",
        "Types".green(),
        entry.types.join(", ").bright_magenta()
    ));

    result.push_str(&f!("\n{}\n", "Pokédex Entry".bright_white().bold()));
    result.push_str(&f!("{}\n", detail.description));

    // Physical profile
    let mut profile = new_table();
    profile.add_row(prettytable::row![
        "Height".green(),
        format_height(entry.height_m).bright_white()
    ]);
    profile.add_row(prettytable::row![
        "Weight".green(),
        format_weight(entry.weight_kg).bright_white()
    ]);
    profile.add_row(prettytable::row![
        "Abilities".green(),
        entry
            .abilities
            .iter()
            .map(|ability| format_ability(ability))
            .collect::<Vec<_>>()
            .join(", ")
            .bright_white()
    ]);
    result.push_str(&f!("\n{}", profile));

    // Base stats with meters
    if !entry.stats.is_empty() {
        result.push_str(&f!("\n{}\n", "Base Stats".bright_white().bold()));
        let mut stats = new_table();
        for stat in &entry.stats {
            stats.add_row(prettytable::row![
                format_stat_name(&stat.name).bold(),
                stat.value.to_string().bright_yellow(),
                colored_stat_meter(&stat.name, stat.value)
            ]);
        }
        result.push_str(&f!("{}", stats));
    }

    // Typed image links
    if !entry.images.is_empty() {
        result.push_str(&f!("\n{}\n", "Images".bright_white().bold()));
        for image in &entry.images {
            let label = match image.kind {
                ImageKind::Artwork => "Artwork",
                ImageKind::Sprite => "Sprite",
            };
            result.push_str(&f!(
                "  {}: {}\n",
                label.green(),
                image.url.cyan().underline()
            ));
        }
    }

    result.push_str(&f!("\n{}:\n", "Related".bright_white().bold()));
    result.push_str(&f!(
        "  {}\n",
        "pokepulse catalog list".cyan()
    ));
    result.push_str(&f!(
        "  {}\n",
        f!("pokepulse catalog show {} --json", entry.name).cyan()
    ));

    result.push('\n');
    result
}

/// The six base stats keep their signature colors in the meter column.
fn colored_stat_meter(stat: &str, value: u32) -> String {
    let bar = meter(stat_percent(value), 20);
    match stat {
        "hp" => bar.green().to_string(),
        "attack" => bar.red().to_string(),
        "defense" => bar.blue().to_string(),
        "special-attack" => bar.magenta().to_string(),
        "special-defense" => bar.yellow().to_string(),
        "speed" => bar.cyan().to_string(),
        _ => bar,
    }
}

fn output_json(detail: &CatalogDetail) -> Result<()> {
    let json = format_detail_json(detail)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(detail: &CatalogDetail) -> Result<()> {
    let formatted = format_detail_text(detail);
    print!("{}", formatted);
    Ok(())
}
