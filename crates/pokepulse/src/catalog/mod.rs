use crate::prelude::{println, *};
use indicatif::{ProgressBar, ProgressStyle};
use pokepulse_core::catalog::{ApiPokemon, PokemonSpecies};

pub mod list;
pub mod show;
pub mod types;

// Re-export public data functions
pub use list::list_page_data;
pub use show::show_data;
pub use types::types_data;

const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, clap::Parser)]
#[command(name = "catalog")]
#[command(about = "Pokémon catalog (pokeapi.co) operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List a page of Pokémon, with optional search and type filters
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show one Pokémon in detail, including its Pokédex entry
    #[clap(name = "show")]
    Show(show::ShowOptions),

    /// List the known Pokémon types
    #[clap(name = "types")]
    Types(types::TypesOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Catalog API Base: {}", POKEAPI_BASE);
        println!();
    }

    match app.command {
        Commands::List(options) => list::run(options, global).await,
        Commands::Show(options) => show::run(options, global).await,
        Commands::Types(options) => types::run(options, global).await,
    }
}

// Shared utility functions
pub fn get_api_base() -> &'static str {
    POKEAPI_BASE
}

/// Spinner for progress indication while the API calls are in flight.
pub fn progress_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Helper to set spinner message if spinner is present
pub fn set_spinner_msg(spinner: Option<&ProgressBar>, msg: impl Into<String>) {
    if let Some(s) = spinner {
        s.set_message(msg.into());
    }
}

pub async fn fetch_pokemon(client: &reqwest::Client, name_or_id: &str) -> Result<ApiPokemon> {
    let resource = urlencoding::encode(&name_or_id.trim().to_lowercase()).into_owned();
    let url = format!("{}/pokemon/{resource}", get_api_base());
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch Pokémon {}: {}", name_or_id, e))?;

    if !response.status().is_success() {
        return Err(eyre!(
            "Failed to fetch Pokémon {}: HTTP {}",
            name_or_id,
            response.status()
        ));
    }

    let pokemon: ApiPokemon = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse Pokémon {}: {}", name_or_id, e))?;

    Ok(pokemon)
}

pub async fn fetch_species(client: &reqwest::Client, url: &str) -> Result<PokemonSpecies> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch species data: {}", e))?;

    if !response.status().is_success() {
        return Err(eyre!(
            "Failed to fetch species data: HTTP {}",
            response.status()
        ));
    }

    let species: PokemonSpecies = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse species data: {}", e))?;

    Ok(species)
}
