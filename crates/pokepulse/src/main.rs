#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod catalog;
mod error;
mod game;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse the Pokémon catalog and play the number-guessing game from your terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "POKEPULSE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Pokémon catalog (pokeapi.co) operations
    Catalog(crate::catalog::App),

    /// Number-guessing game operations
    Game(crate::game::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Catalog(sub_app) => crate::catalog::run(sub_app, app.global).await,
        SubCommands::Game(sub_app) => crate::game::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
