use crate::prelude::*;

pub mod play;
pub mod scores;
pub mod store;

// Re-export the shared store handle
pub use store::ScoreStore;

#[derive(Debug, clap::Parser)]
#[command(name = "game")]
#[command(about = "Number-guessing game operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Play guessing rounds interactively
    #[clap(name = "play")]
    Play(play::PlayOptions),

    /// Show the persisted score history
    #[clap(name = "scores")]
    Scores(scores::ScoresOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Play(options) => play::run(options, global).await,
        Commands::Scores(options) => scores::run(options, global).await,
    }
}
