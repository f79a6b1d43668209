mod bio;
mod summary;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "bio")]
    Bio(bio::Options),
    #[clap(name = "summary")]
    Summary(summary::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Generate text for your portfolio")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Bio(options) => bio::handle(options, state).await,
        Commands::Summary(options) => summary::handle(options, state).await,
    }
}
