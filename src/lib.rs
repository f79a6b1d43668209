pub mod commands;
pub mod config;
pub mod state;
pub mod store;
pub mod utils;
pub mod validation;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "devsnap",
    about = "📸 Manage your developer portfolio from the command line",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}
