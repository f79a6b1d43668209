pub mod ai;
pub mod auth;
pub mod blogs;
pub mod completions;
pub mod profile;
pub mod projects;
pub mod whoami;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Auth(auth::Options),
    #[clap(name = "whoami", alias = "dashboard", alias = "me")]
    Whoami(whoami::Options),
    Projects(projects::Options),
    Blogs(blogs::Options),
    Profile(profile::Options),
    Ai(ai::Options),
    Completions(completions::Options),
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Auth(options) => auth::handle(options, state).await,
        Commands::Whoami(options) => whoami::handle(options, state).await,
        Commands::Projects(options) => projects::handle(options, state).await,
        Commands::Blogs(options) => blogs::handle(options, state).await,
        Commands::Profile(options) => profile::handle(options, state).await,
        Commands::Ai(options) => ai::handle(options, state).await,
        // handled before any state exists
        Commands::Completions(options) => completions::handle(options),
    }
}
