#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use devsnap::commands::{completions, handle_command, Commands};
use devsnap::config::Config;
use devsnap::state::{State, StateOptions};
use devsnap::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    // completions need neither the API nor the auth store
    let command = match cli.commands {
        Commands::Completions(options) => return completions::handle(options),
        command => command,
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("{error:#}");
            std::process::exit(1);
        }
    };

    let state = match State::new(StateOptions {
        config,
        auth_path: None,
    })
    .await
    {
        Ok(state) => state,
        Err(error) => {
            log::error!("{error:#}");
            std::process::exit(1);
        }
    };

    if let Err(error) = handle_command(command, state).await {
        log::error!("{error:#}");
        utils::clean_term();
        std::process::exit(1);
    }

    Ok(())
}
