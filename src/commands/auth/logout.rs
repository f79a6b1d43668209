use anyhow::Result;
use clap::Parser;

use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Logout the current user")]
#[group(skip)]
pub struct Options {}

pub async fn handle(_options: Options, mut state: State) -> Result<()> {
    state.logout().await?;

    log::info!("You have been logged out");

    Ok(())
}
