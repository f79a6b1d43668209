use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::{delete_blog, format_blog, get_blog};
use crate::state::State;
use crate::utils::confirm;

#[derive(Debug, Parser)]
#[clap(about = "Delete a blog post")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the post")]
    pub blog: String,
    #[clap(long = "no-confirm", help = "Skip confirmation")]
    force: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let blog = get_blog(&state.http, &options.blog).await?;

    ensure!(
        confirm(
            &format!(
                "Are you sure you want to delete {}? This cannot be undone",
                format_blog(&blog)
            ),
            options.force
        )?,
        "Aborted deletion of {}",
        format_blog(&blog)
    );

    delete_blog(&state.http, &blog.id).await?;

    log::info!("Deleted {}", format_blog(&blog));

    Ok(())
}
