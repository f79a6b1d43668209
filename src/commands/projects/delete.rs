use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::{delete_project, format_project, get_project};
use crate::state::State;
use crate::utils::confirm;

#[derive(Debug, Parser)]
#[clap(about = "Delete a project")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: String,
    #[clap(long = "no-confirm", help = "Skip confirmation")]
    force: bool,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = get_project(&state.http, &options.project).await?;

    ensure!(
        confirm(
            &format!(
                "Are you sure you want to delete project {}? This cannot be undone",
                format_project(&project)
            ),
            options.force
        )?,
        "Aborted deletion of {}",
        format_project(&project)
    );

    delete_project(&state.http, &project.id).await?;

    log::info!("Project {} deleted", format_project(&project));

    Ok(())
}
