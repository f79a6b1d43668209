use anyhow::Result;
use clap::Parser;

use super::create::FieldOptions;
use super::types::ProjectForm;
use super::utils::{format_project, get_project, prompt_project_form, update_project};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Edit a project, prompts for every field unless flags are given")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: String,

    #[clap(flatten)]
    pub fields: FieldOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = get_project(&state.http, &options.project).await?;
    let mut form = ProjectForm::from_project(&project);

    if options.fields.is_empty() {
        form = prompt_project_form(&form)?;
    } else {
        options.fields.apply(&mut form);
    }

    let project = update_project(&state.http, &project.id, &form.into_update()?).await?;

    log::info!("Updated project {}", format_project(&project));

    Ok(())
}
