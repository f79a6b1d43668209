use anyhow::Result;
use clap::Parser;

use super::types::SummaryRequest;
use super::utils::{apply_summary, generate_project_summary};
use crate::commands::projects::utils::{format_project, get_project, parse_tech_stack};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Generate a summary for a project")]
#[group(skip)]
pub struct Options {
    #[clap(long = "project", help = "ID of the project to summarize")]
    pub project: Option<String>,
    #[clap(long = "title", help = "Title, overrides the project's")]
    pub title: Option<String>,
    #[clap(long = "description", help = "Description, overrides the project's")]
    pub description: Option<String>,
    #[clap(long = "tech-stack", help = "Technologies used, comma separated")]
    pub tech_stack: Option<String>,
    #[clap(long = "apply", help = "Save the summary to the project", requires = "project")]
    pub apply: bool,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    state.require_user().await?;

    let mut request = SummaryRequest {
        title: String::new(),
        description: None,
        tech_stack: None,
    };

    let project = match &options.project {
        Some(project_id) => Some(get_project(&state.http, project_id).await?),
        None => None,
    };

    if let Some(project) = &project {
        request.title = project.title.clone();
        request.description = project.description.clone();
        request.tech_stack = project.tech_stack.clone();
    }

    if let Some(title) = options.title {
        request.title = title;
    }

    if let Some(description) = options.description {
        request.description = Some(description);
    }

    if let Some(tech_stack) = options.tech_stack {
        request.tech_stack = Some(parse_tech_stack(&tech_stack));
    }

    let summary = generate_project_summary(&state.http, &request).await?;

    println!("{summary}");

    // clap makes `--apply` require `--project`
    if let (true, Some(project)) = (options.apply, &project) {
        let project = apply_summary(&state.http, project, summary).await?;

        log::info!("Saved the summary to {}", format_project(&project));
    }

    Ok(())
}
