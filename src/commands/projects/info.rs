use anyhow::Result;
use clap::Parser;

use super::utils::get_project;
use crate::state::State;
use crate::utils::{format_timestamp, urlify};

#[derive(Debug, Parser)]
#[clap(about = "Show a project")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the project")]
    pub project: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let project = get_project(&state.http, &options.project).await?;

    println!("{} ({})", console::style(&project.title).bold(), project.id);

    if let Some(description) = &project.description {
        println!("\n{description}\n");
    }

    if let Some(tech_stack) = project.tech_stack.as_ref().filter(|t| !t.is_empty()) {
        println!("Tech stack: {}", tech_stack.join(", "));
    }

    if let Some(link) = project.github_link.as_deref().filter(|l| !l.is_empty()) {
        println!("GitHub: {}", urlify(link));
    }

    if let Some(link) = project.demo_link.as_deref().filter(|l| !l.is_empty()) {
        println!("Demo: {}", urlify(link));
    }

    if let Some(summary) = project.summary.as_deref().filter(|s| !s.is_empty()) {
        println!("Summary: {summary}");
    }

    println!(
        "Updated: {}",
        format_timestamp(project.updated_at.as_deref())
    );

    Ok(())
}
