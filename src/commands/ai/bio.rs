use anyhow::Result;
use clap::Parser;

use super::types::{BioRequest, DEFAULT_TONE};
use super::utils::{apply_bio, generate_bio};
use crate::commands::projects::utils::parse_tech_stack;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Generate a bio, defaults to your profile's details")]
#[group(skip)]
pub struct Options {
    #[clap(long = "name", help = "Name to write about")]
    pub name: Option<String>,
    #[clap(long = "role", help = "Current role, e.g. `Backend engineer`")]
    pub role: Option<String>,
    #[clap(long = "skills", help = "Skills to mention, comma separated")]
    pub skills: Option<String>,
    #[clap(long = "tone", help = "Tone of the bio", default_value = DEFAULT_TONE)]
    pub tone: String,
    #[clap(long = "apply", help = "Save the bio to your profile")]
    pub apply: bool,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let user = state.require_user().await?;

    let request = BioRequest {
        name: options.name.unwrap_or_else(|| user.name.clone()),
        current_role: options.role.filter(|role| !role.trim().is_empty()),
        skills: options
            .skills
            .as_deref()
            .map(parse_tech_stack)
            .filter(|skills| !skills.is_empty()),
        tone_preference: options.tone,
    };

    let bio = generate_bio(&state.http, &request).await?;

    println!("{bio}");

    if options.apply {
        apply_bio(&state.http, &user, bio).await?;

        log::info!("Saved the bio to your profile");
    }

    Ok(())
}
