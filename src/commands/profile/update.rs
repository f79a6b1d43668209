use anyhow::Result;
use clap::Parser;

use super::types::ProfileForm;
use super::utils::{prompt_profile_form, update_user};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Edit your profile, prompts for every field unless flags are given")]
#[group(skip)]
pub struct Options {
    #[clap(long = "name", help = "Display name")]
    pub name: Option<String>,
    #[clap(long = "email", help = "Public email")]
    pub email: Option<String>,
    #[clap(long = "github-username", help = "GitHub username")]
    pub github_username: Option<String>,
    #[clap(long = "bio", help = "Short bio")]
    pub bio: Option<String>,
    #[clap(long = "profile-image", help = "URL of your profile picture")]
    pub profile_image: Option<String>,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let user = state.require_user().await?;
    let mut form = ProfileForm::from_user(&user);

    let fields = [
        (options.name, &mut form.name),
        (options.email, &mut form.email),
        (options.github_username, &mut form.github_username),
        (options.bio, &mut form.bio),
        (options.profile_image, &mut form.profile_image),
    ];

    let mut any_given = false;

    for (value, field) in fields {
        if let Some(value) = value {
            *field = value;
            any_given = true;
        }
    }

    if !any_given {
        form = prompt_profile_form(&form)?;
    }

    let updated = update_user(&state.http, &user.id, &form.into_update()?).await?;

    log::info!("Updated profile of `{}`", updated.name);

    Ok(())
}
