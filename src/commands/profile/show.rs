use anyhow::Result;
use clap::Parser;

use super::utils::get_user;
use crate::state::State;
use crate::utils::urlify;

#[derive(Debug, Parser)]
#[clap(about = "Show your profile, or another user's")]
#[group(skip)]
pub struct Options {
    #[clap(help = "ID of the user, defaults to you")]
    pub user: Option<String>,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let user_id = match options.user {
        Some(user_id) => user_id,
        None => state.require_user().await?.id,
    };

    let user = get_user(&state.http, &user_id).await?;

    println!("{} ({})", console::style(&user.name).bold(), user.id);

    if let Some(username) = &user.github_username {
        println!("GitHub: {}", urlify(&format!("https://github.com/{username}")));
    }

    if let Some(email) = &user.email {
        println!("Email: {email}");
    }

    if let Some(image) = user.profile_image.as_deref().filter(|i| !i.is_empty()) {
        println!("Image: {image}");
    }

    match user.bio.as_deref().filter(|b| !b.is_empty()) {
        Some(bio) => println!("\n{bio}"),
        None => println!("\nNo bio yet, generate one with `ai bio --apply`"),
    }

    Ok(())
}
