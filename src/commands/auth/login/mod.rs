mod browser_auth;
pub mod util;

use anyhow::{Context, Result};
use clap::Parser;

use self::browser_auth::browser_login;
use super::types::User;
use crate::state::session::SessionStatus;
use crate::state::State;

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Login to DevSnap")]
#[group(skip)]
pub struct Options {
    #[clap(
        long = "token",
        help = "Session token to use instead of logging in with GitHub"
    )]
    pub token: Option<String>,
}

pub async fn handle(options: Options, mut state: State) -> Result<()> {
    let user = match options.token {
        Some(token) => state.login_with_token(&token).await?,

        None => {
            if let SessionStatus::Authenticated(user) = state.mount().await {
                log::info!(
                    "Nothing was changed. You are already logged in as: {}",
                    describe(user)
                );

                return Ok(());
            }

            let auth_url = state.login().await?;
            let params = browser_login(&state.config, &auth_url).await?;

            state.complete_callback(&params).await?;

            state
                .user()
                .cloned()
                .context("Authentication failed, no session was created")?
        }
    };

    log::info!("Logged in as: {}", describe(&user));

    Ok(())
}

pub fn describe(user: &User) -> String {
    let handle = user
        .github_username
        .as_deref()
        .or(user.email.as_deref())
        .unwrap_or(&user.id);

    format!("`{}` ({})", user.name, handle)
}
