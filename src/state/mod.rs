pub mod cache;
pub mod http;
pub mod session;

use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use reqwest::Url;

use self::http::HttpClient;
use self::session::{build_authorize_url, generate_oauth_state, Session, SessionStatus};
use crate::commands::auth::login::util::CallbackParams;
use crate::commands::auth::types::User;
use crate::commands::auth::utils::{get_current_user, post_logout};
use crate::config::{Config, EXEC_NAME};
use crate::store::auth::Auth;
use crate::store::Store;

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub session: Session,
    pub http: HttpClient,
    status: SessionStatus,
}

pub struct StateOptions {
    pub config: Config,
    /// Where the auth store lives, defaults to the home directory.
    pub auth_path: Option<PathBuf>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let path = match options.auth_path {
            Some(path) => path,
            None => Auth::default_path()?,
        };

        let auth = Auth::load(path).await?;
        let session = Session::new(auth);
        let http = HttpClient::new(&options.config.api_url, session.clone())?;

        Ok(State {
            config: options.config,
            session,
            http,
            status: SessionStatus::Unauthenticated,
        })
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn user(&self) -> Option<&User> {
        self.status.user()
    }

    /// Resolves the session from the stored token, the equivalent of landing on `/`.
    pub async fn mount(&mut self) -> &SessionStatus {
        if self.session.token().await.is_none() {
            self.status = SessionStatus::Unauthenticated;
            return &self.status;
        }

        self.status = SessionStatus::Loading;

        self.status = match get_current_user(&self.http).await {
            Ok(user) => SessionStatus::Authenticated(Box::new(user)),
            Err(error) => {
                log::debug!("Failed to fetch the current user: {error}");

                SessionStatus::Unauthenticated
            }
        };

        &self.status
    }

    /// Mounts and fails unless a user is signed in.
    pub async fn require_user(&mut self) -> Result<User> {
        self.mount().await;

        if let Some(user) = self.status.user() {
            return Ok(user.clone());
        }

        ensure!(
            self.session.token().await.is_none(),
            "Could not load your profile. Check your connection and try again, or run `{} auth login`",
            EXEC_NAME
        );

        bail!("You are not logged in. Please run `{EXEC_NAME} auth login` first.")
    }

    /// Persists a fresh OAuth nonce and returns the URL to send the user to.
    pub async fn login(&self) -> Result<Url> {
        ensure!(
            matches!(self.status, SessionStatus::Unauthenticated),
            "Already logged in"
        );

        let state = generate_oauth_state();
        self.session.set_oauth_state(&state).await?;

        build_authorize_url(&self.config, &state)
    }

    /// Handles the redirect back from the provider. Returns the new status;
    /// no token is stored unless the callback is valid.
    pub async fn complete_callback(&mut self, params: &CallbackParams) -> Result<&SessionStatus> {
        let expected_state = self.session.take_oauth_state().await?;

        match params.token() {
            Some(token) => match (&params.state, &expected_state) {
                (Some(received), Some(expected)) if received != expected => {
                    log::warn!("OAuth state did not match, ignoring the callback");
                }
                (Some(_), None) => {
                    log::warn!("No login was in progress, ignoring the callback");
                }
                (None, _) => {
                    log::debug!("Callback carried no OAuth state");
                    self.session.set_token(token).await?;
                }
                _ => self.session.set_token(token).await?,
            },
            None => log::debug!("Callback carried no usable token"),
        }

        Ok(self.mount().await)
    }

    /// Stores a token given directly, then mounts with it.
    pub async fn login_with_token(&mut self, token: &str) -> Result<User> {
        ensure!(!token.trim().is_empty(), "Token cannot be empty");

        self.session.set_token(token.trim()).await?;
        self.mount().await;

        if let Some(user) = self.status.user() {
            return Ok(user.clone());
        }

        self.session.clear().await?;

        bail!("The token was rejected")
    }

    pub async fn logout(&mut self) -> Result<()> {
        ensure!(
            self.session.token().await.is_some(),
            "You are not logged in. Please run `{} auth login` first.",
            EXEC_NAME
        );

        if let Err(error) = post_logout(&self.http).await {
            log::debug!("Logout request failed: {error}");
        }

        self.session
            .clear()
            .await
            .context("Failed to clear the session")?;

        self.status = SessionStatus::Unauthenticated;

        Ok(())
    }
}
