use std::sync::Arc;

use anyhow::Result;
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Url;
use tokio::sync::RwLock;

use super::cache::QueryCache;
use crate::commands::auth::types::User;
use crate::config::{Config, GITHUB_AUTHORIZE_URL, OAUTH_SCOPE, OAUTH_STATE_LENGTH};
use crate::store::auth::Auth;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    /// No token, no user.
    Unauthenticated,
    /// Token present, current user not fetched yet.
    Loading,
    Authenticated(Box<User>),
}

impl SessionStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Process-wide credentials and cached reads. Cloning shares the same store.
#[derive(Debug, Clone)]
pub struct Session {
    auth: Arc<RwLock<Auth>>,
    cache: QueryCache,
}

impl Session {
    pub fn new(auth: Auth) -> Self {
        Self {
            auth: Arc::new(RwLock::new(auth)),
            cache: QueryCache::new(),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub async fn token(&self) -> Option<String> {
        self.auth.read().await.token.clone()
    }

    pub async fn oauth_state(&self) -> Option<String> {
        self.auth.read().await.oauth_state.clone()
    }

    pub async fn set_token(&self, token: &str) -> Result<()> {
        let mut auth = self.auth.write().await;

        auth.token = Some(token.to_string());
        auth.save().await
    }

    pub async fn set_oauth_state(&self, state: &str) -> Result<()> {
        let mut auth = self.auth.write().await;

        auth.oauth_state = Some(state.to_string());
        auth.save().await
    }

    /// Removes and returns the pending OAuth nonce.
    pub async fn take_oauth_state(&self) -> Result<Option<String>> {
        let mut auth = self.auth.write().await;

        let state = auth.oauth_state.take();
        auth.save().await?;

        Ok(state)
    }

    /// Drops the token after the API rejected it. The cache goes with it,
    /// nothing fetched with the old token may outlive it.
    pub async fn expire(&self) -> Result<()> {
        let mut auth = self.auth.write().await;

        auth.token = None;
        self.cache.clear();

        auth.save().await
    }

    /// Drops the token, the OAuth nonce and every cached read.
    pub async fn clear(&self) -> Result<()> {
        let mut auth = self.auth.write().await;

        auth.token = None;
        auth.oauth_state = None;
        self.cache.clear();

        auth.save().await
    }
}

pub fn generate_oauth_state() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(OAUTH_STATE_LENGTH)
        .map(char::from)
        .collect()
}

pub fn build_authorize_url(config: &Config, state: &str) -> Result<Url> {
    let url = Url::parse_with_params(
        GITHUB_AUTHORIZE_URL,
        &[
            ("client_id", config.github_client_id.as_str()),
            ("redirect_uri", config.github_callback_url.as_str()),
            ("scope", OAUTH_SCOPE),
            ("state", state),
        ],
    )?;

    Ok(url)
}
