use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

pub const ARCH: &str = std::env::consts::ARCH;
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "devsnap";
#[cfg(windows)]
pub const EXEC_NAME: &str = "devsnap.exe";

pub const AUTH_STORE_PATH: &str = ".devsnap/auth.json";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const CALLBACK_TIMEOUT_MIN: u16 = 5;

pub const GITHUB_AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
pub const OAUTH_SCOPE: &str = "user:email";
pub const OAUTH_PROVIDER: &str = "github";
pub const OAUTH_STATE_LENGTH: usize = 32;
pub const CALLBACK_PATH: &str = "/auth/callback";

const DEFAULT_APP_URL: &str = "http://localhost:3000";

const API_URL_VAR: &str = "DEVSNAP_API_URL";
const CLIENT_ID_VAR: &str = "DEVSNAP_GITHUB_CLIENT_ID";
const CALLBACK_URL_VAR: &str = "DEVSNAP_GITHUB_CALLBACK_URL";
const APP_URL_VAR: &str = "DEVSNAP_APP_URL";
pub const HOME_VAR: &str = "DEVSNAP_HOME";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base of every REST call, without a trailing slash.
    pub api_url: String,
    pub github_client_id: String,
    /// Backend route GitHub redirects to after authorization.
    pub github_callback_url: Url,
    /// Page the backend redirects to with `token` and `provider`.
    pub app_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            var(key)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("`{key}` environment variable is required"))
        };

        let api_url = required(API_URL_VAR)?;
        Url::parse(&api_url).with_context(|| format!("`{API_URL_VAR}` is not a valid URL"))?;

        let github_client_id = required(CLIENT_ID_VAR)?;

        let github_callback_url = Url::parse(&required(CALLBACK_URL_VAR)?)
            .with_context(|| format!("`{CALLBACK_URL_VAR}` is not a valid URL"))?;

        let app_url = Url::parse(&var(APP_URL_VAR).unwrap_or_else(|| DEFAULT_APP_URL.to_string()))
            .with_context(|| format!("`{APP_URL_VAR}` is not a valid URL"))?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            github_client_id,
            github_callback_url,
            app_url,
        })
    }
}
