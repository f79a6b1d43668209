use reqwest::Url;

use crate::config::{CALLBACK_PATH, OAUTH_PROVIDER};

/// Query parameters the backend appends when redirecting back after OAuth.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallbackParams {
    pub token: Option<String>,
    pub provider: Option<String>,
    pub state: Option<String>,
}

impl CallbackParams {
    pub fn from_query(query: &str) -> Self {
        let url = format!(
            "http://localhost{CALLBACK_PATH}?{}",
            query.trim_start_matches('?')
        );

        Url::parse(&url)
            .map(|url| Self::from_url(&url))
            .unwrap_or_default()
    }

    /// Reads the percent-decoded query pairs of `url`.
    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "token" => params.token = Some(value.into_owned()),
                "provider" => params.provider = Some(value.into_owned()),
                "state" => params.state = Some(value.into_owned()),
                _ => {}
            }
        }

        params
    }

    /// Accepts the full URL the browser landed on, or just its query string.
    pub fn from_input(input: &str) -> Self {
        let input = input.trim();

        match Url::parse(input) {
            Ok(url) => Self::from_url(&url),
            Err(_) => Self::from_query(input),
        }
    }

    /// The token, only when it came from the expected provider.
    pub fn token(&self) -> Option<&str> {
        match (&self.token, &self.provider) {
            (Some(token), Some(provider)) if !token.is_empty() && provider == OAUTH_PROVIDER => {
                Some(token)
            }
            _ => None,
        }
    }
}

pub fn is_loopback(url: &Url) -> bool {
    // the callback listener only binds IPv4
    matches!(url.host_str(), Some("localhost" | "127.0.0.1"))
}
