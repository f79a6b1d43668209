pub mod types;

use anyhow::Result;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client as AsyncClient, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use self::types::{ErrorResponse, HttpError};
use super::cache::QueryKey;
use super::session::Session;
use crate::config::{ARCH, REQUEST_TIMEOUT, VERSION};

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub ua: String,
    session: Session,
}

impl HttpClient {
    pub fn new(base_url: &str, session: Session) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert("accept", "application/json".parse()?);

        let ua = format!(
            "devsnap/{VERSION} on {} ({ARCH})",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let client = AsyncClient::builder()
            .user_agent(ua.clone())
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            ua,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn handle_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let response = match response.status() {
            StatusCode::NO_CONTENT => return Ok(None),
            StatusCode::UNAUTHORIZED => return Err(self.handle_unauthorized().await),
            status if !status.is_success() => return Err(self.handle_error(response, status).await),
            _ => response,
        };

        let body = response.bytes().await?;

        if body.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&body).map(Some).map_err(HttpError::from)
    }

    async fn handle_unauthorized(&self) -> HttpError {
        log::debug!("API rejected the session token, clearing it");

        if let Err(error) = self.session.expire().await {
            log::warn!("Failed to clear the session: {error:#}");
        }

        HttpError::Unauthorized
    }

    async fn handle_error(&self, response: reqwest::Response, status: StatusCode) -> HttpError {
        let body = response.json::<ErrorResponse>().await;

        match body {
            Ok(body) => HttpError::Api {
                status: status.as_u16(),
                message: body.message(),
            },
            Err(err) => {
                log::debug!("Error deserialize message: {:#?}", err);

                HttpError::Api {
                    status: status.as_u16(),
                    message: status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string(),
                }
            }
        }
    }

    pub async fn request<T>(
        &self,
        method: &str,
        path: &str,
        data: Option<Value>,
    ) -> Result<Option<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let method = method
            .parse::<reqwest::Method>()
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let mut request = self
            .client
            .request(method.clone(), format!("{}{}", self.base_url, path));

        if let Some(token) = self.session.token().await {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        log::debug!("request: {} {}", method, path);

        if let Some(body) = data {
            // show body in debug mode / when developing
            #[cfg(debug_assertions)]
            log::debug!("request body: {}", body);

            request = request.json(&body);
        }

        let now = tokio::time::Instant::now();

        let response = request.send().await?;

        log::debug!("response {} in: {:#?}", response.status(), now.elapsed());

        self.handle_response(response).await
    }

    /// Cached `GET`, callers of the same `key` share one request.
    pub async fn query<T>(&self, key: QueryKey, path: &str) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let value = self
            .session
            .cache()
            .fetch(key, async move {
                self.request::<Value>("GET", path, None)
                    .await
                    .map(Option::unwrap_or_default)
            })
            .await?;

        serde_json::from_value(value.as_ref().clone()).map_err(HttpError::from)
    }

    /// Sends a write and, once it succeeded, invalidates every key under `invalidates`.
    pub async fn mutate<T, B>(
        &self,
        method: &str,
        path: &str,
        body: Option<&B>,
        invalidates: &[QueryKey],
    ) -> Result<Option<T>, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let data = body.map(serde_json::to_value).transpose()?;

        let response = self.request::<T>(method, path, data).await?;

        for key in invalidates {
            self.session.cache().invalidate(key).await;
        }

        Ok(response)
    }
}
