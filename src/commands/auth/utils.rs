use anyhow::Result;
use serde_json::Value;

use super::types::User;
use crate::state::cache::QueryKey;
use crate::state::http::types::HttpError;
use crate::state::http::HttpClient;

pub fn current_user_key() -> QueryKey {
    QueryKey::from(["auth", "user"])
}

pub async fn get_current_user(http: &HttpClient) -> Result<User, HttpError> {
    http.query(current_user_key(), "/auth/me").await
}

pub async fn post_logout(http: &HttpClient) -> Result<()> {
    http.request::<Value>("POST", "/auth/logout", None).await?;

    Ok(())
}
