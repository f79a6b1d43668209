use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

pub mod auth;
pub mod utils;

#[async_trait]
pub trait Store: Sized {
    /// Loads the store from `path`, creating it with defaults if missing.
    async fn load(path: PathBuf) -> Result<Self>;
    async fn save(&self) -> Result<()>;
}
