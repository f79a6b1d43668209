use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::utils::home_path;
use super::Store;
use crate::config::AUTH_STORE_PATH;

/// Persisted credentials: the session token and the pending OAuth nonce.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Auth {
    pub token: Option<String>,
    pub oauth_state: Option<String>,
    #[serde(skip)]
    pub path: PathBuf,
}

impl Auth {
    pub fn default_path() -> Result<PathBuf> {
        home_path(AUTH_STORE_PATH)
    }
}

#[async_trait]
impl Store for Auth {
    async fn load(path: PathBuf) -> Result<Self> {
        if fs::metadata(&path).await.is_err() {
            let auth = Self {
                path,
                ..Default::default()
            };

            auth.save().await?;

            return Ok(auth);
        }

        let mut file = File::open(&path)
            .await
            .with_context(|| format!("Error opening {}", path.display()))?;

        let mut buffer = String::new();
        file.read_to_string(&mut buffer).await?;

        let mut auth: Self = serde_json::from_str(&buffer).context("Failed to deserialize")?;
        auth.path = path;

        Ok(auth)
    }

    async fn save(&self) -> Result<()> {
        fs::create_dir_all(self.path.parent().context("Failed to get store directory")?)
            .await
            .context("Failed to create store directory")?;

        let mut file = File::create(&self.path)
            .await
            .with_context(|| format!("Error opening {}", self.path.display()))?;

        file.write_all(
            serde_json::to_string(&self)
                .context("Failed to serialize")?
                .as_bytes(),
        )
        .await
        .context("Failed to write store")?;

        log::debug!("Saved auth store to {}", self.path.display());

        Ok(())
    }
}
