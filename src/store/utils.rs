use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::HOME_VAR;

pub fn home_path(to_join: &str) -> Result<PathBuf> {
    let home = match std::env::var(HOME_VAR) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().context("Could not find `home` directory")?,
    };

    let path = home.join(to_join);

    log::debug!("Home path + joined: {:?}", path);

    Ok(path)
}
