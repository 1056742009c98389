use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{BurndownError, Result};

#[derive(Deserialize, Default)]
pub struct Config {
    pub api_token: Option<String>,
    pub default_project: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| BurndownError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| BurndownError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "burndown")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(BurndownError::NoConfigDir)
    }

    /// Get API token with env var taking precedence over config file
    pub fn api_token(&self) -> Result<String> {
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            return Ok(token);
        }

        self.api_token.clone().ok_or(BurndownError::MissingToken)
    }

    /// Resolve the target project id: explicit flag first, then env var,
    /// then the config default
    pub fn resolve_project(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(id) = explicit {
            return Ok(id.to_string());
        }

        if let Ok(id) = std::env::var("PROJECT_ID") {
            if !id.is_empty() {
                return Ok(id);
            }
        }

        self.default_project.clone().ok_or(BurndownError::NoProject)
    }
}
