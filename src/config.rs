use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Default Spotify Web API origin.
pub const API_URL: &str = "https://api.spotify.com/v1";

/// Client configuration. Immutable once the client is built.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Origin requests are issued against.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer credential. When unset, requests carry no Authorization header.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_api_url() -> String {
    API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
        }
    }
}

impl Config {
    /// Default origin with a bearer token.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ..Self::default()
        }
    }

    /// Read configuration from a TOML file. Both keys are optional.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
