use thiserror::Error;

/// Errors produced by the client.
///
/// Transport and decode failures pass through from `reqwest` untouched;
/// the client does not inspect status codes or retry.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("empty {0}")]
    EmptyInput(&'static str),

    #[error("config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
