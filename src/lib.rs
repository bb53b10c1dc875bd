//! Thin async client for the Spotify Web API catalog surface.
//!
//! Each operation builds its request URL, issues one GET with an optional
//! bearer token, and hands back the parsed JSON body untouched — no retries,
//! no status-code inspection, no caching.
//!
//! ```no_run
//! use spotify_catalog::{Config, SpotifyClient};
//!
//! # async fn run() -> spotify_catalog::Result<()> {
//! let client = SpotifyClient::new(Config::with_token("token"));
//! let album = client.album().get("4aawyAB9vmqN3uQ7FjRGTy").await?;
//! let artists = client.search().artists("Incubus").await?;
//! # Ok(())
//! # }
//! ```

mod album;
mod client;
mod config;
mod error;
mod search;

pub use album::Albums;
pub use client::SpotifyClient;
pub use config::{Config, API_URL};
pub use error::{Error, Result};
pub use search::{Search, SearchType};
