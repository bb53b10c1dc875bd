use serde_json::Value;

use crate::client::SpotifyClient;
use crate::error::{Error, Result};

/// Album endpoints, obtained through [`SpotifyClient::album`].
pub struct Albums<'a>(pub(crate) &'a SpotifyClient);

impl Albums<'_> {
    /// Fetch a single album by id.
    pub async fn get(&self, id: &str) -> Result<Value> {
        self.0.request(&self.album_url(id)?).await
    }

    /// Fetch several albums in one call. Ids are comma-joined into the
    /// `ids` query parameter, preserving input order.
    pub async fn get_several(&self, ids: &[&str]) -> Result<Value> {
        self.0.request(&self.albums_url(ids)?).await
    }

    /// Fetch the track listing of an album.
    pub async fn tracks(&self, id: &str) -> Result<Value> {
        self.0.request(&self.tracks_url(id)?).await
    }

    fn album_url(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(Error::EmptyInput("album id"));
        }
        Ok(format!("{}/albums/{}", self.0.api_url(), id))
    }

    fn albums_url(&self, ids: &[&str]) -> Result<String> {
        if ids.is_empty() || ids.iter().any(|id| id.is_empty()) {
            return Err(Error::EmptyInput("album ids"));
        }
        Ok(format!("{}/albums/?ids={}", self.0.api_url(), ids.join(",")))
    }

    fn tracks_url(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(Error::EmptyInput("album id"));
        }
        Ok(format!("{}/albums/{}/tracks", self.0.api_url(), id))
    }
}
