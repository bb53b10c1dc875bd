use std::fmt;

use serde_json::Value;

use crate::client::SpotifyClient;
use crate::error::{Error, Result};

/// Entity kinds the search endpoint understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchType {
    Artist,
    Album,
    Track,
    Playlist,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Artist => "artist",
            SearchType::Album => "album",
            SearchType::Track => "track",
            SearchType::Playlist => "playlist",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search endpoints, obtained through [`SpotifyClient::search`].
pub struct Search<'a>(pub(crate) &'a SpotifyClient);

impl Search<'_> {
    /// Search the catalog for `term` across the given entity kinds.
    /// Kinds are comma-joined into the `type` query parameter, preserving
    /// input order. The term is passed through verbatim.
    pub async fn query(&self, term: &str, types: &[SearchType]) -> Result<Value> {
        self.0.request(&self.search_url(term, types)?).await
    }

    pub async fn artists(&self, term: &str) -> Result<Value> {
        self.query(term, &[SearchType::Artist]).await
    }

    pub async fn albums(&self, term: &str) -> Result<Value> {
        self.query(term, &[SearchType::Album]).await
    }

    pub async fn tracks(&self, term: &str) -> Result<Value> {
        self.query(term, &[SearchType::Track]).await
    }

    pub async fn playlists(&self, term: &str) -> Result<Value> {
        self.query(term, &[SearchType::Playlist]).await
    }

    fn search_url(&self, term: &str, types: &[SearchType]) -> Result<String> {
        if term.is_empty() {
            return Err(Error::EmptyInput("search term"));
        }
        if types.is_empty() {
            return Err(Error::EmptyInput("search types"));
        }
        let joined = types
            .iter()
            .map(SearchType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Ok(format!("{}/search?q={}&type={}", self.0.api_url(), term, joined))
    }
}

#[cfg(test)]
mod tests {
    use super::SearchType;
    use crate::config::Config;
    use crate::error::Error;
    use crate::SpotifyClient;

    fn client() -> SpotifyClient {
        SpotifyClient::new(Config::with_token("foo"))
    }

    #[test]
    fn single_type_search_url() {
        let client = client();
        let url = client
            .search()
            .search_url("Incubus", &[SearchType::Artist])
            .unwrap();
        assert_eq!(url, "https://api.spotify.com/v1/search?q=Incubus&type=artist");

        let url = client
            .search()
            .search_url("Muse", &[SearchType::Album])
            .unwrap();
        assert_eq!(url, "https://api.spotify.com/v1/search?q=Muse&type=album");
    }

    #[test]
    fn multiple_types_join_with_comma_preserving_order() {
        let client = client();
        let url = client
            .search()
            .search_url("Incubus", &[SearchType::Artist, SearchType::Album])
            .unwrap();
        assert_eq!(
            url,
            "https://api.spotify.com/v1/search?q=Incubus&type=artist,album"
        );

        let url = client
            .search()
            .search_url("Incubus", &[SearchType::Album, SearchType::Artist])
            .unwrap();
        assert_eq!(
            url,
            "https://api.spotify.com/v1/search?q=Incubus&type=album,artist"
        );
    }

    #[test]
    fn type_names_match_the_remote_api() {
        assert_eq!(SearchType::Artist.as_str(), "artist");
        assert_eq!(SearchType::Album.as_str(), "album");
        assert_eq!(SearchType::Track.as_str(), "track");
        assert_eq!(SearchType::Playlist.to_string(), "playlist");
    }

    #[test]
    fn empty_term_or_types_are_rejected() {
        let client = client();
        assert!(matches!(
            client.search().search_url("", &[SearchType::Track]),
            Err(Error::EmptyInput("search term"))
        ));
        assert!(matches!(
            client.search().search_url("Incubus", &[]),
            Err(Error::EmptyInput("search types"))
        ));
    }
}
