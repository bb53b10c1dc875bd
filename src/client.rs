use reqwest::Client;
use serde_json::Value;

use crate::album::Albums;
use crate::config::Config;
use crate::error::Result;
use crate::search::Search;

/// Spotify Web API client.
///
/// Holds the configuration and one shared HTTP client. Resource accessors
/// borrow it, so a single instance serves any number of concurrent calls.
pub struct SpotifyClient {
    config: Config,
    http: Client,
}

impl SpotifyClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Album endpoints.
    pub fn album(&self) -> Albums<'_> {
        Albums(self)
    }

    /// Search endpoints.
    pub fn search(&self) -> Search<'_> {
        Search(self)
    }

    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Perform a GET against a fully-formed URL and parse the JSON body.
    ///
    /// Single attempt: transport failures and non-JSON bodies surface
    /// unchanged from the HTTP layer, with no status-code inspection.
    pub async fn request(&self, url: &str) -> Result<Value> {
        log::debug!("GET {}", url);
        let body = self.get(url).send().await?.json::<Value>().await?;
        Ok(body)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.http.get(url);
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
