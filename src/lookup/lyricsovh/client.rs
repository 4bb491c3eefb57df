//! lyrics.ovh HTTP client
//!
//! No API key and no published rate limit, so requests go straight out.
//!
//! API: https://api.lyrics.ovh

use super::dto;
use crate::lookup::domain::LookupError;
use crate::lookup::http;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.lyrics.ovh/v1";

/// lyrics.ovh client
pub struct LyricsOvhClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LyricsOvhClient {
    /// Create a new client
    #[cfg(test)]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the lyrics of `title` by `artist`.
    ///
    /// The service answers 404 when it has no lyrics for the song, which
    /// surfaces as [`LookupError::Transport`].
    pub async fn get_lyrics(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<dto::LyricsResponse, LookupError> {
        let url = lyrics_url(&self.base_url, artist, title);
        tracing::debug!("Sending GET request to {}", url);
        http::get_json(self.http_client.get(&url)).await
    }
}

/// `<base>/<artist>/<title>` with both segments percent-encoded
fn lyrics_url(base_url: &str, artist: &str, title: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url,
        urlencoding::encode(artist),
        urlencoding::encode(title)
    )
}
