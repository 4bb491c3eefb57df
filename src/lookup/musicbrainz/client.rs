//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to 1 req/sec.
//! Every request goes through the client's [`RateGate`].

use std::time::Duration;

use super::dto;
use crate::lookup::domain::{LookupError, ReleaseFilter};
use crate::lookup::http;
use crate::lookup::rate_gate::RateGate;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// Page size for release-group searches (the API maximum)
const SEARCH_LIMIT: &str = "100";

/// User agent string - MusicBrainz requires this
const USER_AGENT: &str = concat!(
    "AvgLyricCounter/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/avg-lyric-counter)"
);

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
    gate: RateGate,
}

impl MusicBrainzClient {
    /// Create a client against the public API with the standard 1s cool-down
    #[cfg(test)]
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(DEFAULT_BASE_URL, crate::lookup::rate_gate::DEFAULT_INTERVAL)
    }

    /// Create a client with a custom base URL and rate-gate interval
    pub fn with_base_url(
        base_url: impl Into<String>,
        interval: Duration,
    ) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LookupError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            gate: RateGate::new(interval),
        })
    }

    /// `/artist?query=artist:"<name>"` - search artists by name, best match first
    pub async fn search_artist(
        &self,
        artist_name: &str,
    ) -> Result<dto::ArtistSearchResponse, LookupError> {
        self.get("artist", &[("query", artist_query(artist_name))])
            .await
    }

    /// `/artist/<id>?inc=releases` - the artist entity including its releases
    pub async fn get_artist_with_releases(
        &self,
        artist_id: &str,
    ) -> Result<dto::Artist, LookupError> {
        let path = format!("artist/{}", urlencoding::encode(artist_id));
        self.get(&path, &[("inc", "releases".to_string())]).await
    }

    /// `/release/<id>?inc=recordings` - a release with its media and tracks
    pub async fn get_release_with_recordings(
        &self,
        release_id: &str,
    ) -> Result<dto::ReleaseResponse, LookupError> {
        let path = format!("release/{}", urlencoding::encode(release_id));
        self.get(&path, &[("inc", "recordings".to_string())]).await
    }

    /// `/release-group?query=...` - album release groups for an artist name,
    /// leaving out the secondary types the filter excludes
    pub async fn search_release_groups(
        &self,
        artist_name: &str,
        filter: &ReleaseFilter,
    ) -> Result<dto::ReleaseGroupSearchResponse, LookupError> {
        self.get(
            "release-group",
            &[
                ("query", release_group_query(artist_name, filter)),
                ("limit", SEARCH_LIMIT.to_string()),
            ],
        )
        .await
    }

    /// Issue one rate-gated GET. The permit is held until the body has been
    /// read, so the cool-down starts when the request completes.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, LookupError> {
        let _permit = self.gate.acquire().await;

        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Sending GET request to {} {:?}", url, query);

        let request = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("fmt", "json")]);

        http::get_json(request).await
    }
}

/// Quote a value as a Lucene phrase
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Search query for artists by name
pub(crate) fn artist_query(artist_name: &str) -> String {
    format!("artist:{}", quote(artist_name))
}

/// Search query for an artist's album release groups
pub(crate) fn release_group_query(artist_name: &str, filter: &ReleaseFilter) -> String {
    let mut query = format!("artist:{} AND primarytype:\"album\"", quote(artist_name));
    for secondary_type in filter.excluded_types() {
        query.push_str(&format!(" AND NOT secondarytype:\"{}\"", secondary_type));
    }
    query
}
