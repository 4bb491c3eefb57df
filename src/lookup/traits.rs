//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use crate::lookup::traits::LyricsApi;
//!
//! // In production code:
//! async fn words<T: LyricsApi>(client: &T) -> Result<usize, LookupError> {
//!     let response = client.get_lyrics("iron maiden", "fear of the dark").await?;
//!     Ok(response.lyrics.split_whitespace().count())
//! }
//!
//! // In tests:
//! struct MockLyrics { ... }
//! impl LyricsApi for MockLyrics { ... }
//! ```

use async_trait::async_trait;

use super::domain::{LookupError, ReleaseFilter};
use super::lyricsovh::dto::LyricsResponse;
use super::musicbrainz::dto;

/// Trait for MusicBrainz metadata lookups.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait MetadataApi: Send + Sync {
    /// Search artists by name, best match first.
    async fn search_artist(&self, artist_name: &str)
    -> Result<dto::ArtistSearchResponse, LookupError>;

    /// Get an artist including its releases.
    async fn get_artist_with_releases(&self, artist_id: &str) -> Result<dto::Artist, LookupError>;

    /// Get a release including its media and tracks.
    async fn get_release_with_recordings(
        &self,
        release_id: &str,
    ) -> Result<dto::ReleaseResponse, LookupError>;

    /// Search album release groups by artist name.
    async fn search_release_groups(
        &self,
        artist_name: &str,
        filter: &ReleaseFilter,
    ) -> Result<dto::ReleaseGroupSearchResponse, LookupError>;
}

/// Trait for lyrics lookups.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait LyricsApi: Send + Sync {
    /// Get the lyrics of a song.
    async fn get_lyrics(&self, artist: &str, title: &str) -> Result<LyricsResponse, LookupError>;
}

// Implement traits for real clients

#[async_trait]
impl MetadataApi for super::musicbrainz::MusicBrainzClient {
    async fn search_artist(
        &self,
        artist_name: &str,
    ) -> Result<dto::ArtistSearchResponse, LookupError> {
        self.search_artist(artist_name).await
    }

    async fn get_artist_with_releases(&self, artist_id: &str) -> Result<dto::Artist, LookupError> {
        self.get_artist_with_releases(artist_id).await
    }

    async fn get_release_with_recordings(
        &self,
        release_id: &str,
    ) -> Result<dto::ReleaseResponse, LookupError> {
        self.get_release_with_recordings(release_id).await
    }

    async fn search_release_groups(
        &self,
        artist_name: &str,
        filter: &ReleaseFilter,
    ) -> Result<dto::ReleaseGroupSearchResponse, LookupError> {
        self.search_release_groups(artist_name, filter).await
    }
}

#[async_trait]
impl LyricsApi for super::lyricsovh::LyricsOvhClient {
    async fn get_lyrics(&self, artist: &str, title: &str) -> Result<LyricsResponse, LookupError> {
        self.get_lyrics(artist, title).await
    }
}
