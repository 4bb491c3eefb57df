//! MusicBrainz API Data Transfer Objects
//!
//! These types match what the MusicBrainz API returns for the four endpoints
//! we call. Only the fields we read are declared; serde ignores the rest.
//! DO NOT use these types outside the lookup layer - the handler turns them
//! into plain IDs and titles before anything reaches the counter.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API

use serde::{Deserialize, Serialize};

/// `/artist?query=...` search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistSearchResponse {
    /// Matches, highest score first
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Artist entity
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID
    pub id: String,
    pub name: String,
    /// Search relevance (search responses only)
    pub score: Option<u32>,
    /// Releases (only with `inc=releases`)
    #[serde(default)]
    pub releases: Vec<ReleaseSummary>,
}

/// Release as listed under an artist or a release group
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseSummary {
    /// MusicBrainz release ID
    pub id: String,
    pub title: String,
    /// Official, Bootleg, etc.
    pub status: Option<String>,
}

/// `/release/<id>?inc=recordings` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseResponse {
    pub id: String,
    pub title: String,
    /// Discs/sides of the release
    #[serde(default)]
    pub media: Vec<Medium>,
}

/// Medium (disc) within a release
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Medium {
    pub position: Option<u32>,
    pub format: Option<String>,
    pub track_count: Option<u32>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Track on a medium
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Track {
    pub position: Option<u32>,
    pub number: Option<String>,
    pub title: String,
}

/// `/release-group?query=...` search response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroupSearchResponse {
    /// Total hits on the server (may exceed the page we received)
    pub count: Option<u32>,
    #[serde(default)]
    pub release_groups: Vec<ReleaseGroup>,
}

/// Release group search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    pub id: String,
    pub title: String,
    pub primary_type: Option<String>,
    #[serde(default)]
    pub secondary_types: Vec<String>,
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Releases in the group, in the order MusicBrainz lists them
    #[serde(default)]
    pub releases: Vec<ReleaseSummary>,
}

/// Artist credit (can be multiple for collaborations)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// How this artist is credited
    pub name: Option<String>,
    pub artist: CreditedArtist,
}

/// Artist reference inside a credit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreditedArtist {
    pub id: String,
    pub name: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
