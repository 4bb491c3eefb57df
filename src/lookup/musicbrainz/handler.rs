//! MusicBrainz handler: turns raw responses into artist IDs, release IDs and
//! track titles.
//!
//! This is the ONLY place where MusicBrainz DTOs are read. Titles are
//! compared case-folded everywhere; when two entries fold to the same title
//! the first one seen is kept.

use std::collections::HashSet;

use super::dto;
use crate::lookup::domain::{HandlerError, ReleaseFilter, ReleaseSource};
use crate::lookup::traits::MetadataApi;

/// Handler for abstracting MusicBrainz endpoint functionality
pub struct MetadataHandler<C> {
    client: C,
}

impl<C: MetadataApi> MetadataHandler<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Underlying client
    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resolve an artist name to the MBID of the top-scored search hit.
    ///
    /// Returns an empty string when the search has no hits.
    pub async fn resolve_artist_id(&self, artist_name: &str) -> Result<String, HandlerError> {
        HandlerError::require_non_blank("artist_name", artist_name)?;

        let response = self.client.search_artist(artist_name).await?;

        // Hits arrive ordered by score; the first is the best guess
        let artist_id = response
            .artists
            .into_iter()
            .next()
            .map(|artist| artist.id)
            .unwrap_or_default();

        tracing::info!("Found artist MBID '{}' for artist '{}'", artist_id, artist_name);
        Ok(artist_id)
    }

    /// Collect release IDs for an artist with the chosen strategy.
    pub async fn list_release_ids(
        &self,
        source: ReleaseSource,
        artist_name: &str,
        artist_id: &str,
        filter: &ReleaseFilter,
    ) -> Result<Vec<String>, HandlerError> {
        match source {
            ReleaseSource::ReleaseGroups => {
                self.release_ids_from_groups(artist_name, artist_id, filter)
                    .await
            }
            ReleaseSource::ArtistReleases => self.release_ids_from_artist(artist_id).await,
        }
    }

    /// Search the artist's album release groups and take the first release of
    /// each group credited to `artist_id`.
    ///
    /// Only the first page (100 groups) is read.
    pub async fn release_ids_from_groups(
        &self,
        artist_name: &str,
        artist_id: &str,
        filter: &ReleaseFilter,
    ) -> Result<Vec<String>, HandlerError> {
        HandlerError::require_non_blank("artist_name", artist_name)?;
        HandlerError::require_non_blank("artist_id", artist_id)?;

        let response = self
            .client
            .search_release_groups(artist_name, filter)
            .await?;

        if let Some(count) = response.count
            && count as usize > response.release_groups.len()
        {
            tracing::debug!(
                "Release group search has {} hits, reading the first {}",
                count,
                response.release_groups.len()
            );
        }

        let candidates = response
            .release_groups
            .iter()
            .filter(|group| is_credited_to(group, artist_id))
            .filter_map(|group| match group.releases.first() {
                Some(release) => Some((group.title.as_str(), release.id.as_str())),
                None => {
                    tracing::debug!("Release group '{}' has no releases, skipping", group.title);
                    None
                }
            });

        let (titles, ids) = dedup_by_title(candidates);
        tracing::info!("Found releases {:?} for artist '{}'", titles, artist_name);
        Ok(ids)
    }

    /// Browse the artist's releases directly.
    pub async fn release_ids_from_artist(
        &self,
        artist_id: &str,
    ) -> Result<Vec<String>, HandlerError> {
        HandlerError::require_non_blank("artist_id", artist_id)?;

        let artist = self.client.get_artist_with_releases(artist_id).await?;

        let candidates = artist
            .releases
            .iter()
            .map(|release| (release.title.as_str(), release.id.as_str()));

        let (titles, ids) = dedup_by_title(candidates);
        tracing::info!("Found releases {:?} for artist '{}'", titles, artist.name);
        Ok(ids)
    }

    /// Lower-cased titles of every track on a release, minus those whose
    /// title contains any of `exclusion_filters` (compared case-folded).
    pub async fn list_tracks(
        &self,
        release_id: &str,
        exclusion_filters: &[String],
    ) -> Result<Vec<String>, HandlerError> {
        HandlerError::require_non_blank("release_id", release_id)?;

        let release = self.client.get_release_with_recordings(release_id).await?;
        let total = release.media.iter().map(|m| m.tracks.len()).sum::<usize>();

        let tracks = filter_tracks(&release, exclusion_filters);

        tracing::info!(
            "Found {} tracks {:?} for release_id {} (excluded {} tracks)",
            tracks.len(),
            tracks,
            release_id,
            total - tracks.len()
        );
        Ok(tracks)
    }
}

/// Whether `artist_id` appears in the group's artist credits
fn is_credited_to(group: &dto::ReleaseGroup, artist_id: &str) -> bool {
    group
        .artist_credit
        .iter()
        .any(|credit| credit.artist.id == artist_id)
}

/// Keep the first `(title, id)` per case-folded title, in input order.
///
/// Returns the kept folded titles and their IDs.
fn dedup_by_title<'a>(
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> (Vec<String>, Vec<String>) {
    let mut seen = HashSet::new();
    let mut titles = Vec::new();
    let mut ids = Vec::new();

    for (title, id) in entries {
        let folded = title.to_lowercase();
        if seen.insert(folded.clone()) {
            titles.push(folded);
            ids.push(id.to_string());
        }
    }

    (titles, ids)
}

/// Flatten all media of a release into lower-cased titles, dropping excluded ones
fn filter_tracks(release: &dto::ReleaseResponse, exclusion_filters: &[String]) -> Vec<String> {
    let filters: Vec<String> = exclusion_filters.iter().map(|f| f.to_lowercase()).collect();

    release
        .media
        .iter()
        .flat_map(|medium| medium.tracks.iter())
        .map(|track| track.title.to_lowercase())
        .filter(|title| !filters.iter().any(|filter| title.contains(filter.as_str())))
        .collect()
}
