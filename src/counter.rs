//! Average lyric word count - orchestrates the lookups for one artist.
//!
//! The flow is linear with no retries:
//! 1. Validate the artist name
//! 2. Resolve the artist MBID (MusicBrainz)
//! 3. Collect release IDs (MusicBrainz)
//! 4. Collect unique lower-cased track titles across all releases (MusicBrainz)
//! 5. Count the words of each track's lyrics, skipping tracks without lyrics (lyrics.ovh)
//! 6. Average over the tracks that had lyrics
//!
//! Steps 1-4 stop with [`Error::MissingData`] when they come up empty; the
//! reason is only in the log.

use std::collections::BTreeSet;

use crate::config::CounterConfig;
use crate::error::{Error, Result, ResultExt};
use crate::lookup::{
    LyricsApi, LyricsHandler, LyricsOvhClient, MetadataApi, MetadataHandler, MusicBrainzClient,
};

/// Aggregate over the tracks of one artist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LyricStats {
    /// Unique tracks found across all releases
    pub tracks: usize,
    /// Tracks for which lyrics were found
    pub found: usize,
    /// Sum of the word counts of the found tracks
    pub total_words: u64,
    /// `total_words / found`, rounded; 0 when nothing was found
    pub average: u64,
}

impl LyricStats {
    /// Aggregate the word counts of the tracks that had lyrics.
    pub fn from_counts(tracks: usize, word_counts: &[usize]) -> Self {
        let total_words = word_counts.iter().map(|&c| c as u64).sum();
        let found = word_counts.len();
        Self {
            tracks,
            found,
            total_words,
            average: rounded_average(total_words, found as u64),
        }
    }
}

/// `total / count` rounded to the nearest integer, ties to even.
///
/// Returns 0 for a zero count.
pub fn rounded_average(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }

    let quotient = total / count;
    let twice_remainder = 2 * (total % count);

    if twice_remainder > count || (twice_remainder == count && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Computes the average lyric word count of an artist's songs
pub struct LyricCounter<M, L> {
    metadata: MetadataHandler<M>,
    lyrics: LyricsHandler<L>,
    config: CounterConfig,
}

impl LyricCounter<MusicBrainzClient, LyricsOvhClient> {
    /// Build a counter talking to the services named in `config`
    pub fn from_config(config: CounterConfig) -> Result<Self> {
        config.validate()?;

        let musicbrainz =
            MusicBrainzClient::with_base_url(&config.musicbrainz_url, config.rate_interval)?;
        let lyrics = LyricsOvhClient::with_base_url(&config.lyrics_url);

        Ok(Self::new(musicbrainz, lyrics, config))
    }
}

impl<M: MetadataApi, L: LyricsApi> LyricCounter<M, L> {
    pub fn new(metadata: M, lyrics: L, config: CounterConfig) -> Self {
        Self {
            metadata: MetadataHandler::new(metadata),
            lyrics: LyricsHandler::new(lyrics),
            config,
        }
    }

    /// Run the whole flow for one artist.
    pub async fn average_word_count(&self, artist_name: &str) -> Result<LyricStats> {
        let artist_name = artist_name.trim();
        if artist_name.is_empty() {
            tracing::error!("Given artist name was empty");
            return Err(Error::MissingData);
        }

        let artist_id = self
            .metadata
            .resolve_artist_id(artist_name)
            .await
            .with_context(format!("resolving artist '{}'", artist_name))?;
        if artist_id.is_empty() {
            tracing::error!("Could not find MBID for artist '{}'", artist_name);
            return Err(Error::MissingData);
        }

        let release_ids = self
            .metadata
            .list_release_ids(
                self.config.release_source,
                artist_name,
                &artist_id,
                &self.config.release_filter,
            )
            .await
            .with_context(format!("listing releases of '{}'", artist_name))?;
        if release_ids.is_empty() {
            tracing::error!("No releases found for artist '{}'", artist_name);
            return Err(Error::MissingData);
        }

        let tracks = self.unique_track_names(&release_ids).await?;
        if tracks.is_empty() {
            tracing::error!("No tracks found for artist '{}'", artist_name);
            return Err(Error::MissingData);
        }

        let word_counts = self.lyric_word_counts(artist_name, &tracks).await?;
        let stats = LyricStats::from_counts(tracks.len(), &word_counts);

        tracing::info!(
            "Found {} songs, of which {} had recorded lyrics",
            stats.tracks,
            stats.found
        );
        tracing::info!(
            "The average word count of the found songs is {} ({} words)",
            stats.average,
            stats.total_words
        );

        Ok(stats)
    }

    /// Unique (case-folded) track titles across the given releases
    pub async fn unique_track_names(&self, release_ids: &[String]) -> Result<BTreeSet<String>> {
        let mut tracks = BTreeSet::new();

        for release_id in release_ids {
            let titles = self
                .metadata
                .list_tracks(release_id, &self.config.exclusion_filters)
                .await
                .with_context(format!("listing tracks of release {}", release_id))?;
            tracks.extend(titles.into_iter().filter(|t| !t.trim().is_empty()));
        }

        Ok(tracks)
    }

    /// Word counts of the tracks that have lyrics, one lookup per track
    pub async fn lyric_word_counts(
        &self,
        artist_name: &str,
        tracks: &BTreeSet<String>,
    ) -> Result<Vec<usize>> {
        let mut word_counts = Vec::with_capacity(tracks.len());

        for (i, track) in tracks.iter().enumerate() {
            let count = self
                .lyrics
                .word_count(artist_name, track)
                .await
                .with_context(format!("counting words of '{}'", track))?;
            if let Some(count) = count {
                word_counts.push(count);
            }

            if (i + 1) % 10 == 0 {
                tracing::info!("Looked up lyrics for {}/{} tracks", i + 1, tracks.len());
            }
        }

        Ok(word_counts)
    }
}
