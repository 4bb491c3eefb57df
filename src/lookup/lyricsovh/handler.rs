//! lyrics.ovh handler: lyrics text to word count.

use crate::lookup::domain::{HandlerError, LookupError};
use crate::lookup::traits::LyricsApi;

/// Handler for abstracting lyrics.ovh endpoint functionality
pub struct LyricsHandler<C> {
    client: C,
}

impl<C: LyricsApi> LyricsHandler<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Underlying client
    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Number of whitespace-separated words in the lyrics of `title`.
    ///
    /// Returns `Ok(None)` when the service has no lyrics for the song or
    /// answers with something that isn't lyrics JSON. The only error is an
    /// argument-contract violation, raised before the request.
    pub async fn word_count(&self, artist: &str, title: &str) -> Result<Option<usize>, HandlerError> {
        HandlerError::require_non_blank("artist", artist)?;
        HandlerError::require_non_blank("title", title)?;

        let response = match self.client.get_lyrics(artist, title).await {
            Ok(response) => response,
            Err(LookupError::Transport(e)) => {
                tracing::debug!("No lyrics for '{}' by '{}': {}", title, artist, e);
                return Ok(None);
            }
            Err(LookupError::Decode(e)) => {
                tracing::debug!("Unreadable lyrics for '{}' by '{}': {}", title, artist, e);
                return Ok(None);
            }
        };

        let count = count_words(&response.lyrics);
        tracing::debug!("'{}' by '{}' has {} words", title, artist, count);
        Ok(Some(count))
    }
}

/// Whitespace-token count
pub fn count_words(lyrics: &str) -> usize {
    lyrics.split_whitespace().count()
}
