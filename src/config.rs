//! Run configuration.
//!
//! There is no config file: a run is configured entirely from the command
//! line (some flags fall back to environment variables, see `cli`). This
//! module holds the resolved settings and their defaults.

use std::time::Duration;

use crate::lookup::rate_gate::DEFAULT_INTERVAL;
use crate::lookup::{ReleaseFilter, ReleaseSource, lyricsovh, musicbrainz};

/// Track-title substrings excluded by default
pub const DEFAULT_EXCLUSION_FILTERS: &[&str] = &["(instrumental)", "(live)", "(demo)", "(remix)"];

/// Settings for one counting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// MusicBrainz API root
    pub musicbrainz_url: String,

    /// lyrics.ovh API root
    pub lyrics_url: String,

    /// Cool-down between MusicBrainz requests
    pub rate_interval: Duration,

    /// How release IDs are collected
    pub release_source: ReleaseSource,

    /// Secondary release types left out of release-group searches
    pub release_filter: ReleaseFilter,

    /// Tracks whose case-folded title contains any of these are skipped
    pub exclusion_filters: Vec<String>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            musicbrainz_url: musicbrainz::DEFAULT_BASE_URL.to_string(),
            lyrics_url: lyricsovh::DEFAULT_BASE_URL.to_string(),
            rate_interval: DEFAULT_INTERVAL,
            release_source: ReleaseSource::default(),
            release_filter: ReleaseFilter::default(),
            exclusion_filters: DEFAULT_EXCLUSION_FILTERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CounterConfig {
    /// Check values that would otherwise fail late, mid-run.
    pub fn validate(&self) -> crate::error::Result<()> {
        for (name, url) in [
            ("MusicBrainz URL", &self.musicbrainz_url),
            ("lyrics URL", &self.lyrics_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(crate::error::Error::config(format!(
                    "{} must start with http:// or https://, got '{}'",
                    name, url
                )));
            }
        }

        if self.exclusion_filters.iter().any(|f| f.is_empty()) {
            // An empty substring matches every title
            return Err(crate::error::Error::config(
                "exclusion filters must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CounterConfig::default();
        assert_eq!(config.musicbrainz_url, "https://musicbrainz.org/ws/2");
        assert_eq!(config.lyrics_url, "https://api.lyrics.ovh/v1");
        assert_eq!(config.rate_interval, Duration::from_secs(1));
        assert_eq!(config.release_source, ReleaseSource::ReleaseGroups);
        assert_eq!(config.release_filter, ReleaseFilter::default());
        assert!(config.exclusion_filters.contains(&"(instrumental)".to_string()));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(CounterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = CounterConfig {
            lyrics_url: "ftp://lyrics.example".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("lyrics URL"));
    }

    #[test]
    fn test_rejects_empty_exclusion_filter() {
        let config = CounterConfig {
            exclusion_filters: vec!["(live)".to_string(), String::new()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
