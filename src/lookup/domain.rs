//! Internal domain types for the metadata and lyrics lookups.
//!
//! These types are OUR types - they don't change when external APIs change.
//! DTOs from `musicbrainz::dto` and `lyricsovh::dto` are turned into these
//! by the handlers.

/// Errors raised by the HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Connection failure or non-2xx status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body was not the JSON shape we expected
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Errors raised by the handlers
#[derive(Debug, Clone, thiserror::Error)]
pub enum HandlerError {
    /// Argument contract violated; raised before any request is made
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any client failure, wrapped into one handler-level error
    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

impl HandlerError {
    /// Reject blank values for a named argument.
    pub(crate) fn require_non_blank(name: &str, value: &str) -> Result<(), HandlerError> {
        if value.trim().is_empty() {
            return Err(HandlerError::InvalidArgument(format!(
                "'{}' must not be blank",
                name
            )));
        }
        Ok(())
    }
}

/// Release-group secondary types to leave out of a release-group search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseFilter {
    pub exclude_live: bool,
    pub exclude_compilation: bool,
    pub exclude_remix: bool,
    pub exclude_demo: bool,
}

impl ReleaseFilter {
    /// Filter that excludes nothing
    #[cfg(test)]
    pub const fn none() -> Self {
        Self {
            exclude_live: false,
            exclude_compilation: false,
            exclude_remix: false,
            exclude_demo: false,
        }
    }

    /// Secondary type names (as MusicBrainz spells them) to exclude
    pub fn excluded_types(&self) -> Vec<&'static str> {
        let mut types = Vec::new();
        if self.exclude_live {
            types.push("Live");
        }
        if self.exclude_compilation {
            types.push("Compilation");
        }
        if self.exclude_remix {
            types.push("Remix");
        }
        if self.exclude_demo {
            types.push("Demo");
        }
        types
    }
}

impl Default for ReleaseFilter {
    /// Studio albums only
    fn default() -> Self {
        Self {
            exclude_live: true,
            exclude_compilation: true,
            exclude_remix: true,
            exclude_demo: true,
        }
    }
}

/// How release IDs are collected for an artist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseSource {
    /// Search release groups with a [`ReleaseFilter`], first release per group
    #[default]
    ReleaseGroups,
    /// Browse the artist's releases directly
    ArtistReleases,
}
