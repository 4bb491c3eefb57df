//! MusicBrainz API integration
//!
//! Resolves artists, enumerates their releases and lists the tracks on each
//! release. Every request is serialized through the client's rate gate.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod client;
mod handler;

pub use client::{DEFAULT_BASE_URL, MusicBrainzClient};
pub use handler::MetadataHandler;
