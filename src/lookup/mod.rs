//! External service layer - metadata and lyrics lookups.
//!
//! # Architecture
//!
//! Same split for both services:
//! - **Domain types** (`domain.rs`) - errors and filters the rest of the crate sees
//! - **API DTOs** (`musicbrainz/dto.rs`, `lyricsovh/dto.rs`) - exact response shapes
//! - **Clients** - HTTP clients, one GET per operation
//! - **Handlers** - turn DTOs into IDs, titles and word counts
//! - **Traits** (`traits.rs`) - client seams so handlers can run against mocks
//!
//! The MusicBrainz client owns a [`rate_gate::RateGate`]; the lyrics client is unrated.

pub mod domain;
mod http;
pub mod lyricsovh;
pub mod musicbrainz;
pub mod rate_gate;
pub mod traits;

pub use domain::{HandlerError, LookupError, ReleaseFilter, ReleaseSource};
pub use lyricsovh::{LyricsHandler, LyricsOvhClient};
pub use musicbrainz::{MetadataHandler, MusicBrainzClient};
pub use traits::{LyricsApi, MetadataApi};
