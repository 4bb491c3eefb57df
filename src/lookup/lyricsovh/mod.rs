//! lyrics.ovh API integration
//!
//! Looks up song lyrics by artist name and track title.
//!
//! API docs: https://lyricsovh.docs.apiary.io/

pub mod dto;
mod client;
mod handler;

pub use client::{DEFAULT_BASE_URL, LyricsOvhClient};
pub use handler::{LyricsHandler, count_words};
