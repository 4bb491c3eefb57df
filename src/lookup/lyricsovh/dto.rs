//! lyrics.ovh API Data Transfer Objects
//!
//! API Reference: https://lyricsovh.docs.apiary.io/

use serde::{Deserialize, Serialize};

/// `/v1/<artist>/<title>` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LyricsResponse {
    /// Full lyrics text, lines separated by `\n` (sometimes `\r\n`)
    pub lyrics: String,
}
