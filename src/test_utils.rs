//! Test utilities and fixtures for avg-lyric-counter tests.
//!
//! This module provides JSON payloads shaped like real service responses and
//! small builders for DTOs, to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{fixtures, release_with_tracks};
//!
//! let release = release_with_tracks("rel-1", &["Intro", "Outro"]);
//! ```

use crate::lookup::musicbrainz::dto;

/// JSON payloads captured from the services (trimmed to the fields we read,
/// plus a few we don't, to keep serde honest about ignoring them).
pub mod fixtures {
    /// `GET /ws/2/artist?query=artist:"hallatar"&fmt=json`
    pub const ARTIST_SEARCH: &str = r#"{
        "created": "2022-02-19T15:57:52.014Z",
        "count": 2,
        "offset": 0,
        "artists": [
            {
                "id": "7f0d27cb-d636-40c3-a92d-cd44e880658e",
                "type": "Group",
                "score": 100,
                "name": "Hallatar",
                "sort-name": "Hallatar",
                "country": "FI",
                "disambiguation": "Finnish atmospheric doom/death metal",
                "life-span": {"begin": "2017", "ended": null}
            },
            {
                "id": "0b1b4a3c-9c1e-4f0e-8a34-4d1b3e0c9f11",
                "type": "Person",
                "score": 41,
                "name": "Halla",
                "sort-name": "Halla"
            }
        ]
    }"#;

    /// `GET /ws/2/artist/<id>?inc=releases&fmt=json`
    pub const ARTIST_WITH_RELEASES: &str = r#"{
        "id": "7f0d27cb-d636-40c3-a92d-cd44e880658e",
        "name": "Hallatar",
        "sort-name": "Hallatar",
        "type": "Group",
        "releases": [
            {
                "id": "37179bef-eaa3-4f70-bc06-ff08c956d354",
                "title": "No Stars Upon the Bridge",
                "status": "Official",
                "date": "2017-10-20"
            },
            {
                "id": "5d2b81f5-2a8e-4bd4-9f0e-3bb0a5bbd1d7",
                "title": "No Stars Upon The Bridge",
                "status": "Official",
                "date": "2017-10-20"
            },
            {
                "id": "c6e4b8a4-1f3b-4a2b-9d8f-6a1e2b3c4d5e",
                "title": "Mourning Moon",
                "status": "Official",
                "date": "2024-03-01"
            }
        ]
    }"#;

    /// `GET /ws/2/release/<id>?inc=recordings&fmt=json`
    pub const RELEASE_WITH_RECORDINGS: &str = r#"{
        "id": "42929a80-440e-4e25-84ff-e6435a690f15",
        "title": "Ashes",
        "status": "Official",
        "text-representation": {"language": "eng", "script": "Latn"},
        "media": [
            {
                "title": "",
                "track-offset": 0,
                "position": 1,
                "track-count": 7,
                "format": "CD",
                "tracks": [
                    {"number": "1", "position": 1, "title": "Infection", "length": 300000},
                    {"number": "2", "position": 2, "title": "Realms", "length": 280000},
                    {"number": "3", "position": 3, "title": "Eyes: Closed", "length": 240000},
                    {"number": "4", "position": 4, "title": "Eyes: Open", "length": 250000},
                    {"number": "5", "position": 5, "title": "Oscillator", "length": 310000},
                    {"number": "6", "position": 6, "title": "Apparition", "length": 200000},
                    {"number": "7", "position": 7, "title": "Predator", "length": 330000}
                ]
            }
        ]
    }"#;

    /// `GET /ws/2/release-group?query=artist:"hallatar" AND primarytype:"album" ...`
    ///
    /// The second hit belongs to another artist; the third repeats the first
    /// title with different casing.
    pub const RELEASE_GROUP_SEARCH: &str = r#"{
        "created": "2022-02-20T01:18:47.481Z",
        "count": 3,
        "offset": 0,
        "release-groups": [
            {
                "id": "514689fe-851d-45e0-8954-650155e933d9",
                "score": 100,
                "count": 2,
                "title": "No Stars Upon the Bridge",
                "first-release-date": "2017-10-20",
                "primary-type": "Album",
                "artist-credit": [
                    {"name": "Hallatar", "artist": {"id": "7f0d27cb-d636-40c3-a92d-cd44e880658e", "name": "Hallatar", "sort-name": "Hallatar"}}
                ],
                "releases": [
                    {"id": "37179bef-eaa3-4f70-bc06-ff08c956d354", "status-id": "4e304316-386d-3409-af2e-78857eec5cfe", "title": "No Stars Upon the Bridge", "status": "Official"},
                    {"id": "5d2b81f5-2a8e-4bd4-9f0e-3bb0a5bbd1d7", "title": "No Stars Upon the Bridge", "status": "Official"}
                ]
            },
            {
                "id": "9a4f2d6c-3b1e-4c7a-8e5f-2d1c0b9a8f7e",
                "score": 72,
                "count": 1,
                "title": "Hallatar Tribute",
                "primary-type": "Album",
                "artist-credit": [
                    {"name": "Various Artists", "artist": {"id": "89ad4ac3-39f7-470e-963a-56509c546377", "name": "Various Artists"}}
                ],
                "releases": [
                    {"id": "e1d2c3b4-a596-4877-8899-aabbccddeeff", "title": "Hallatar Tribute", "status": "Official"}
                ]
            },
            {
                "id": "1c2d3e4f-5a6b-4c7d-8e9f-0a1b2c3d4e5f",
                "score": 65,
                "count": 1,
                "title": "NO STARS UPON THE BRIDGE",
                "primary-type": "Album",
                "secondary-types": [],
                "artist-credit": [
                    {"name": "Hallatar", "artist": {"id": "7f0d27cb-d636-40c3-a92d-cd44e880658e", "name": "Hallatar"}}
                ],
                "releases": [
                    {"id": "f0e1d2c3-b4a5-4968-8776-655443322110", "title": "NO STARS UPON THE BRIDGE", "status": "Bootleg"}
                ]
            }
        ]
    }"#;

    /// `GET /v1/iron maiden/fear of the dark` - 369 whitespace-separated tokens
    pub const FEAR_OF_THE_DARK: &str = include_str!("lookup/lyricsovh/fixtures/fear_of_the_dark.txt");
}

/// Artist MBID used throughout the fixtures
pub const HALLATAR_ID: &str = "7f0d27cb-d636-40c3-a92d-cd44e880658e";

/// Build a release DTO with one medium holding the given track titles.
pub fn release_with_tracks(id: &str, titles: &[&str]) -> dto::ReleaseResponse {
    dto::ReleaseResponse {
        id: id.to_string(),
        title: format!("Release {}", id),
        media: vec![medium(titles)],
    }
}

/// Build a medium DTO holding the given track titles.
pub fn medium(titles: &[&str]) -> dto::Medium {
    dto::Medium {
        position: Some(1),
        format: Some("CD".to_string()),
        track_count: Some(titles.len() as u32),
        tracks: titles
            .iter()
            .enumerate()
            .map(|(i, title)| dto::Track {
                position: Some(i as u32 + 1),
                number: Some((i + 1).to_string()),
                title: title.to_string(),
            })
            .collect(),
    }
}

/// Build a release summary DTO.
pub fn release_summary(id: &str, title: &str) -> dto::ReleaseSummary {
    dto::ReleaseSummary {
        id: id.to_string(),
        title: title.to_string(),
        status: Some("Official".to_string()),
    }
}

/// Build a release-group DTO credited to `artist_id`.
pub fn release_group(
    title: &str,
    artist_id: &str,
    releases: Vec<dto::ReleaseSummary>,
) -> dto::ReleaseGroup {
    dto::ReleaseGroup {
        id: format!("rg-{}", title),
        title: title.to_string(),
        primary_type: Some("Album".to_string()),
        secondary_types: vec![],
        artist_credit: vec![dto::ArtistCredit {
            name: None,
            artist: dto::CreditedArtist {
                id: artist_id.to_string(),
                name: "Artist".to_string(),
            },
        }],
        releases,
    }
}

/// Build an artist search response with one hit per ID, highest score first.
pub fn artist_search(ids: &[&str]) -> dto::ArtistSearchResponse {
    dto::ArtistSearchResponse {
        artists: ids
            .iter()
            .enumerate()
            .map(|(i, id)| dto::Artist {
                id: id.to_string(),
                name: format!("Artist {}", i),
                score: Some(100 - i as u32),
                releases: vec![],
            })
            .collect(),
    }
}

/// Minimal HTTP/1.1 responder on a local port, answering every request with
/// the same canned status and body.
pub mod stub_server {
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// A request as seen by the responder
    #[derive(Debug, Clone)]
    pub struct ReceivedRequest {
        /// Request line and headers, as sent
        pub head: String,
        pub received_at: Instant,
    }

    pub struct StubServer {
        pub base_url: String,
        requests: Arc<Mutex<Vec<ReceivedRequest>>>,
    }

    impl StubServer {
        pub fn requests(&self) -> Vec<ReceivedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    /// Start a responder; `base_url` is `http://127.0.0.1:<port>`.
    pub async fn serve(status: u16, body: &str) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let response = format!(
            "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let head = read_head(&mut socket).await;
                recorded.lock().unwrap().push(ReceivedRequest {
                    head,
                    received_at: Instant::now(),
                });
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        StubServer { base_url, requests }
    }

    /// Read up to the blank line ending the headers (GETs carry no body)
    async fn read_head(socket: &mut TcpStream) -> String {
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => head.extend_from_slice(&buf[..n]),
            }
        }
        String::from_utf8_lossy(&head).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_lyrics_token_count() {
        assert_eq!(fixtures::FEAR_OF_THE_DARK.split_whitespace().count(), 369);
    }

    #[test]
    fn test_release_with_tracks_builder() {
        let release = release_with_tracks("rel-1", &["A", "B"]);
        assert_eq!(release.media.len(), 1);
        assert_eq!(release.media[0].tracks.len(), 2);
        assert_eq!(release.media[0].tracks[1].number.as_deref(), Some("2"));
    }

    #[test]
    fn test_artist_search_builder_orders_by_score() {
        let response = artist_search(&["a", "b"]);
        assert!(response.artists[0].score > response.artists[1].score);
    }
}
