//! # Spotify Integration Module
//!
//! Thin wrapper over the handful of Spotify Web API endpoints songlist needs.
//!
//! ```text
//! Sync Orchestrator
//!          ↓
//! SpotifyApi trait
//!     ├── Authentication (client credentials grant)
//!     ├── Playlist Operations (find, create, add track)
//!     └── Track Search
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Endpoints
//!
//! - `POST /api/token` on the accounts host - client credentials grant
//! - `GET /me/playlists` - owned playlists, for `--reuse`
//! - `POST /users/{user_id}/playlists` - create a private playlist
//! - `GET /search?type=track` - first matching track
//! - `POST /playlists/{playlist_id}/tracks` - append one track
//!
//! Calls are made one at a time and are not retried. Failures are mapped to
//! the matching [`crate::errors::Error`] variant so the orchestrator can tell
//! fatal errors from per-line ones.

pub mod auth;
pub mod playlist;
pub mod search;

use async_trait::async_trait;
use reqwest::Client;

use crate::{errors::Result, types::Token};

/// The Spotify capabilities used by the sync orchestrator.
///
/// Errors follow the orchestrator's taxonomy: `authenticate` fails with
/// `Authentication`, `find_playlist` and `create_playlist` with
/// `PlaylistCreation`, `search_track` with `Search` and
/// `add_track_to_playlist` with `AddTrack`. A search without results is
/// `Ok(None)`, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    async fn authenticate(&self, client_id: &str, client_secret: &str) -> Result<Token>;

    async fn find_playlist(&self, user_id: &str, name: &str, token: &str)
    -> Result<Option<String>>;

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        token: &str,
    ) -> Result<String>;

    async fn search_track(&self, song: &str, artist: &str, token: &str) -> Result<Option<String>>;

    async fn add_track_to_playlist(
        &self,
        playlist_id: &str,
        track_uri: &str,
        token: &str,
    ) -> Result<()>;
}

/// reqwest-backed [`SpotifyApi`] implementation.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_url: String,
}

impl SpotifyClient {
    /// Creates a client for the given API and token endpoints.
    ///
    /// Both URLs come from [`crate::config::Settings`]; they default to the
    /// public Spotify hosts and can point at a local stub instead.
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new("https://api.spotify.com/v1", "https://accounts.spotify.com/api/token");
    /// ```
    pub fn new(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url: api_url.into(),
            token_url: token_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn authenticate(&self, client_id: &str, client_secret: &str) -> Result<Token> {
        self.client_credentials_token(client_id, client_secret)
            .await
    }

    async fn find_playlist(
        &self,
        user_id: &str,
        name: &str,
        token: &str,
    ) -> Result<Option<String>> {
        self.find_owned_playlist(user_id, name, token).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        token: &str,
    ) -> Result<String> {
        self.create_private_playlist(user_id, name, description, token)
            .await
    }

    async fn search_track(&self, song: &str, artist: &str, token: &str) -> Result<Option<String>> {
        self.first_track_uri(song, artist, token).await
    }

    async fn add_track_to_playlist(
        &self,
        playlist_id: &str,
        track_uri: &str,
        token: &str,
    ) -> Result<()> {
        self.add_track(playlist_id, track_uri, token).await
    }
}
