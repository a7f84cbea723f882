use reqwest::Response;

use crate::{
    errors::{Error, Result},
    types::{
        AddTrackToPlaylistRequest, CreatePlaylistRequest, CreatePlaylistResponse,
        GetUserPlaylistsResponse,
    },
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Looks for a playlist called `name` owned by `user_id`.
    ///
    /// Walks every page of `GET /me/playlists`, following the `next` link
    /// of each page until a match is found or the pages run out. Only exact
    /// name matches on playlists owned by `user_id` count; followed
    /// playlists of other users with the same name are ignored.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Spotify user that must own the playlist
    /// * `name` - Exact playlist name
    /// * `token` - User access token
    ///
    /// # Returns
    ///
    /// - `Ok(Some(id))` - id of the first matching playlist
    /// - `Ok(None)` - no owned playlist has that name
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaylistCreation`] on network errors, non-success
    /// statuses or malformed pages, since the playlist cannot be prepared.
    pub async fn find_owned_playlist(
        &self,
        user_id: &str,
        name: &str,
        token: &str,
    ) -> Result<Option<String>> {
        let fail = |reason: String| Error::PlaylistCreation {
            name: name.to_string(),
            reason,
        };

        let mut next = Some(format!("{}?limit=50", self.endpoint("me/playlists")));
        while let Some(url) = next {
            log::debug!("GET {}", url);
            let res = self
                .http
                .get(&url)
                .bearer_auth(token)
                .send()
                .await
                .and_then(Response::error_for_status)
                .map_err(|e| fail(e.to_string()))?;

            let page: GetUserPlaylistsResponse =
                res.json().await.map_err(|e| fail(e.to_string()))?;

            if let Some(found) = page
                .items
                .iter()
                .find(|p| p.name == name && p.owner.id == user_id)
            {
                return Ok(Some(found.id.clone()));
            }

            next = page.next;
        }

        Ok(None)
    }

    /// Creates a private, non-collaborative playlist for `user_id`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Owner of the new playlist
    /// * `name` - Playlist name
    /// * `description` - Playlist description shown in Spotify
    /// * `token` - User access token with `playlist-modify-private` scope
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaylistCreation`] when the request fails, the
    /// status is not a success or the reply carries no playlist id.
    ///
    /// # Example
    ///
    /// ```
    /// let id = client
    ///     .create_private_playlist("user", "Road Trip", "Imported from songs.txt", &token)
    ///     .await?;
    /// ```
    pub async fn create_private_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        token: &str,
    ) -> Result<String> {
        let fail = |reason: String| Error::PlaylistCreation {
            name: name.to_string(),
            reason,
        };

        let api_url = self.endpoint(&format!("users/{}/playlists", user_id));
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: false,
            collaborative: false,
        };

        log::debug!("POST {}", api_url);
        let res = self
            .http
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|e| fail(e.to_string()))?;

        let playlist: CreatePlaylistResponse =
            res.json().await.map_err(|e| fail(e.to_string()))?;

        if playlist.id.is_empty() {
            return Err(fail("response carried no playlist id".to_string()));
        }

        Ok(playlist.id)
    }

    /// Appends a single track to a playlist.
    ///
    /// Any success status counts as added; the response body (a snapshot
    /// id) is not needed and not read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AddTrack`] on network errors and non-success
    /// statuses. The orchestrator treats it as a per-line failure.
    pub async fn add_track(&self, playlist_id: &str, track_uri: &str, token: &str) -> Result<()> {
        let api_url = self.endpoint(&format!("playlists/{}/tracks", playlist_id));
        let body = AddTrackToPlaylistRequest {
            uris: vec![track_uri.to_string()],
        };

        log::debug!("POST {} ({})", api_url, track_uri);
        let res = self
            .http
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|e| Error::AddTrack {
                uri: track_uri.to_string(),
                reason: e.to_string(),
            })?;
        log::debug!("Added {} to {} ({})", track_uri, playlist_id, res.status());

        Ok(())
    }
}
