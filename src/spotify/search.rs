use reqwest::Response;

use crate::{
    errors::{Error, Result},
    types::SearchResponse,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches tracks for `"{song} {artist}"` and returns the first URI.
    ///
    /// Sends `GET /search` with `type=track` and `limit=1`; only the first
    /// result is ever used, so no further pages are requested.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(uri))` - URI of the best match, e.g. `spotify:track:...`
    /// - `Ok(None)` - the search returned no tracks
    ///
    /// # Errors
    ///
    /// Returns [`Error::Search`] on network errors, non-success statuses or
    /// an unexpected response shape.
    pub async fn first_track_uri(
        &self,
        song: &str,
        artist: &str,
        token: &str,
    ) -> Result<Option<String>> {
        let query = format!("{} {}", song, artist);
        let fail = |reason: String| Error::Search {
            query: query.clone(),
            reason,
        };

        let api_url = self.endpoint("search");
        log::debug!("GET {} q={}", api_url, query);

        let res = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|e| fail(e.to_string()))?;

        let json: SearchResponse = res.json().await.map_err(|e| fail(e.to_string()))?;

        Ok(json.tracks.items.into_iter().next().map(|t| t.uri))
    }
}
