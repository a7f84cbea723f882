use chrono::Utc;

use crate::{
    errors::{Error, Result},
    types::{ClientCredentialsResponse, Token},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Requests an app token with the client credentials grant.
    ///
    /// Sends the client id and secret as HTTP basic auth to the token
    /// endpoint. A transport failure, a non-success status or a response
    /// without an access token all mean the credentials cannot be used and
    /// are reported as [`Error::Authentication`].
    ///
    /// # Arguments
    ///
    /// * `client_id` - Client ID of the Spotify application
    /// * `client_secret` - Client secret of the same application
    ///
    /// # Returns
    ///
    /// A [`Token`] whose `obtained_at` is the current Unix time. Fields the
    /// accounts service leaves out default to empty or zero.
    ///
    /// # Errors
    ///
    /// - [`Error::Authentication`] with the status and body on a non-success reply
    /// - [`Error::Authentication`] when the reply has no `access_token`
    /// - [`Error::Authentication`] on network errors
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new(DEFAULT_API_URL, DEFAULT_TOKEN_URL);
    /// let token = client.client_credentials_token("abc123", "def456").await?;
    /// ```
    pub async fn client_credentials_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Token> {
        log::debug!("POST {} (client credentials)", self.token_url);

        let res = self
            .http
            .post(&self.token_url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!("{} {}", status, body.trim())));
        }

        let json: ClientCredentialsResponse = res
            .json()
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;

        let access_token = json
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Authentication("no access token in response".to_string()))?;

        Ok(Token {
            access_token,
            token_type: json.token_type,
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
