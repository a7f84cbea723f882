use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Spotify credentials are missing: {}. Please provide all required credentials.", .0.join(", "))]
    MissingCredential(Vec<&'static str>),

    #[error("Invalid Spotify credentials. Please check your Client ID and Client Secret. ({0})")]
    Authentication(String),

    #[error("Failed to create or reuse playlist '{name}': {reason}")]
    PlaylistCreation { name: String, reason: String },

    #[error("Cannot read song file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Search for '{query}' failed: {reason}")]
    Search { query: String, reason: String },

    #[error("Failed to add {uri} to playlist: {reason}")]
    AddTrack { uri: String, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Errors that only affect a single line of the song file.
    pub fn is_per_line(&self) -> bool {
        matches!(self, Error::Search { .. } | Error::AddTrack { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_are_listed() {
        let err = Error::MissingCredential(vec!["client secret", "auth token"]);
        assert!(err.to_string().contains("client secret, auth token"));
    }

    #[test]
    fn only_search_and_append_are_per_line() {
        let search = Error::Search {
            query: "a b".into(),
            reason: "500".into(),
        };
        let add = Error::AddTrack {
            uri: "spotify:track:1".into(),
            reason: "403".into(),
        };
        assert!(search.is_per_line());
        assert!(add.is_per_line());
        assert!(!Error::Authentication("401".into()).is_per_line());
    }
}
