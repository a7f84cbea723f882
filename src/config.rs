//! Configuration management for songlist.
//!
//! All settings are assembled once at startup into a [`Settings`] value. The
//! sources are layered:
//! 1. Command-line flags (highest priority)
//! 2. Environment variables, including values loaded from `.env` files
//! 3. Application defaults (where applicable)
//!
//! Nothing outside this module and `main` looks at the process environment.

use std::path::PathBuf;

use crate::{
    errors::{Error, Result},
    utils,
};

pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const ENV_USER_ID: &str = "SPOTIFY_USER_ID";
pub const ENV_AUTH_TOKEN: &str = "SPOTIFY_AUTH_TOKEN";
pub const ENV_PLAYLIST_NAME: &str = "PLAYLIST_NAME";
pub const ENV_FILE_PATH: &str = "FILE_PATH";
pub const ENV_SONG_FORMAT: &str = "SONG_FORMAT";
pub const ENV_API_URL: &str = "SPOTIFY_API_URL";
pub const ENV_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";

pub const DEFAULT_FILE_PATH: &str = "songs.txt";
pub const DEFAULT_SONG_FORMAT: &str = "[song name] by [artist name]";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is read first, then the one in the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/songlist/.env`
/// - macOS: `~/Library/Application Support/songlist/.env`
/// - Windows: `%LOCALAPPDATA%/songlist/.env`
///
/// Variables already present in the environment are never overwritten, so
/// the working directory file takes precedence over the data directory one.
/// Missing files are not an error.
///
/// # Errors
///
/// Returns [`Error::Configuration`] when a `.env` file exists but cannot be
/// parsed, or the data directory cannot be created.
///
/// # Example
///
/// ```
/// load_env().await?;
/// let settings = Settings::resolve(&Overrides::default(), |key| std::env::var(key).ok());
/// ```
pub async fn load_env() -> Result<()> {
    match dotenv::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(Error::Configuration(e.to_string())),
    }

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::Configuration(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Configuration(e.to_string()))?;
        log::debug!("Loaded environment from {}", path.display());
    }

    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songlist/.env");
    path
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub user_id: Option<String>,
    pub auth_token: Option<String>,
    pub file: Option<PathBuf>,
    pub name: Option<String>,
    pub song_format: Option<String>,
    pub reuse_playlist: bool,
    pub strict: bool,
}

/// What happens when searching or appending a single line fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and carry on with the next line.
    #[default]
    Continue,
    /// Abort the whole run on the first failure.
    Abort,
}

/// Credential values as found, before validation.
#[derive(Debug, Clone, Default)]
pub struct CredentialSources {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub user_id: Option<String>,
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_id: String,
    pub auth_token: String,
}

impl CredentialSources {
    /// Checks that all four values are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] naming every absent value, in
    /// the order client id, client secret, user id, auth token.
    pub fn resolve(&self) -> Result<Credentials> {
        let fields = [
            ("client id", &self.client_id),
            ("client secret", &self.client_secret),
            ("user id", &self.user_id),
            ("auth token", &self.auth_token),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(Error::MissingCredential(missing));
        }

        let value = |v: &Option<String>| v.clone().unwrap_or_default();
        Ok(Credentials {
            client_id: value(&self.client_id),
            client_secret: value(&self.client_secret),
            user_id: value(&self.user_id),
            auth_token: value(&self.auth_token),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: CredentialSources,
    pub playlist_name: String,
    pub file_path: PathBuf,
    pub song_format: String,
    pub api_url: String,
    pub token_url: String,
    pub reuse_playlist: bool,
    pub failure_policy: FailurePolicy,
}

impl Settings {
    /// Layers command-line overrides over the environment and defaults.
    ///
    /// `env` looks a variable up by name; `main` passes the process
    /// environment, tests pass a map.
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values from command-line flags; `Some` always wins
    /// * `env` - Lookup for `SPOTIFY_*`, `PLAYLIST_NAME`, `FILE_PATH` and
    ///   `SONG_FORMAT`, consulted when no flag was given
    ///
    /// Credentials are collected but not validated here; call
    /// [`CredentialSources::resolve`] for that. Empty strings count as
    /// unset so the defaults still apply.
    ///
    /// # Example
    ///
    /// ```
    /// let overrides = Overrides {
    ///     name: Some("Road Trip".to_string()),
    ///     ..Default::default()
    /// };
    /// let settings = Settings::resolve(&overrides, |key| std::env::var(key).ok());
    /// assert_eq!(settings.playlist_name, "Road Trip");
    /// ```
    pub fn resolve<F>(overrides: &Overrides, env: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |flag: &Option<String>, key: &str| {
            flag.clone()
                .filter(|v| !v.is_empty())
                .or_else(|| env(key).filter(|v| !v.is_empty()))
        };

        let credentials = CredentialSources {
            client_id: pick(&overrides.client_id, ENV_CLIENT_ID),
            client_secret: pick(&overrides.client_secret, ENV_CLIENT_SECRET),
            user_id: pick(&overrides.user_id, ENV_USER_ID),
            auth_token: pick(&overrides.auth_token, ENV_AUTH_TOKEN),
        };

        let playlist_name = pick(&overrides.name, ENV_PLAYLIST_NAME)
            .unwrap_or_else(|| utils::default_playlist_name(chrono::Local::now().date_naive()));

        let file_path = overrides
            .file
            .clone()
            .or_else(|| env(ENV_FILE_PATH).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_PATH));

        Settings {
            credentials,
            playlist_name,
            file_path,
            song_format: pick(&overrides.song_format, ENV_SONG_FORMAT)
                .unwrap_or_else(|| DEFAULT_SONG_FORMAT.to_string()),
            api_url: pick(&None, ENV_API_URL)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            token_url: pick(&None, ENV_TOKEN_URL).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            reuse_playlist: overrides.reuse_playlist,
            failure_policy: if overrides.strict {
                FailurePolicy::Abort
            } else {
                FailurePolicy::Continue
            },
        }
    }
}
