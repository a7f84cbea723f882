use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{Credentials, FailurePolicy, Settings},
    errors::{Error, Result},
    info,
    spotify::SpotifyApi,
    success,
    types::{LineOutcome, LineStatus, SongEntry, SyncReport},
    utils, warning,
};

/// Fills one playlist from one song file.
///
/// The run is strictly sequential: resolve credentials, authenticate,
/// prepare the playlist, read the file, then search and append line by line.
/// Anything failing before the per-line loop aborts the run.
pub struct Syncer<'a, C: SpotifyApi> {
    api: &'a C,
    settings: Settings,
    progress: bool,
}

impl<'a, C: SpotifyApi> Syncer<'a, C> {
    /// Creates a syncer over any [`SpotifyApi`] implementation.
    ///
    /// The progress bar is off by default; tests and library callers get a
    /// silent run.
    ///
    /// # Arguments
    ///
    /// * `api` - Spotify client, the reqwest [`crate::spotify::SpotifyClient`]
    ///   in production or a mock in tests
    /// * `settings` - Resolved settings; credentials are validated by [`Self::run`]
    pub fn new(api: &'a C, settings: Settings) -> Self {
        Syncer {
            api,
            settings,
            progress: false,
        }
    }

    /// Shows an indicatif progress bar on stderr while lines are processed.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// Runs the whole sync and returns one outcome per non-blank line.
    ///
    /// Steps, in order:
    /// 1. **Credentials**: all four values must be present, checked before
    ///    any request is sent
    /// 2. **Authentication**: client credentials grant with id and secret
    /// 3. **Playlist**: reuse an owned playlist when asked, else create one
    /// 4. **File**: read the song file as UTF-8 text
    /// 5. **Lines**: parse, search, append; unparsable lines are `Skipped`,
    ///    lines without a search result are `NotFound`
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCredential`] when a credential is absent or empty
    /// - [`Error::Authentication`] when the client id or secret is rejected
    /// - [`Error::PlaylistCreation`] when the playlist cannot be found or created
    /// - [`Error::FileRead`] when the song file cannot be read
    /// - [`Error::Search`] / [`Error::AddTrack`] only under
    ///   [`FailurePolicy::Abort`]; otherwise they are recorded as `Failed`
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new(&settings.api_url, &settings.token_url);
    /// let report = Syncer::new(&client, settings).run().await?;
    /// println!("added {} of {}", report.added(), report.outcomes.len());
    /// ```
    pub async fn run(&self) -> Result<SyncReport> {
        let credentials = self.settings.credentials.resolve()?;

        let token = self
            .api
            .authenticate(&credentials.client_id, &credentials.client_secret)
            .await?;
        log::debug!(
            "Client credentials accepted ({} token, expires in {}s)",
            token.token_type,
            token.expires_in
        );

        let playlist_id = self.prepare_playlist(&credentials).await?;

        let path = &self.settings.file_path;
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|source| Error::FileRead {
                path: path.clone(),
                source,
            })?;

        let lines: Vec<(usize, &str)> = utils::song_lines(&content).collect();
        let pb = self.progress_bar(lines.len() as u64);

        let mut report = SyncReport {
            playlist_id: playlist_id.clone(),
            outcomes: Vec::with_capacity(lines.len()),
        };

        for (line, text) in lines {
            let entry = utils::parse_song_entry(text, &self.settings.song_format);

            let status = match entry {
                None => {
                    log::debug!("Line {} does not match the song format, skipping", line);
                    LineStatus::Skipped
                }
                Some(entry) => {
                    pb.set_message(entry.song.clone());
                    match self
                        .sync_entry(&entry, &playlist_id, &credentials.auth_token)
                        .await
                    {
                        Ok(status) => status,
                        Err(e) if self.settings.failure_policy == FailurePolicy::Abort => {
                            pb.finish_and_clear();
                            return Err(e);
                        }
                        Err(e) => {
                            pb.suspend(|| warning!("Line {}: {}", line, e));
                            LineStatus::Failed {
                                reason: e.to_string(),
                            }
                        }
                    }
                }
            };

            report.outcomes.push(LineOutcome {
                line,
                text: text.to_string(),
                status,
            });
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(report)
    }

    async fn prepare_playlist(&self, credentials: &Credentials) -> Result<String> {
        let name = &self.settings.playlist_name;

        if self.settings.reuse_playlist {
            if let Some(id) = self
                .api
                .find_playlist(&credentials.user_id, name, &credentials.auth_token)
                .await?
            {
                info!("Reusing playlist {}", name);
                return Ok(id);
            }
        }

        let file_name = self
            .settings
            .file_path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.settings.file_path.display().to_string());
        let description =
            utils::playlist_description(&file_name, chrono::Local::now().date_naive());

        let id = self
            .api
            .create_playlist(
                &credentials.user_id,
                name,
                &description,
                &credentials.auth_token,
            )
            .await?;
        success!("Playlist {} created", name);

        Ok(id)
    }

    async fn sync_entry(
        &self,
        entry: &SongEntry,
        playlist_id: &str,
        token: &str,
    ) -> Result<LineStatus> {
        let Some(uri) = self
            .api
            .search_track(&entry.song, &entry.artist, token)
            .await?
        else {
            log::debug!("No track found for '{}' by '{}'", entry.song, entry.artist);
            return Ok(LineStatus::NotFound);
        };

        self.api
            .add_track_to_playlist(playlist_id, &uri, token)
            .await?;

        Ok(LineStatus::Added { uri })
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} [{bar:30.blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .progress_chars("=> "),
        );
        pb
    }
}
