use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEntry {
    pub song: String,
    pub artist: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentialsResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: Tracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracks {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    Added { uri: String },
    Skipped,
    NotFound,
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct LineOutcome {
    /// 1-based line number in the song file.
    pub line: usize,
    pub text: String,
    pub status: LineStatus,
}

#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub playlist_id: String,
    pub outcomes: Vec<LineOutcome>,
}

impl SyncReport {
    pub fn added(&self) -> usize {
        self.count(|s| matches!(s, LineStatus::Added { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, LineStatus::Skipped))
    }

    pub fn not_found(&self) -> usize {
        self.count(|s| matches!(s, LineStatus::NotFound))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, LineStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&LineStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    /// Rows for every line that did not end up in the playlist.
    pub fn unmatched_rows(&self) -> Vec<OutcomeTableRow> {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o.status, LineStatus::Added { .. }))
            .map(|o| OutcomeTableRow {
                line: o.line,
                entry: o.text.clone(),
                status: match &o.status {
                    LineStatus::Added { .. } => "added".to_string(),
                    LineStatus::Skipped => "skipped".to_string(),
                    LineStatus::NotFound => "not found".to_string(),
                    LineStatus::Failed { reason } => format!("failed: {}", reason),
                },
            })
            .collect()
    }
}

#[derive(Tabled)]
pub struct OutcomeTableRow {
    pub line: usize,
    pub entry: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_takes_first_track_uri() {
        let body = r#"{"tracks":{"href":"x","items":[
            {"id":"1","name":"Yesterday","uri":"spotify:track:1","popularity":80},
            {"id":"2","name":"Yesterday (Live)","uri":"spotify:track:2"}
        ]}}"#;
        let res: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(res.tracks.items[0].uri, "spotify:track:1");
    }

    #[test]
    fn token_response_without_access_token_parses() {
        let res: ClientCredentialsResponse =
            serde_json::from_str(r#"{"error":"invalid_client"}"#).unwrap();
        assert!(res.access_token.is_none());
    }

    #[test]
    fn report_counts_each_status() {
        let outcome = |line, status| LineOutcome {
            line,
            text: String::new(),
            status,
        };
        let report = SyncReport {
            playlist_id: "p".into(),
            outcomes: vec![
                outcome(1, LineStatus::Added { uri: "u".into() }),
                outcome(2, LineStatus::Skipped),
                outcome(3, LineStatus::NotFound),
                outcome(4, LineStatus::Failed { reason: "boom".into() }),
                outcome(5, LineStatus::Added { uri: "v".into() }),
            ],
        };
        assert_eq!(report.added(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.not_found(), 1);
        assert_eq!(report.failed(), 1);

        let rows = report.unmatched_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].status, "failed: boom");
    }
}
