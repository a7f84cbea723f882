use chrono::NaiveDate;

use crate::types::SongEntry;

/// Splits a song line into song and artist using a `%`-separated format.
///
/// Every non-empty segment of `format` is tried, in order, as a literal
/// delimiter. The first one that occurs exactly once in `line` wins; the text
/// before it becomes the song and the text after it the artist, both trimmed.
/// Returns `None` when no segment qualifies or when the winning split leaves
/// either side empty.
///
/// # Example
///
/// ```
/// let entry = parse_song_entry("Yesterday by The Beatles", "% by %").unwrap();
/// assert_eq!(entry.song, "Yesterday");
/// assert_eq!(entry.artist, "The Beatles");
/// ```
pub fn parse_song_entry(line: &str, format: &str) -> Option<SongEntry> {
    for delimiter in format.split('%').filter(|d| !d.is_empty()) {
        let mut parts = line.split(delimiter);
        let (Some(song), Some(artist), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };

        let song = song.trim();
        let artist = artist.trim();
        if song.is_empty() || artist.is_empty() {
            return None;
        }

        return Some(SongEntry {
            song: song.to_string(),
            artist: artist.to_string(),
        });
    }

    None
}

/// Yields `(line_number, line)` for every non-blank line, numbered from 1.
pub fn song_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
}

pub fn default_playlist_name(date: NaiveDate) -> String {
    format!("Songlist {}", date.format("%Y-%m-%d"))
}

pub fn playlist_description(file_name: &str, date: NaiveDate) -> String {
    format!(
        "Imported from {} on {}",
        file_name,
        date.format("%Y-%m-%d")
    )
}
