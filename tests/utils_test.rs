use chrono::NaiveDate;
use songlist::types::SongEntry;
use songlist::utils::*;

// Helper function to build the expected entry
fn entry(song: &str, artist: &str) -> Option<SongEntry> {
    Some(SongEntry {
        song: song.to_string(),
        artist: artist.to_string(),
    })
}

#[test]
fn test_parse_song_entry_single_delimiter() {
    assert_eq!(
        parse_song_entry("Yesterday by The Beatles", " by "),
        entry("Yesterday", "The Beatles")
    );

    // Percent signs around the delimiter only mark the placeholders
    assert_eq!(
        parse_song_entry("Yesterday by The Beatles", "% by %"),
        entry("Yesterday", "The Beatles")
    );
}

#[test]
fn test_parse_song_entry_trims_whitespace() {
    assert_eq!(
        parse_song_entry("   Hey Jude   -   The Beatles  \r", "%-%"),
        entry("Hey Jude", "The Beatles")
    );
}

#[test]
fn test_parse_song_entry_without_delimiter_is_skipped() {
    assert_eq!(parse_song_entry("___no delimiter___", " by "), None);
    assert_eq!(parse_song_entry("", "% by %"), None);
}

#[test]
fn test_parse_song_entry_rejects_repeated_delimiter() {
    // " by " occurs twice, so the line cannot be split with it
    assert_eq!(
        parse_song_entry("Stand by Me by Ben E. King", "% by %"),
        None
    );
}

#[test]
fn test_parse_song_entry_falls_through_to_next_candidate() {
    // " by " occurs twice and is rejected, " - " occurs once and wins
    assert_eq!(
        parse_song_entry("Stand by Me - Ben E. King by request", "% by % - %"),
        entry("Stand by Me", "Ben E. King by request")
    );

    // first candidate missing entirely, second one used
    assert_eq!(
        parse_song_entry("Angie - The Rolling Stones", " by % - "),
        entry("Angie", "The Rolling Stones")
    );
}

#[test]
fn test_parse_song_entry_first_matching_candidate_wins() {
    assert_eq!(
        parse_song_entry("Hello - Adele by vinyl", " - % by "),
        entry("Hello", "Adele by vinyl")
    );
}

#[test]
fn test_parse_song_entry_format_without_percent_is_one_delimiter() {
    let format = "[song name] by [artist name]";
    assert_eq!(parse_song_entry("Yesterday by The Beatles", format), None);
    assert_eq!(
        parse_song_entry("Yesterday [song name] by [artist name] The Beatles", format),
        entry("Yesterday", "The Beatles")
    );
}

#[test]
fn test_parse_song_entry_empty_side_is_skipped() {
    assert_eq!(parse_song_entry(" by The Beatles", " by "), None);
    assert_eq!(parse_song_entry("Yesterday by   ", " by "), None);
}

#[test]
fn test_parse_song_entry_is_literal_not_pattern() {
    assert_eq!(
        parse_song_entry("Song.*Artist", ".*"),
        entry("Song", "Artist")
    );
    assert_eq!(parse_song_entry("Song by Artist", ".*"), None);
}

#[test]
fn test_song_lines_numbers_and_skips_blank_lines() {
    let content = "Yesterday by The Beatles\r\n\n   \nAngie by The Rolling Stones";
    let lines: Vec<(usize, &str)> = song_lines(content).collect();

    assert_eq!(
        lines,
        vec![
            (1, "Yesterday by The Beatles"),
            (4, "Angie by The Rolling Stones")
        ]
    );
}

#[test]
fn test_default_playlist_name() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    assert_eq!(default_playlist_name(date), "Songlist 2024-03-09");
}

#[test]
fn test_playlist_description() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    assert_eq!(
        playlist_description("songs.txt", date),
        "Imported from songs.txt on 2024-03-09"
    );
}
