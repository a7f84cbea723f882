use colored::Colorize;

const EXAMPLES: &str = r#"
  # songs.txt holds lines like "Yesterday by The Beatles"
  songlist -c <client-id> -s <client-secret> -u <user-id> -a <auth-token> -x "% by %"

  # credentials from the environment or a .env file, custom file and playlist
  export SPOTIFY_CLIENT_ID=... SPOTIFY_CLIENT_SECRET=... SPOTIFY_USER_ID=... SPOTIFY_AUTH_TOKEN=...
  songlist -f mixtape.txt -n "Mixtape" -x "% - %"

  # several accepted separators, tried left to right
  songlist -x "% - % by %"

  # append to an existing playlist of the same name, stop on the first error
  songlist -n "Mixtape" --reuse --strict
"#;

/// Prints usage examples and the song format rules.
pub fn usage() {
    println!("{}", "Examples:".bold());
    println!("{}", EXAMPLES);
    println!("{}", "Song format:".bold());
    println!(
        "  The format is split on '%'. Each piece is tried as a literal separator and the\n  first one found exactly once in a line splits it into song (left) and artist\n  (right). Lines that match no separator are skipped."
    );
}
