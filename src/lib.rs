//! songlist library
//!
//! Fills a Spotify playlist from a plain-text file with one song per line.
//! Lines are split into song and artist with a `%`-separated format, each
//! song is looked up with the Spotify search API and the first match is
//! appended to the playlist.
//!
//! # Modules
//!
//! - `cli` - Command-line command implementations
//! - `config` - Layered settings from flags, environment and `.env` files
//! - `errors` - Error type shared by all modules
//! - `spotify` - Spotify Web API client
//! - `sync` - The sync orchestrator
//! - `types` - Data structures and API payloads
//! - `utils` - Song line parsing and small helpers

pub mod cli;
pub mod config;
pub mod errors;
pub mod spotify;
pub mod sync;
pub mod types;
pub mod utils;

/// Prints a status line prefixed with a blue `o`.
///
/// ```
/// info!("Adding songs from {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line to stderr and exits with code 1.
///
/// Reserved for fatal errors: missing or invalid credentials, playlist
/// failures and unreadable song files. Code after it never runs, so it can
/// stand in for a value in a `match` arm.
///
/// ```
/// let report = match syncer.run().await {
///     Ok(report) => report,
///     Err(e) => error!("{}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format!($($arg)*).as_str().red());
    std::process::exit(1);
  })
}

/// Prints a line prefixed with a yellow `!`, for problems that do not stop
/// the run such as a song that could not be added.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
