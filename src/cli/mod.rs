//! # CLI Module
//!
//! User-facing commands of songlist. Each command prints its progress with
//! the crate's `info!`, `success!`, `warning!` and `error!` macros; fatal
//! errors end the process with exit code 1 through `error!`.
//!
//! - [`sync`] - fill a Spotify playlist from the song file
//! - [`usage`] - print usage examples
//!
//! ## Usage Patterns
//!
//! ```bash
//! songlist -x "% by %"                          # songs.txt into "Songlist <date>"
//! songlist -f mixtape.txt -n "Mixtape" -x "% - %"
//! songlist -n "Mixtape" --reuse --strict
//! ```

mod sync;
mod usage;

pub use sync::sync;
pub use usage::usage;
