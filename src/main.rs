use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use songlist::{
    cli,
    config::{self, Overrides, Settings},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Spotify client ID [env: SPOTIFY_CLIENT_ID]
    #[clap(short = 'c', long)]
    client_id: Option<String>,

    /// Spotify client secret [env: SPOTIFY_CLIENT_SECRET]
    #[clap(short = 's', long)]
    client_secret: Option<String>,

    /// Spotify user ID that owns the playlist [env: SPOTIFY_USER_ID]
    #[clap(short = 'u', long)]
    user_id: Option<String>,

    /// User access token with playlist-modify-private scope [env: SPOTIFY_AUTH_TOKEN]
    #[clap(short = 'a', long)]
    auth_token: Option<String>,

    /// Song file, one entry per line [env: FILE_PATH] [default: songs.txt]
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// Playlist name [env: PLAYLIST_NAME] [default: "Songlist <date>"]
    #[clap(short = 'n', long)]
    name: Option<String>,

    /// Format of song entries, separators split by '%' [env: SONG_FORMAT]
    /// [default: "[song name] by [artist name]"]
    #[clap(short = 'x', long)]
    song_format: Option<String>,

    /// Append to an owned playlist with the same name instead of creating one
    #[clap(short = 'r', long)]
    reuse: bool,

    /// Stop at the first song that cannot be searched or added
    #[clap(long)]
    strict: bool,

    /// Show usage examples and exit
    #[clap(short = 'v', long)]
    usage: bool,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            user_id: self.user_id.clone(),
            auth_token: self.auth_token.clone(),
            file: self.file.clone(),
            name: self.name.clone(),
            song_format: self.song_format.clone(),
            reuse_playlist: self.reuse,
            strict: self.strict,
        }
    }
}

#[tokio::main]
async fn main() {
    let env_result = config::load_env().await;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = env_result {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if cli.usage {
        let mut cmd = Cli::command();
        if let Err(e) = cmd.print_long_help() {
            warning!("Cannot print help. Err: {}", e);
        }
        cli::usage();
        return;
    }

    let settings = Settings::resolve(&cli.overrides(), |key| std::env::var(key).ok());
    cli::sync(settings).await;
}
