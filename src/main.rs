use anyhow::Result;
use clap::Parser;
use playlist_manager::cli::{Console, StdinInput};
use playlist_manager::manager::config::{DEFAULT_PLAYLIST_FILE, DEFAULT_PRIORITY_FILE};
use playlist_manager::storage::FileStore;
use playlist_manager::{ManagerConfig, Session};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Console music playlist manager with undo/redo", long_about = None)]
struct Args {
    /// Playlist file, rewritten after every change
    #[arg(short = 'p', long, default_value = DEFAULT_PLAYLIST_FILE)]
    playlist: String,

    /// Priority queue file, appended to on every priority addition
    #[arg(short = 'q', long, default_value = DEFAULT_PRIORITY_FILE)]
    priority: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, so it doesn't interleave with the menu on stdout)
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let playlist_path = shellexpand::tilde(&args.playlist);
    let priority_path = shellexpand::tilde(&args.priority);

    let config = ManagerConfig::default()
        .with_playlist_path(playlist_path.into_owned())
        .with_priority_path(priority_path.into_owned());
    log::info!("Playlist file: {:?}", config.playlist_path);
    log::info!("Priority file: {:?}", config.priority_path);

    let mut session = Session::open(config, FileStore::new());

    let mut console = Console::new(StdinInput::new(), io::stdout().lock());
    console.run(&mut session)?;

    Ok(())
}
