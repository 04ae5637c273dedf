use stickerbook_core::{AlbumError, AlbumState, Config};
use tracing::{error, info};

mod ui;

pub use ui::AppContext;

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Load the saved album if one exists, otherwise start with an empty album.
///
/// A corrupt or inconsistent save file is fatal at startup: continuing with
/// counts the user did not enter would silently lose data on the next save.
fn load_initial_album(config: &Config) -> AlbumState {
    match AlbumState::load(&config.album_path) {
        Ok(album) => album,
        Err(AlbumError::NothingToLoad(_)) => {
            info!("no saved album, starting empty");
            AlbumState::new()
        }
        Err(e) => {
            error!("cannot read saved album: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    configure_logging();

    let config = Config::load();
    info!("album file: {}", config.album_path.display());
    let initial_album = load_initial_album(&config);

    let context = AppContext {
        config,
        initial_album,
    };

    info!("Starting UI");
    ui::launch_app(context);
    info!("UI quit");
}
