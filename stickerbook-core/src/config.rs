//! Application configuration: where the album file lives.
//!
//! The save file has a fixed per-user location (home directory, fixed name).
//! The resolved path travels inside [`Config`] so the desktop app and tests
//! inject it explicitly instead of reaching for a global.

use std::path::PathBuf;
use tracing::warn;

/// Fixed name of the save file in the user's home directory.
pub const ALBUM_FILE_NAME: &str = ".stickerbook.json";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Full path of the album save file.
    pub album_path: PathBuf,
}

impl Config {
    /// Resolve the per-user save location.
    pub fn load() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| {
            warn!("no home directory found, keeping the album file in the current directory");
            PathBuf::from(".")
        });
        Self {
            album_path: home.join(ALBUM_FILE_NAME),
        }
    }

    /// Configuration with an explicit album file path (used by tests).
    pub fn with_album_path(album_path: PathBuf) -> Self {
        Self { album_path }
    }
}
