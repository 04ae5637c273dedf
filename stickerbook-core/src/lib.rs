//! stickerbook-core - Album state, statistics, and persistence
//!
//! Everything here is UI-free: the desktop crate owns the window and event
//! wiring, this crate owns the slot counts and the save file.

pub mod album;
pub mod config;

pub use album::{AlbumError, AlbumState, Statistics, GRID_SIZE, SLOT_COUNT};
pub use config::Config;
