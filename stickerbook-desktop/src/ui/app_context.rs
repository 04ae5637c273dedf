use dioxus::prelude::*;
use stickerbook_core::{AlbumState, Config};

/// Everything the UI needs at launch, provided through the Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    /// Album loaded at startup (or empty when there was nothing to load).
    pub initial_album: AlbumState,
}

/// Hook to access the launch context from components
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
