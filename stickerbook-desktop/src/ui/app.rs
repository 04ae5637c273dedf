use crate::ui::app_context::{use_app_context, AppContext};
use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use stickerbook_core::{AlbumError, AlbumState};
use stickerbook_ui::{ActionBarView, AlbumGridView, NoticeToast, StatusBarView};
use tracing::{error, info};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("stickerbook")
        .with_inner_size(LogicalSize::new(880, 800))
        .with_resizable(false)
}

pub fn launch_app(context: AppContext) {
    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context_provider(move || Box::new(context.clone()))
        .launch(App);
}

/// Policy for integrity violations and write failures: log and exit.
///
/// Kept in one place so the policy can be swapped for a recoverable notice
/// without touching the event handlers.
fn fatal(err: AlbumError) -> ! {
    error!("unrecoverable album error: {err}");
    std::process::exit(1);
}

#[component]
fn App() -> Element {
    let context = use_app_context();
    let album_path = context.config.album_path;
    let initial_album = context.initial_album;

    // The album signal is the single owner of mutable state; every event
    // handler below runs to completion on the main thread before the next.
    let mut album = use_signal(move || initial_album);
    let mut load_available = use_signal({
        let path = album_path.clone();
        move || path.is_file()
    });
    let mut notice = use_signal(|| None::<String>);

    let stats = album.read().statistics();
    let counts = album.read().counts();

    let save_path = album_path.clone();
    let on_save = move |_| {
        if let Err(e) = album.read().save(&save_path) {
            fatal(e);
        }
        load_available.set(true);
    };

    let load_path = album_path.clone();
    let on_load = move |_| match AlbumState::load(&load_path) {
        Ok(loaded) => {
            info!("reloaded album: {}", loaded.statistics());
            album.set(loaded);
        }
        Err(AlbumError::NothingToLoad(_)) => {
            notice.set(Some("no saved data available".to_string()));
        }
        Err(e) => fatal(e),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app",
            AlbumGridView {
                counts,
                onincrement: move |id| album.write().increment(id),
                ondecrement: move |id| album.write().decrement(id),
            }
            ActionBarView {
                load_enabled: load_available(),
                onsave: on_save,
                onload: on_load,
            }
            StatusBarView { missing: stats.missing, double: stats.double }
            if let Some(message) = notice() {
                NoticeToast {
                    message,
                    on_dismiss: move |_| notice.set(None),
                }
            }
        }
    }
}
