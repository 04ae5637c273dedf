//! Dismissible notice toast

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// A dismissible notice, used for recoverable conditions like trying to load
/// when no save file exists yet.
#[component]
pub fn NoticeToast(
    /// The notice message to display
    message: String,
    /// Called when the user dismisses the notice
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "notice-toast",
            span { "{message}" }
            ChromelessButton {
                class: Some("notice-toast__dismiss".to_string()),
                aria_label: Some("Dismiss".to_string()),
                onclick: move |_| on_dismiss.call(()),
                XIcon {}
            }
        }
    }
}
