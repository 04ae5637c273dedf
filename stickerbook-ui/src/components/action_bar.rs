//! Save/Load action bar

use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// The two album actions. Save is always available; Load stays disabled
/// until a save file exists.
#[component]
pub fn ActionBarView(
    load_enabled: bool,
    onsave: EventHandler<()>,
    onload: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "action-bar",
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Small,
                onclick: move |_| onsave.call(()),
                "Save"
            }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: !load_enabled,
                onclick: move |_| onload.call(()),
                "Load"
            }
        }
    }
}
