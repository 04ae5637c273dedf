//! Aggregate statistics status line

use dioxus::prelude::*;

/// Always-visible status line showing the aggregate statistics as plain text.
#[component]
pub fn StatusBarView(missing: u32, double: u32) -> Element {
    rsx! {
        div { class: "status-bar", "missing: {missing}, double: {double}" }
    }
}
