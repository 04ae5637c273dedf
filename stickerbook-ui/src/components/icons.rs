//! Icon components using the Lucide icon set (https://lucide.dev)
//!
//! Icons use stroke="currentColor" so they inherit the surrounding text color.

use dioxus::prelude::*;

/// X (close) icon
#[component]
pub fn XIcon(#[props(default = "icon")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
