//! A single album slot

use crate::components::ChromelessButton;
use crate::display_types::{slot_label, SlotIndicator};
use dioxus::prelude::*;

/// One slot in the album grid, rendered purely from its copy count.
///
/// Left click reports an increment, right click a decrement. The webview's
/// native context menu is suppressed so right click only mutates the count.
#[component]
pub fn SlotButtonView(
    id: u32,
    count: u32,
    onincrement: EventHandler<u32>,
    ondecrement: EventHandler<u32>,
) -> Element {
    let indicator_class = match SlotIndicator::for_count(count) {
        SlotIndicator::Empty => "slot--empty",
        SlotIndicator::Complete => "slot--complete",
        SlotIndicator::Duplicate => "slot--duplicate",
    };

    rsx! {
        ChromelessButton {
            class: Some(format!("slot {indicator_class}")),
            title: Some(format!("slot {id}")),
            onclick: move |_| onincrement.call(id),
            oncontextmenu: move |e: MouseEvent| {
                e.prevent_default();
                ondecrement.call(id);
            },
            "{slot_label(id, count)}"
        }
    }
}
