//! The 21x21 slot grid

use crate::components::SlotButtonView;
use dioxus::prelude::*;
use stickerbook_core::SLOT_COUNT;

/// The full album grid, row-major: slot id = row * 21 + col + 1.
///
/// One handler pair serves every slot, parameterized by slot id; slots carry
/// no per-widget callbacks of their own.
#[component]
pub fn AlbumGridView(
    /// Counts in slot order, so `counts[id - 1]` belongs to slot `id`.
    counts: Vec<u32>,
    onincrement: EventHandler<u32>,
    ondecrement: EventHandler<u32>,
) -> Element {
    rsx! {
        div { class: "album-grid",
            for id in 1..=SLOT_COUNT {
                SlotButtonView {
                    key: "{id}",
                    id,
                    count: counts.get(id as usize - 1).copied().unwrap_or(0),
                    onincrement,
                    ondecrement,
                }
            }
        }
    }
}
