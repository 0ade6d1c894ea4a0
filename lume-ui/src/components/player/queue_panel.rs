use crate::wasm_utils::scroll_into_view;
use dioxus::prelude::*;
use lume_common::playlist::Track;

fn entry_element_id(index: usize) -> String {
    format!("queue-entry-{index}")
}

/// Overlay listing every track in the playlist. Clicking an entry jumps
/// playback there; clicking the backdrop closes the panel. The
/// currently-playing entry is kept scrolled into view.
#[component]
pub fn QueuePanelView(
    tracks: Vec<Track>,
    current_index: usize,
    on_select: EventHandler<usize>,
    on_close: EventHandler<()>,
) -> Element {
    use_effect(use_reactive!(|current_index| {
        scroll_into_view(&entry_element_id(current_index));
    }));

    rsx! {
        div {
            class: "queue-backdrop fixed inset-0",
            onclick: move |_| on_close.call(()),
        }
        div { class: "queue-panel bg-gray-800 text-white rounded-lg shadow-xl overflow-y-auto",
            for (index, track) in tracks.iter().enumerate() {
                div {
                    key: "{index}",
                    id: entry_element_id(index),
                    class: if index == current_index { "queue-entry queue-entry-current" } else { "queue-entry" },
                    onclick: move |_| on_select.call(index),
                    span { class: "queue-entry-title truncate", "{track.title}" }
                    span { class: "queue-entry-artist text-sm text-gray-400 truncate",
                        "{track.artist}"
                    }
                }
            }
        }
    }
}
