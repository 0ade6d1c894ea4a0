use dioxus::prelude::*;

/// Minimized pill; clicking restores the previous view.
#[component]
pub fn MinimizedPlayerView(is_playing: bool, on_restore: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "player-card player-minimized bg-gray-900 text-white rounded-full shadow-lg px-3 py-2",
            title: "Show player",
            onclick: move |_| on_restore.call(()),
            if is_playing { "♪" } else { "♪ ⏸" }
        }
    }
}
