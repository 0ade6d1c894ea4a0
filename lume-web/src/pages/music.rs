use crate::player::WebPlayerService;
use dioxus::prelude::*;
use lume_ui::stores::PlayerStore;
use lume_ui::PageHeaderView;

/// The dedicated playlist page. Lists the full queue with the current
/// track highlighted; clicking a row jumps playback there. The global
/// widget stays in compact form here, so this page is the only place
/// the whole playlist is visible without developer mode tricks.
#[component]
pub fn Music() -> Element {
    let store: PlayerStore = use_context();
    let mut service: Signal<WebPlayerService> = use_context();

    let state = store.state();
    let tracks = store.tracks();
    let loaded = state.is_loaded();

    rsx! {
        PageHeaderView { title: "Lab playlist", subtitle: Some("What the lab is listening to".to_string()) }
        if !loaded {
            div { class: "text-gray-400", "Loading..." }
        } else if tracks.is_empty() {
            div { class: "text-gray-400", "Nothing to play right now." }
        } else {
            ul { class: "space-y-1",
                for (index, track) in tracks.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: if index == state.current_index() { "playlist-row playlist-row-current bg-white rounded shadow p-3" } else { "playlist-row bg-white rounded shadow p-3" },
                        onclick: move |_| service.write().jump_to(index),
                        span { class: "font-medium", "{track.title}" }
                        span { class: "text-sm text-gray-500 ml-2", "{track.artist}" }
                        if index == state.current_index() && state.is_playing() {
                            span { class: "text-sm text-blue-600 ml-2", "▶" }
                        }
                    }
                }
            }
        }
    }
}
