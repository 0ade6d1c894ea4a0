use dioxus::prelude::*;
use lume_common::playlist::Track;

/// Full player view (pure, props-based).
/// All callbacks are required - pass noops if not needed.
#[component]
pub fn FullPlayerView(
    track: Option<Track>,
    track_number: usize,
    track_count: usize,
    is_playing: bool,
    queue_open: bool,
    on_previous: EventHandler<()>,
    on_toggle_play: EventHandler<()>,
    on_next: EventHandler<()>,
    on_toggle_queue: EventHandler<()>,
    on_minimize: EventHandler<()>,
    on_compact: EventHandler<()>,
    on_hide: EventHandler<()>,
) -> Element {
    let (title, artist) = match &track {
        Some(t) => (t.title.clone(), t.artist.clone()),
        None => (String::new(), String::new()),
    };

    rsx! {
        div { class: "player-card player-full bg-gray-900 text-white rounded-lg shadow-xl p-4",
            div { class: "flex items-center justify-between mb-2",
                span { class: "text-xs text-gray-400",
                    "{track_number + 1} / {track_count}"
                }
                div { class: "flex items-center gap-1",
                    button {
                        class: "player-chrome-btn",
                        title: "Compact",
                        onclick: move |_| on_compact.call(()),
                        "▫"
                    }
                    button {
                        class: "player-chrome-btn",
                        title: "Minimize",
                        onclick: move |_| on_minimize.call(()),
                        "–"
                    }
                    button {
                        class: "player-chrome-btn",
                        title: "Hide",
                        onclick: move |_| on_hide.call(()),
                        "✕"
                    }
                }
            }

            div { class: "mb-3",
                div { class: "font-semibold truncate", "{title}" }
                div { class: "text-sm text-gray-400 truncate", "{artist}" }
            }

            div { class: "flex items-center gap-2",
                button {
                    class: "player-control-btn",
                    onclick: move |_| on_previous.call(()),
                    "⏮"
                }
                button {
                    class: "player-control-btn player-control-main",
                    onclick: move |_| on_toggle_play.call(()),
                    if is_playing { "⏸" } else { "▶" }
                }
                button {
                    class: "player-control-btn",
                    onclick: move |_| on_next.call(()),
                    "⏭"
                }
                button {
                    class: if queue_open { "player-control-btn player-control-active" } else { "player-control-btn" },
                    title: "Queue",
                    onclick: move |_| on_toggle_queue.call(()),
                    "☰"
                }
            }
        }
    }
}
