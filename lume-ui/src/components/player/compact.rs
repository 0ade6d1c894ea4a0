use dioxus::prelude::*;
use lume_common::playlist::Track;

/// One-line player bar used on pages where the full card may not
/// render. `show_home_shortcut` adds a jump back to the home page.
#[component]
pub fn CompactPlayerView(
    track: Option<Track>,
    is_playing: bool,
    show_home_shortcut: bool,
    on_toggle_play: EventHandler<()>,
    on_next: EventHandler<()>,
    on_expand: EventHandler<()>,
    on_minimize: EventHandler<()>,
    on_home: EventHandler<()>,
) -> Element {
    let label = match &track {
        Some(t) => format!("{} · {}", t.artist, t.title),
        None => String::new(),
    };

    rsx! {
        div { class: "player-card player-compact bg-gray-900 text-white rounded-full shadow-lg px-3 py-2 flex items-center gap-2",
            button {
                class: "player-control-btn",
                onclick: move |_| on_toggle_play.call(()),
                if is_playing { "⏸" } else { "▶" }
            }
            button {
                class: "player-control-btn",
                onclick: move |_| on_next.call(()),
                "⏭"
            }
            span {
                class: "player-compact-label text-sm truncate",
                onclick: move |_| on_expand.call(()),
                "{label}"
            }
            if show_home_shortcut {
                button {
                    class: "player-chrome-btn",
                    title: "Home",
                    onclick: move |_| on_home.call(()),
                    "⌂"
                }
            }
            button {
                class: "player-chrome-btn",
                title: "Minimize",
                onclick: move |_| on_minimize.call(()),
                "–"
            }
        }
    }
}
