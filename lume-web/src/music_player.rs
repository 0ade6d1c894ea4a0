//! The global music widget controller.
//!
//! Mounted once in the app layout and kept alive across route changes.
//! Owns the widget-local flags (developer mode, dismissed, compact,
//! queue panel), watches the route to gate visibility and force-pause
//! on exit from the media page family, and forwards every user action
//! to the playback service.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use lume_common::{derive_mode, ChordTracker, ModeFlags, VisualMode};
use lume_ui::stores::PlayerStore;
use lume_ui::wasm_utils::DocumentEventListener;
use lume_ui::{CompactPlayerView, FullPlayerView, MinimizedPlayerView, QueuePanelView};
use tracing::info;
use wasm_bindgen::JsCast;

use crate::player::{ensure_adapter, load_playlist, WebPlayerService, PLAYER_CONTAINER_ID};
use crate::Route;

type ChordListeners = (DocumentEventListener, DocumentEventListener);

#[component]
pub fn GlobalMusicPlayer() -> Element {
    let mut store: PlayerStore = use_context();
    let mut service: Signal<WebPlayerService> = use_context();
    let route = use_route::<Route>();

    // Widget-local flags; the only way in is the keyboard chord.
    let mut dev_mode = use_signal(|| false);
    let mut dismissed = use_signal(|| false);
    let mut compact = use_signal(|| false);
    let mut queue_open = use_signal(|| false);
    let mut chord_listeners: Signal<Option<ChordListeners>> = use_signal(|| None);

    // One playlist fetch per process lifetime, then the one-time
    // adapter construction once a first track id exists.
    use_future(move || async move {
        load_playlist(service, store).await;
        ensure_adapter(service);
    });

    // Developer-mode chord: Ctrl held with both j and l.
    use_effect(move || {
        if chord_listeners.peek().is_some() {
            return;
        }
        let tracker = Rc::new(RefCell::new(ChordTracker::new()));
        let down = {
            let tracker = Rc::clone(&tracker);
            DocumentEventListener::new("keydown", move |event| {
                let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                if tracker
                    .borrow_mut()
                    .key_down(&event.key(), event.ctrl_key())
                {
                    let enabled = !*dev_mode.peek();
                    dev_mode.set(enabled);
                    dismissed.set(false);
                    info!("developer mode {}", if enabled { "on" } else { "off" });
                }
            })
        };
        let up = {
            let tracker = Rc::clone(&tracker);
            DocumentEventListener::new("keyup", move |event| {
                if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                    tracker.borrow_mut().key_up(&event.key());
                }
            })
        };
        if let (Some(down), Some(up)) = (down, up) {
            chord_listeners.set(Some((down, up)));
        }
    });

    // Playback must not continue audibly outside the media pages.
    let in_family = route.in_media_family();
    use_effect(use_reactive!(|in_family| {
        if !in_family {
            service.write().pause_for_navigation();
        }
    }));

    let state = store.state();
    let track = store.current_track();
    let mode = derive_mode(&ModeFlags {
        dev_mode: dev_mode(),
        dismissed: dismissed(),
        minimized: state.is_minimized(),
        compact: compact(),
        track_count: state.track_count(),
        on_media_routes: route.in_media_family(),
        on_playlist_page: route.is_playlist_page(),
    });

    rsx! {
        div { class: "music-widget",
            // The embed element is rendered unconditionally and with
            // static attributes: the IFrame API replaces it with an
            // iframe, so the wrapper carries the mode-dependent class.
            div {
                class: if mode == VisualMode::Full { "player-embed-shell" } else { "player-embed-shell player-embed-hidden" },
                div { id: PLAYER_CONTAINER_ID }
            }
            {
                match mode {
                    VisualMode::Hidden => rsx! {},
                    VisualMode::Minimized => rsx! {
                        MinimizedPlayerView {
                            is_playing: state.is_playing(),
                            on_restore: move |_| store.toggle_minimize(),
                        }
                    },
                    VisualMode::Compact => rsx! {
                        CompactPlayerView {
                            track,
                            is_playing: state.is_playing(),
                            show_home_shortcut: !route.in_media_family(),
                            on_toggle_play: move |_| service.write().toggle_play(),
                            on_next: move |_| service.write().next(),
                            on_expand: move |_| compact.set(false),
                            on_minimize: move |_| store.toggle_minimize(),
                            on_home: move |_| {
                                navigator().push(Route::Home {});
                            },
                        }
                    },
                    VisualMode::Full => rsx! {
                        FullPlayerView {
                            track,
                            track_number: state.current_index(),
                            track_count: state.track_count(),
                            is_playing: state.is_playing(),
                            queue_open: queue_open(),
                            on_previous: move |_| service.write().previous(),
                            on_toggle_play: move |_| service.write().toggle_play(),
                            on_next: move |_| service.write().next(),
                            on_toggle_queue: move |_| queue_open.toggle(),
                            on_minimize: move |_| store.toggle_minimize(),
                            on_compact: move |_| compact.set(true),
                            on_hide: move |_| {
                                queue_open.set(false);
                                dismissed.set(true);
                            },
                        }
                        if queue_open() {
                            QueuePanelView {
                                tracks: store.tracks(),
                                current_index: state.current_index(),
                                on_select: move |index| service.write().jump_to(index),
                                on_close: move |_| queue_open.set(false),
                            }
                        }
                    },
                }
            }
        }
    }
}
