//! Web playback service: glue between the playback store and the
//! embedded YouTube player.
//!
//! Every user action and adapter event funnels through a service
//! method that mutates the store and then runs one reconcile pass, so
//! the adapter only ever sees the minimal command sequence. Renders
//! never talk to the adapter.

use std::rc::Rc;

use dioxus::prelude::*;
use lume_common::{AdapterCommand, Reconciler};
use lume_ui::stores::PlayerStore;
use tracing::{info, warn};

use crate::youtube::{PlayerEvent, YtPlayer};

/// Fixed element id the singleton player instance binds to.
pub const PLAYER_CONTAINER_ID: &str = "lume-player-embed";

/// Delay between redirecting the adapter to a new video and asking it
/// to play, so the load can take effect first.
#[cfg(target_arch = "wasm32")]
const LOAD_SETTLE_MS: u64 = 100;

pub struct WebPlayerService {
    store: PlayerStore,
    reconciler: Reconciler,
    adapter: Option<Rc<YtPlayer>>,
    adapter_requested: bool,
    adapter_unavailable: bool,
}

impl WebPlayerService {
    pub fn new(store: PlayerStore) -> Self {
        Self {
            store,
            reconciler: Reconciler::new(),
            adapter: None,
            adapter_requested: false,
            adapter_unavailable: false,
        }
    }

    /// Install the fetched playlist.
    pub fn install_tracks(&mut self, tracks: Vec<lume_common::playlist::Track>) {
        info!("playlist loaded with {} tracks", tracks.len());
        self.store.load_tracks(tracks);
    }

    /// Loading failed; mark loaded anyway so nothing waits forever.
    pub fn mark_loaded_empty(&mut self) {
        self.store.mark_loaded();
    }

    /// One adapter per process lifetime: hands out the first video id
    /// exactly once, when a track is available to bind.
    pub fn begin_adapter_request(&mut self) -> Option<String> {
        if self.adapter_requested || self.adapter_unavailable {
            return None;
        }
        let state = self.store.peek_state();
        let first = self.store.peek_track(state.current_index())?;
        self.adapter_requested = true;
        Some(first.video_id)
    }

    /// Adopt the constructed player. A sync pass follows immediately to
    /// pick up anything the user did while construction was pending.
    pub fn adopt_adapter(&mut self, player: YtPlayer, video_id: &str) {
        self.reconciler.bind_initial(video_id);
        self.adapter = Some(Rc::new(player));
        self.sync();
    }

    /// Readiness polling timed out; stay inert rather than retry.
    /// `begin_adapter_request` refuses further attempts from here on.
    pub fn mark_adapter_unavailable(&mut self) {
        self.adapter_unavailable = true;
    }

    // User actions.

    pub fn toggle_play(&mut self) {
        self.store.toggle_play();
        self.sync();
    }

    pub fn next(&mut self) {
        self.store.advance();
        self.sync();
    }

    pub fn previous(&mut self) {
        self.store.retreat();
        self.sync();
    }

    /// Queue-panel click: jump and auto-play.
    pub fn jump_to(&mut self, index: usize) {
        self.store.jump_to(index, true);
        self.sync();
    }

    /// Leaving the media page family must not leave audio running.
    pub fn pause_for_navigation(&mut self) {
        if self.store.peek_state().is_playing() {
            info!("pausing playback on route exit");
            self.store.set_playing(false);
            self.sync();
        }
    }

    // Adapter feedback. Covers playback toggled from inside the embed's
    // own UI as well as our issued commands taking effect.

    pub fn on_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Playing => {
                self.reconciler.note_playback(true);
                self.store.set_playing(true);
            }
            PlayerEvent::Paused => {
                self.reconciler.note_playback(false);
                self.store.set_playing(false);
            }
            PlayerEvent::Ended => {
                // Same path as pressing next.
                self.store.advance();
            }
        }
        self.sync();
    }

    /// One reconcile pass: compare requested state against what the
    /// adapter last saw and execute the difference. Skipped entirely
    /// until the adapter exists; `adopt_adapter` re-runs it.
    fn sync(&mut self) {
        if self.adapter.is_none() {
            return;
        }
        let autoplay = self.store.take_autoplay();
        let state = self.store.peek_state();
        let current = self.store.peek_track(state.current_index());
        let commands = self.reconciler.reconcile(
            current.as_ref().map(|t| t.video_id.as_str()),
            state.is_playing(),
            autoplay,
        );
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: AdapterCommand) {
        let Some(player) = self.adapter.as_ref() else {
            return;
        };
        match command {
            AdapterCommand::Load {
                video_id,
                then_play,
            } => {
                player.load_video_by_id(&video_id);
                if then_play {
                    // Requested state is "playing" from here on; the
                    // adapter's own event confirms it later.
                    self.store.set_playing(true);
                    // Runs from raw browser callbacks too, so spawn on
                    // the wasm executor rather than the UI runtime.
                    #[cfg(target_arch = "wasm32")]
                    {
                        let player = Rc::clone(player);
                        wasm_bindgen_futures::spawn_local(async move {
                            lume_ui::wasm_utils::sleep_ms(LOAD_SETTLE_MS).await;
                            player.play_video();
                        });
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    player.play_video();
                }
            }
            AdapterCommand::Play => player.play_video(),
            AdapterCommand::Pause => player.pause_video(),
        }
    }
}

/// Fetch the playlist document once and hand the result to the service.
/// Failures are logged and leave the playlist empty for the session.
pub async fn load_playlist(mut service: Signal<WebPlayerService>, store: PlayerStore) {
    if store.peek_state().is_loaded() {
        return;
    }
    match crate::api::fetch_playlist().await {
        Ok(doc) => {
            let wants_shuffle = doc.shuffle;
            let mut tracks = lume_common::playlist::tracks_from_doc(doc);
            if wants_shuffle {
                lume_common::playlist::shuffle(&mut tracks);
            }
            service.write().install_tracks(tracks);
        }
        Err(err) => {
            warn!("playlist load failed: {err}");
            service.write().mark_loaded_empty();
        }
    }
}

/// Kick off the one-time adapter construction once a first track id is
/// known. Safe to call repeatedly; only the first call with a playlist
/// does anything.
pub fn ensure_adapter(mut service: Signal<WebPlayerService>) {
    let Some(video_id) = service.write().begin_adapter_request() else {
        return;
    };
    spawn(async move {
        let events = move |event: PlayerEvent| {
            service.write().on_player_event(event);
        };
        match crate::youtube::create_player(PLAYER_CONTAINER_ID, &video_id, events).await {
            Ok(player) => service.write().adopt_adapter(player, &video_id),
            Err(err) => {
                warn!("embedded player unavailable: {err}");
                service.write().mark_adapter_unavailable();
            }
        }
    });
}
