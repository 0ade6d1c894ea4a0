//! Global playback store for the music widget.

use dioxus::prelude::*;
use lume_common::playlist::Track;
use lume_common::PlayerState;

/// Signal-backed store provided once via context at the app layout and
/// shared by every page for the application's lifetime.
///
/// All mutation goes through the named operations below, which delegate
/// to [`PlayerState`] so its invariants are enforced in one place.
#[derive(Clone, Copy)]
pub struct PlayerStore {
    state: Signal<PlayerState>,
    tracks: Signal<Vec<Track>>,
}

impl PlayerStore {
    /// Must be called from component scope (signals need a runtime).
    pub fn new() -> Self {
        Self {
            state: Signal::new(PlayerState::new()),
            tracks: Signal::new(Vec::new()),
        }
    }

    // Reads. `state`/`tracks` subscribe the caller; the `peek_`
    // variants are for event handlers that must not re-run on change.

    pub fn state(&self) -> PlayerState {
        *self.state.read()
    }

    pub fn peek_state(&self) -> PlayerState {
        *self.state.peek()
    }

    pub fn tracks(&self) -> Vec<Track> {
        self.tracks.read().clone()
    }

    pub fn track(&self, index: usize) -> Option<Track> {
        self.tracks.read().get(index).cloned()
    }

    pub fn peek_track(&self, index: usize) -> Option<Track> {
        self.tracks.peek().get(index).cloned()
    }

    pub fn current_track(&self) -> Option<Track> {
        let index = self.state.read().current_index();
        self.track(index)
    }

    // Named operations.

    /// Install the fetched playlist and mark loading complete.
    pub fn load_tracks(&mut self, tracks: Vec<Track>) {
        let count = tracks.len();
        self.tracks.set(tracks);
        let mut state = self.state.write();
        state.set_track_count(count);
        state.mark_loaded();
    }

    /// Loading finished with nothing to show (fetch or parse failure).
    pub fn mark_loaded(&mut self) {
        self.state.write().mark_loaded();
    }

    pub fn advance(&mut self) {
        self.state.write().advance();
    }

    pub fn retreat(&mut self) {
        self.state.write().retreat();
    }

    pub fn jump_to(&mut self, index: usize, autoplay: bool) {
        self.state.write().jump_to(index, autoplay);
    }

    pub fn toggle_play(&mut self) {
        self.state.write().toggle_play();
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.state.write().set_playing(playing);
    }

    pub fn toggle_minimize(&mut self) {
        self.state.write().toggle_minimize();
    }

    /// Consume the one-shot auto-play signal.
    pub fn take_autoplay(&mut self) -> bool {
        self.state.write().take_autoplay()
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}
