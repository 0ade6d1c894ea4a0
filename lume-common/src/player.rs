/// Playback state for the global music widget.
///
/// Fields are private; the stores and the widget controller mutate it
/// only through the named operations so the index and `loaded`
/// invariants hold at this boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    track_count: usize,
    current_index: usize,
    playing: bool,
    minimized: bool,
    loaded: bool,
    autoplay_pending: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track_count(&self) -> usize {
        self.track_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn autoplay_pending(&self) -> bool {
        self.autoplay_pending
    }

    /// Record the playlist length once loading finishes.
    pub fn set_track_count(&mut self, count: usize) {
        self.track_count = count;
        if self.current_index >= count {
            self.current_index = 0;
        }
    }

    /// Monotonic: once loaded, stays loaded for the process lifetime.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    /// Advance circularly and request auto-play for the new track.
    pub fn advance(&mut self) {
        if self.track_count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % self.track_count;
        self.autoplay_pending = true;
    }

    /// Step back circularly and request auto-play for the new track.
    pub fn retreat(&mut self) {
        if self.track_count == 0 {
            return;
        }
        self.current_index = (self.current_index + self.track_count - 1) % self.track_count;
        self.autoplay_pending = true;
    }

    /// Jump to a queue entry. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize, autoplay: bool) {
        if index >= self.track_count {
            return;
        }
        self.current_index = index;
        if autoplay {
            self.autoplay_pending = true;
        }
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle_minimize(&mut self) {
        self.minimized = !self.minimized;
    }

    /// Consume the one-shot auto-play signal.
    pub fn take_autoplay(&mut self) -> bool {
        std::mem::take(&mut self.autoplay_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(count: usize) -> PlayerState {
        let mut state = PlayerState::new();
        state.set_track_count(count);
        state.mark_loaded();
        state
    }

    #[test]
    fn test_advance_wraps_to_zero() {
        let mut state = loaded(3);
        state.jump_to(2, false);
        state.advance();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut state = loaded(3);
        state.retreat();
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_full_cycle_forward_and_back() {
        let mut state = loaded(4);
        for _ in 0..4 {
            state.advance();
        }
        assert_eq!(state.current_index(), 0);
        for _ in 0..4 {
            state.retreat();
        }
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_advance_on_empty_is_noop() {
        let mut state = PlayerState::new();
        state.advance();
        state.retreat();
        assert_eq!(state.current_index(), 0);
        assert!(!state.take_autoplay());
    }

    #[test]
    fn test_autoplay_is_one_shot() {
        let mut state = loaded(2);
        state.advance();
        assert!(state.take_autoplay());
        assert!(!state.take_autoplay());
    }

    #[test]
    fn test_jump_to_with_autoplay() {
        let mut state = loaded(5);
        state.jump_to(3, true);
        assert_eq!(state.current_index(), 3);
        assert!(state.take_autoplay());
    }

    #[test]
    fn test_jump_to_without_autoplay() {
        let mut state = loaded(5);
        state.jump_to(3, false);
        assert_eq!(state.current_index(), 3);
        assert!(!state.take_autoplay());
    }

    #[test]
    fn test_jump_to_out_of_range_ignored() {
        let mut state = loaded(2);
        state.jump_to(7, true);
        assert_eq!(state.current_index(), 0);
        assert!(!state.take_autoplay());
    }

    #[test]
    fn test_track_count_shrink_resets_index() {
        let mut state = loaded(5);
        state.jump_to(4, false);
        state.set_track_count(3);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_loaded_is_monotonic() {
        let mut state = PlayerState::new();
        assert!(!state.is_loaded());
        state.mark_loaded();
        state.set_track_count(0);
        assert!(state.is_loaded());
    }

    #[test]
    fn test_toggle_play() {
        let mut state = loaded(1);
        state.toggle_play();
        assert!(state.is_playing());
        state.toggle_play();
        assert!(!state.is_playing());
    }
}
