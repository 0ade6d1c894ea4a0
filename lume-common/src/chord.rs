/// Detects the hidden developer-mode chord: `Ctrl` held together with
/// both `j` and `l`.
///
/// Edge-triggered: fires once when the chord completes and re-arms only
/// after one of the chord keys is released, so key repeat cannot toggle
/// twice.
#[derive(Clone, Debug, Default)]
pub struct ChordTracker {
    j_held: bool,
    l_held: bool,
    fired: bool,
}

impl ChordTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key-down event. Returns true when the chord completes.
    pub fn key_down(&mut self, key: &str, ctrl: bool) -> bool {
        match key {
            "j" | "J" => self.j_held = true,
            "l" | "L" => self.l_held = true,
            _ => {}
        }
        if ctrl && self.j_held && self.l_held && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    /// Feed a key-up event.
    pub fn key_up(&mut self, key: &str) {
        match key {
            "j" | "J" => self.j_held = false,
            "l" | "L" => self.l_held = false,
            _ => {}
        }
        if !(self.j_held && self.l_held) {
            self.fired = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_fires_on_completion() {
        let mut t = ChordTracker::new();
        assert!(!t.key_down("j", true));
        assert!(t.key_down("l", true));
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut t = ChordTracker::new();
        assert!(!t.key_down("l", true));
        assert!(t.key_down("j", true));
    }

    #[test]
    fn test_no_fire_without_ctrl() {
        let mut t = ChordTracker::new();
        assert!(!t.key_down("j", false));
        assert!(!t.key_down("l", false));
    }

    #[test]
    fn test_key_repeat_fires_once() {
        let mut t = ChordTracker::new();
        t.key_down("j", true);
        assert!(t.key_down("l", true));
        // Held keys auto-repeat key-down events.
        assert!(!t.key_down("l", true));
        assert!(!t.key_down("j", true));
    }

    #[test]
    fn test_rearms_after_release() {
        let mut t = ChordTracker::new();
        t.key_down("j", true);
        assert!(t.key_down("l", true));
        t.key_up("l");
        assert!(t.key_down("l", true));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut t = ChordTracker::new();
        t.key_down("j", true);
        assert!(!t.key_down("k", true));
        assert!(t.key_down("l", true));
    }
}
