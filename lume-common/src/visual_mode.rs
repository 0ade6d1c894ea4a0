/// The widget's display form, derived fresh each render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualMode {
    Hidden,
    Minimized,
    Compact,
    Full,
}

/// Inputs to the mode derivation. `dev_mode`, `dismissed` and `compact`
/// are widget-local; the rest come from the store and the router.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeFlags {
    pub dev_mode: bool,
    pub dismissed: bool,
    pub minimized: bool,
    pub compact: bool,
    pub track_count: usize,
    pub on_media_routes: bool,
    pub on_playlist_page: bool,
}

/// Single decision point for the widget's visual mode.
///
/// `Full` requires everything at once: developer mode on, not
/// dismissed, not minimized, not compact, a non-empty playlist, and a
/// route inside the media family that is not the playlist page itself.
/// Outside the family the widget degrades to `Compact`, never `Full`.
pub fn derive_mode(flags: &ModeFlags) -> VisualMode {
    if !flags.dev_mode || flags.dismissed || flags.track_count == 0 {
        return VisualMode::Hidden;
    }
    if flags.minimized {
        return VisualMode::Minimized;
    }
    if flags.compact || !flags.on_media_routes || flags.on_playlist_page {
        return VisualMode::Compact;
    }
    VisualMode::Full
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_flags() -> ModeFlags {
        ModeFlags {
            dev_mode: true,
            dismissed: false,
            minimized: false,
            compact: false,
            track_count: 3,
            on_media_routes: true,
            on_playlist_page: false,
        }
    }

    #[test]
    fn test_full_when_everything_lines_up() {
        assert_eq!(derive_mode(&full_flags()), VisualMode::Full);
    }

    #[test]
    fn test_never_full_without_dev_mode() {
        let mut flags = full_flags();
        flags.dev_mode = false;
        assert_eq!(derive_mode(&flags), VisualMode::Hidden);

        // Regardless of route or playlist size.
        flags.track_count = 100;
        flags.on_media_routes = false;
        assert_eq!(derive_mode(&flags), VisualMode::Hidden);
    }

    #[test]
    fn test_never_full_outside_media_routes() {
        let mut flags = full_flags();
        flags.on_media_routes = false;
        assert_eq!(derive_mode(&flags), VisualMode::Compact);
    }

    #[test]
    fn test_never_full_on_playlist_page() {
        let mut flags = full_flags();
        flags.on_playlist_page = true;
        assert_eq!(derive_mode(&flags), VisualMode::Compact);
    }

    #[test]
    fn test_empty_playlist_hides() {
        let mut flags = full_flags();
        flags.track_count = 0;
        assert_eq!(derive_mode(&flags), VisualMode::Hidden);
    }

    #[test]
    fn test_dismissed_suppresses_everything() {
        let mut flags = full_flags();
        flags.dismissed = true;
        assert_eq!(derive_mode(&flags), VisualMode::Hidden);

        flags.minimized = true;
        assert_eq!(derive_mode(&flags), VisualMode::Hidden);
    }

    #[test]
    fn test_minimized_beats_compact() {
        let mut flags = full_flags();
        flags.minimized = true;
        flags.compact = true;
        assert_eq!(derive_mode(&flags), VisualMode::Minimized);
    }

    #[test]
    fn test_compact_toggle() {
        let mut flags = full_flags();
        flags.compact = true;
        assert_eq!(derive_mode(&flags), VisualMode::Compact);
    }
}
