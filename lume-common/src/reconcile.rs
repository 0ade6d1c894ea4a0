/// Command for the embedded-player adapter. Produced by [`Reconciler`],
/// executed by the web service against the real player instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterCommand {
    /// Bind a new video. `then_play` means issue a (deferred) play once
    /// the load has taken effect.
    Load { video_id: String, then_play: bool },
    Play,
    Pause,
}

/// Tracks what the adapter was last told, so that state changes
/// translate into the minimal command sequence.
///
/// `bound_video_id` is the single source of truth for what is currently
/// loaded: a re-render or repeated call with an unchanged index never
/// re-issues a load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciler {
    bound_video_id: Option<String>,
    adapter_playing: bool,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the id the adapter was constructed with (cued, not
    /// playing).
    pub fn bind_initial(&mut self, video_id: &str) {
        self.bound_video_id = Some(video_id.to_string());
        self.adapter_playing = false;
    }

    pub fn bound_video_id(&self) -> Option<&str> {
        self.bound_video_id.as_deref()
    }

    /// The playback state reported by the adapter itself (its own UI
    /// can start or stop playback without going through ours).
    pub fn note_playback(&mut self, playing: bool) {
        self.adapter_playing = playing;
    }

    /// Compare the requested `(video_id, playing, autoplay)` against
    /// what the adapter last saw and emit the commands that close the
    /// gap.
    pub fn reconcile(
        &mut self,
        video_id: Option<&str>,
        playing: bool,
        autoplay: bool,
    ) -> Vec<AdapterCommand> {
        let mut commands = Vec::new();
        let Some(id) = video_id else {
            return commands;
        };

        if self.bound_video_id.as_deref() != Some(id) {
            let then_play = playing || autoplay;
            self.bound_video_id = Some(id.to_string());
            self.adapter_playing = then_play;
            commands.push(AdapterCommand::Load {
                video_id: id.to_string(),
                then_play,
            });
            return commands;
        }

        if playing != self.adapter_playing {
            self.adapter_playing = playing;
            commands.push(if playing {
                AdapterCommand::Play
            } else {
                AdapterCommand::Pause
            });
        } else if autoplay && !self.adapter_playing {
            // Queue-jump onto the already-bound track still starts it.
            self.adapter_playing = true;
            commands.push(AdapterCommand::Play);
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_once_per_distinct_id() {
        let mut r = Reconciler::new();
        let first = r.reconcile(Some("a"), false, false);
        assert_eq!(
            first,
            vec![AdapterCommand::Load {
                video_id: "a".to_string(),
                then_play: false
            }]
        );

        // Repeated calls with the same id (re-renders) are silent.
        assert!(r.reconcile(Some("a"), false, false).is_empty());
        assert!(r.reconcile(Some("a"), false, false).is_empty());

        let second = r.reconcile(Some("b"), false, false);
        assert_eq!(
            second,
            vec![AdapterCommand::Load {
                video_id: "b".to_string(),
                then_play: false
            }]
        );
    }

    #[test]
    fn test_autoplay_requests_play_with_load() {
        let mut r = Reconciler::new();
        r.bind_initial("a");
        let commands = r.reconcile(Some("b"), false, true);
        assert_eq!(
            commands,
            vec![AdapterCommand::Load {
                video_id: "b".to_string(),
                then_play: true
            }]
        );

        // The one-shot was consumed upstream; the follow-up pass with
        // playing=true must not emit a second play.
        assert!(r.reconcile(Some("b"), true, false).is_empty());
    }

    #[test]
    fn test_load_carries_play_when_already_playing() {
        let mut r = Reconciler::new();
        r.bind_initial("a");
        r.note_playback(true);
        let commands = r.reconcile(Some("b"), true, false);
        assert_eq!(
            commands,
            vec![AdapterCommand::Load {
                video_id: "b".to_string(),
                then_play: true
            }]
        );
    }

    #[test]
    fn test_play_pause_deltas() {
        let mut r = Reconciler::new();
        r.bind_initial("a");

        assert_eq!(r.reconcile(Some("a"), true, false), vec![AdapterCommand::Play]);
        assert!(r.reconcile(Some("a"), true, false).is_empty());
        assert_eq!(
            r.reconcile(Some("a"), false, false),
            vec![AdapterCommand::Pause]
        );
        assert!(r.reconcile(Some("a"), false, false).is_empty());
    }

    #[test]
    fn test_route_exit_pause_reaches_adapter() {
        let mut r = Reconciler::new();
        r.bind_initial("a");
        r.note_playback(true);
        // Navigation away flips the requested state to paused.
        assert_eq!(
            r.reconcile(Some("a"), false, false),
            vec![AdapterCommand::Pause]
        );
    }

    #[test]
    fn test_adapter_side_playback_needs_no_command() {
        let mut r = Reconciler::new();
        r.bind_initial("a");
        // User hit play inside the embed; the event reporter noted it.
        r.note_playback(true);
        assert!(r.reconcile(Some("a"), true, false).is_empty());
    }

    #[test]
    fn test_jump_to_current_track_still_plays() {
        let mut r = Reconciler::new();
        r.bind_initial("a");
        assert_eq!(
            r.reconcile(Some("a"), false, true),
            vec![AdapterCommand::Play]
        );
    }

    #[test]
    fn test_no_track_no_commands() {
        let mut r = Reconciler::new();
        assert!(r.reconcile(None, true, true).is_empty());
    }
}
