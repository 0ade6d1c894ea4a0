//! Pure logic for the lume site's global music widget.
//!
//! No I/O and no UI here: the playlist model, the playback state
//! machine, the adapter reconciler, visual-mode derivation, and the
//! developer-mode keyboard chord. lume-web wires these to the browser.

pub mod chord;
pub mod player;
pub mod playlist;
pub mod reconcile;
pub mod visual_mode;

pub use chord::ChordTracker;
pub use player::PlayerState;
pub use playlist::{PlaylistDoc, PlaylistItem, Track};
pub use reconcile::{AdapterCommand, Reconciler};
pub use visual_mode::{derive_mode, ModeFlags, VisualMode};
