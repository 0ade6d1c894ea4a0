//! Store types for UI state shared between pages and the music widget.

pub mod player;

pub use player::*;
