//! Views for the global music widget. All pure and props-based; the
//! controller in lume-web decides which one renders.

mod compact;
mod full;
mod minimized;
mod queue_panel;

pub use compact::CompactPlayerView;
pub use full::FullPlayerView;
pub use minimized::MinimizedPlayerView;
pub use queue_panel::QueuePanelView;
