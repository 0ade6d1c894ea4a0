//! Shared view components and stores for the lume site.
//!
//! Components here are pure and props-based: data and callbacks in,
//! markup out. Page wiring and browser side effects live in lume-web.

pub mod components;
pub mod display_types;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use stores::*;
