//! Browser interop helpers.
//!
//! JavaScript event listeners attached from Rust need their `Closure`
//! kept alive for as long as the listener is registered. Rather than
//! leaking with `closure.forget()`, [`DocumentEventListener`] ties the
//! listener lifetime to Rust ownership: dropping it detaches the
//! listener and frees the closure. Store one in a component hook (or a
//! `Signal<Option<...>>`) and it lives exactly as long as the widget.

use tracing::warn;
use wasm_bindgen::prelude::*;

/// A document-level event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen::JsValue)>,
}

impl DocumentEventListener {
    /// Attach a listener for `event_name` on the current document.
    /// Returns None when there is no document (non-browser target).
    pub fn new(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen::JsValue) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback: Closure<dyn FnMut(wasm_bindgen::JsValue)> = Closure::wrap(Box::new(callback));

        if let Err(err) = document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            warn!("failed to attach {event_name} listener: {err:?}");
            return None;
        }

        Some(Self {
            document,
            event_name,
            callback,
        })
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Smooth-scroll the element with `id` into view, if it exists.
pub fn scroll_into_view(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Nearest);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("no element with id {id} to scroll to"),
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
