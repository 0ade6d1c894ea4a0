//! Bindings for the YouTube IFrame API.
//!
//! The API script loads asynchronously, so construction polls for the
//! `YT.Player` constructor (injecting the script tag first if nothing
//! has loaded it yet) and gives up after a bounded number of attempts
//! instead of polling forever.

use js_sys::{Array, Function, Object, Reflect};
use lume_ui::wasm_utils::sleep_ms;
use tracing::debug;
use wasm_bindgen::prelude::*;

const IFRAME_API_SRC: &str = "https://www.youtube.com/iframe_api";
const READY_POLL_MS: u64 = 100;
const READY_POLL_ATTEMPTS: u32 = 150;

// YT.PlayerState codes from the IFrame API.
const STATE_ENDED: f64 = 0.0;
const STATE_PLAYING: f64 = 1.0;
const STATE_PAUSED: f64 = 2.0;

/// Playback transitions reported by the embedded player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    Playing,
    Paused,
    Ended,
}

#[wasm_bindgen]
extern "C" {
    type JsPlayer;

    #[wasm_bindgen(method, catch, js_name = playVideo)]
    fn play_video(this: &JsPlayer) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = pauseVideo)]
    fn pause_video(this: &JsPlayer) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = loadVideoById)]
    fn load_video_by_id(this: &JsPlayer, video_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = cueVideoById)]
    fn cue_video_by_id(this: &JsPlayer, video_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &JsPlayer) -> Result<(), JsValue>;
}

/// Owned wrapper around one `YT.Player` instance. Keeps the
/// state-change closure alive for as long as the player exists; the
/// instance is constructed once and only ever redirected with
/// `load_video_by_id`.
pub struct YtPlayer {
    inner: JsPlayer,
    _on_state_change: Closure<dyn FnMut(JsValue)>,
}

impl YtPlayer {
    pub fn play_video(&self) {
        let _ = self.inner.play_video();
    }

    pub fn pause_video(&self) {
        let _ = self.inner.pause_video();
    }

    pub fn load_video_by_id(&self, video_id: &str) {
        let _ = self.inner.load_video_by_id(video_id);
    }

    pub fn cue_video_by_id(&self, video_id: &str) {
        let _ = self.inner.cue_video_by_id(video_id);
    }
}

impl Drop for YtPlayer {
    fn drop(&mut self) {
        let _ = self.inner.destroy();
    }
}

/// Construct the player on `container_id` cued to `video_id`,
/// delivering state changes to `on_event`. Waits for the IFrame API to
/// become available first.
pub async fn create_player(
    container_id: &str,
    video_id: &str,
    on_event: impl FnMut(PlayerEvent) + 'static,
) -> Result<YtPlayer, String> {
    inject_api_script();
    let ctor = wait_for_player_ctor().await?;

    let mut on_event = on_event;
    let on_state_change: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |event| {
        if let Some(player_event) = map_state_event(&event) {
            on_event(player_event);
        }
    }));

    let options = build_options(video_id, &on_state_change)?;
    let args = Array::of2(&JsValue::from_str(container_id), &options);
    let inner = Reflect::construct(&ctor, &args)
        .map_err(|_| "YT.Player construction failed".to_string())?
        .unchecked_into::<JsPlayer>();

    debug!("embedded player constructed for {video_id}");
    Ok(YtPlayer {
        inner,
        _on_state_change: on_state_change,
    })
}

/// Poll for `window.YT.Player` at 100ms intervals, bounded.
async fn wait_for_player_ctor() -> Result<Function, String> {
    for _ in 0..READY_POLL_ATTEMPTS {
        if let Some(ctor) = player_ctor() {
            return Ok(ctor);
        }
        sleep_ms(READY_POLL_MS).await;
    }
    Err("IFrame API not available after bounded polling".to_string())
}

fn player_ctor() -> Option<Function> {
    let window = web_sys::window()?;
    let yt = Reflect::get(&window, &JsValue::from_str("YT")).ok()?;
    if yt.is_undefined() || yt.is_null() {
        return None;
    }
    Reflect::get(&yt, &JsValue::from_str("Player"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Add the IFrame API script tag unless something already did.
fn inject_api_script() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if player_ctor().is_some() {
        return;
    }
    if document
        .query_selector(&format!("script[src=\"{IFRAME_API_SRC}\"]"))
        .ok()
        .flatten()
        .is_some()
    {
        return;
    }
    let Ok(script) = document.create_element("script") else {
        return;
    };
    let script: web_sys::HtmlScriptElement = script.unchecked_into();
    script.set_src(IFRAME_API_SRC);
    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
    }
}

fn build_options(
    video_id: &str,
    on_state_change: &Closure<dyn FnMut(JsValue)>,
) -> Result<JsValue, String> {
    let set = |target: &Object, key: &str, value: &JsValue| {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map_err(|_| "failed to build player options".to_string())
            .map(|_| ())
    };

    let player_vars = Object::new();
    set(&player_vars, "autoplay", &JsValue::from_f64(0.0))?;
    set(&player_vars, "controls", &JsValue::from_f64(1.0))?;

    let events = Object::new();
    set(&events, "onStateChange", on_state_change.as_ref())?;

    let options = Object::new();
    set(&options, "videoId", &JsValue::from_str(video_id))?;
    set(&options, "playerVars", &player_vars)?;
    set(&options, "events", &events)?;
    Ok(options.into())
}

fn map_state_event(event: &JsValue) -> Option<PlayerEvent> {
    let data = Reflect::get(event, &JsValue::from_str("data")).ok()?;
    let code = data.as_f64()?;
    if code == STATE_PLAYING {
        Some(PlayerEvent::Playing)
    } else if code == STATE_PAUSED {
        Some(PlayerEvent::Paused)
    } else if code == STATE_ENDED {
        Some(PlayerEvent::Ended)
    } else {
        // Buffering, cued and unstarted states need no reaction.
        None
    }
}
