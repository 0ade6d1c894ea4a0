use crate::wasm_utils::sleep_ms;
use dioxus::prelude::*;

const ROTATE_INTERVAL_MS: u64 = 5000;

/// Header text that cycles through `lines` every five seconds.
#[component]
pub fn RotatingTagline(lines: Vec<String>) -> Element {
    let mut index = use_signal(|| 0usize);
    let count = lines.len();

    use_future(move || async move {
        if count < 2 {
            return;
        }
        loop {
            sleep_ms(ROTATE_INTERVAL_MS).await;
            let next = (*index.peek() + 1) % count;
            index.set(next);
        }
    });

    let current = lines.get(index()).cloned().unwrap_or_default();

    rsx! {
        p { class: "rotating-tagline text-lg text-gray-500", "{current}" }
    }
}
