use crate::api;
use crate::Route;
use dioxus::prelude::*;
use lume_ui::PageHeaderView;

#[component]
pub fn Archives() -> Element {
    let archives = use_resource(api::fetch_archives);

    rsx! {
        PageHeaderView { title: "Archives", subtitle: Some("News and past events".to_string()) }
        div { class: "mb-6",
            Link { class: "text-blue-600 underline", to: Route::Music {}, "Lab playlist" }
        }
        match &*archives.read() {
            Some(Ok(items)) => rsx! {
                ul { class: "space-y-4",
                    for (index, item) in items.iter().enumerate() {
                        li { key: "{index}", class: "bg-white rounded-lg shadow p-4",
                            div { class: "text-sm text-gray-400", "{item.date}" }
                            div { class: "font-semibold", "{item.title}" }
                            if !item.body.is_empty() {
                                p { class: "text-sm text-gray-600 mt-1", "{item.body}" }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                div { class: "text-gray-400", "Could not load archives: {err}" }
            },
            None => rsx! {
                div { class: "text-gray-400", "Loading..." }
            },
        }
    }
}
