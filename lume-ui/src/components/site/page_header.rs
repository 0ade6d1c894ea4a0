use dioxus::prelude::*;

#[component]
pub fn PageHeaderView(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "page-header mb-6",
            h1 { class: "text-3xl font-bold", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "text-gray-500 mt-1", "{subtitle}" }
            }
        }
    }
}
