use crate::display_types::ResumeSection;
use dioxus::prelude::*;

/// Resume modal for a lab member. Backdrop click dismisses.
#[component]
pub fn ResumeModalView(
    member_name: String,
    sections: Vec<ResumeSection>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop fixed inset-0 flex items-center justify-center",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card bg-white rounded-lg shadow-xl p-6 max-w-lg w-full overflow-y-auto",
                // Keep clicks inside the card from reaching the backdrop.
                onclick: move |event| event.stop_propagation(),
                div { class: "flex items-center justify-between mb-4",
                    h2 { class: "text-xl font-semibold", "{member_name}" }
                    button {
                        class: "player-chrome-btn",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                for section in sections.iter() {
                    div { class: "mb-4",
                        h3 { class: "font-semibold text-gray-700 mb-1", "{section.heading}" }
                        ul { class: "list-disc pl-5 text-sm text-gray-600",
                            for entry in section.entries.iter() {
                                li { "{entry}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
