use crate::display_types::Project;
use dioxus::prelude::*;

#[component]
pub fn ProjectCardView(project: Project) -> Element {
    rsx! {
        div { class: "project-card bg-white rounded-lg shadow p-4",
            div { class: "flex items-center justify-between",
                div { class: "font-semibold", "{project.title}" }
                if let Some(status) = &project.status {
                    span { class: "text-xs text-gray-500 border border-gray-300 rounded px-2 py-0.5",
                        "{status}"
                    }
                }
            }
            p { class: "text-sm text-gray-600 mt-2", "{project.summary}" }
            if !project.members.is_empty() {
                div { class: "text-sm text-gray-400 mt-2",
                    { project.members.join(", ") }
                }
            }
        }
    }
}
