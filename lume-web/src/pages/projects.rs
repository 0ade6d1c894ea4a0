use crate::api;
use dioxus::prelude::*;
use lume_ui::{PageHeaderView, ProjectCardView};

#[component]
pub fn Projects() -> Element {
    let projects = use_resource(api::fetch_projects);

    rsx! {
        PageHeaderView { title: "Projects" }
        match &*projects.read() {
            Some(Ok(projects)) => rsx! {
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for project in projects.iter() {
                        ProjectCardView { key: "{project.title}", project: project.clone() }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                div { class: "text-gray-400", "Could not load projects: {err}" }
            },
            None => rsx! {
                div { class: "text-gray-400", "Loading..." }
            },
        }
    }
}
