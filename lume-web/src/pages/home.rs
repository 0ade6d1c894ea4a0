use crate::api;
use crate::Route;
use dioxus::prelude::*;
use lume_ui::{PublicationListView, RotatingTagline};

#[component]
pub fn Home() -> Element {
    let profile = use_resource(api::fetch_profile);
    let publications = use_resource(api::fetch_publications);

    rsx! {
        match &*profile.read() {
            Some(Ok(profile)) => rsx! {
                div { class: "mb-10",
                    h1 { class: "text-4xl font-bold mb-2", "{profile.name}" }
                    RotatingTagline { lines: profile.taglines.clone() }
                    for paragraph in profile.mission.iter() {
                        p { class: "text-gray-600 mt-4", "{paragraph}" }
                    }
                }
            },
            Some(Err(_)) => rsx! {
                div { class: "text-gray-400 mb-10", "Welcome." }
            },
            None => rsx! {
                div { class: "text-gray-400 mb-10", "Loading..." }
            },
        }

        h2 { class: "text-2xl font-semibold mb-4", "Recent publications" }
        match &*publications.read() {
            Some(Ok(publications)) => rsx! {
                PublicationListView {
                    publications: publications.iter().take(3).cloned().collect::<Vec<_>>(),
                }
                div { class: "mt-4",
                    Link { class: "text-blue-600 underline", to: Route::Publications {},
                        "All publications"
                    }
                }
            },
            Some(Err(err)) => rsx! {
                div { class: "text-gray-400", "Could not load publications: {err}" }
            },
            None => rsx! {
                div { class: "text-gray-400", "Loading..." }
            },
        }
    }
}
