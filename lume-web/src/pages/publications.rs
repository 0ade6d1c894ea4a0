use crate::api;
use dioxus::prelude::*;
use lume_ui::{PageHeaderView, PublicationListView};

#[component]
pub fn Publications() -> Element {
    let publications = use_resource(api::fetch_publications);

    rsx! {
        PageHeaderView { title: "Publications" }
        match &*publications.read() {
            Some(Ok(publications)) => rsx! {
                PublicationListView {
                    publications: {
                        let mut sorted = publications.clone();
                        sorted.sort_by(|a, b| b.year.cmp(&a.year));
                        sorted
                    },
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
