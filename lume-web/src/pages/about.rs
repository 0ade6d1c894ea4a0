use crate::api;
use dioxus::prelude::*;
use lume_ui::PageHeaderView;

#[component]
pub fn About() -> Element {
    let profile = use_resource(api::fetch_profile);

    rsx! {
        PageHeaderView { title: "About" }
        match &*profile.read() {
            Some(Ok(profile)) => rsx! {
                for paragraph in profile.mission.iter() {
                    p { class: "text-gray-600 mb-4", "{paragraph}" }
                }
                if let Some(contact) = &profile.contact {
                    p { class: "text-gray-500 mt-6", "Contact: {contact}" }
                }
            },
            Some(Err(err)) => rsx! {
                div { class: "text-gray-400", "Could not load profile: {err}" }
            },
            None => rsx! {
                div { class: "text-gray-400", "Loading..." }
            },
        }
    }
}
