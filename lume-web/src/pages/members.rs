use crate::api;
use dioxus::prelude::*;
use lume_ui::display_types::Member;
use lume_ui::{MemberCardView, PageHeaderView, ResumeModalView};

#[component]
pub fn Members() -> Element {
    let members = use_resource(api::fetch_members);
    let mut resume_open_for: Signal<Option<Member>> = use_signal(|| None);

    rsx! {
        PageHeaderView { title: "Members" }
        match &*members.read() {
            Some(Ok(members)) => rsx! {
                div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
                    for member in members.iter().cloned() {
                        MemberCardView {
                            key: "{member.name}",
                            member: member.clone(),
                            on_open_resume: move |_| resume_open_for.set(Some(member.clone())),
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                div { class: "text-gray-400", "Could not load members: {err}" }
            },
            None => rsx! {
                div { class: "text-gray-400", "Loading..." }
            },
        }

        if let Some(member) = resume_open_for() {
            ResumeModalView {
                member_name: member.name.clone(),
                sections: member.resume.clone(),
                on_close: move |_| resume_open_for.set(None),
            }
        }
    }
}
