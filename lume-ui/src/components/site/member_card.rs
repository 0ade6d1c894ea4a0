use crate::display_types::Member;
use dioxus::prelude::*;

/// Card for one lab member. `on_open_resume` only fires for members
/// that actually have resume sections.
#[component]
pub fn MemberCardView(member: Member, on_open_resume: EventHandler<()>) -> Element {
    let has_resume = !member.resume.is_empty();

    rsx! {
        div { class: "member-card bg-white rounded-lg shadow p-4",
            if let Some(photo) = &member.photo_url {
                img { class: "member-photo rounded-full mb-2", src: "{photo}", alt: "{member.name}" }
            }
            div { class: "font-semibold", "{member.name}" }
            div { class: "text-sm text-gray-500", "{member.role}" }
            if let Some(email) = &member.email {
                a { class: "text-sm text-blue-600", href: "mailto:{email}", "{email}" }
            }
            if !member.interests.is_empty() {
                div { class: "mt-2 text-sm text-gray-600",
                    { member.interests.join(" · ") }
                }
            }
            if has_resume {
                button {
                    class: "mt-3 text-sm text-blue-600 underline",
                    onclick: move |_| on_open_resume.call(()),
                    "Resume"
                }
            }
        }
    }
}
