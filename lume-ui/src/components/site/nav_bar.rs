use crate::display_types::NavItem;
use dioxus::prelude::*;

/// Top navigation bar. The web crate supplies the items and handles
/// navigation in `on_nav_click`.
#[component]
pub fn NavBarView(
    site_name: String,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
) -> Element {
    rsx! {
        header { class: "site-nav bg-white border-b border-gray-200",
            div { class: "max-w-5xl mx-auto flex items-center justify-between px-4 py-3",
                span { class: "font-bold text-lg", "{site_name}" }
                nav { class: "flex items-center gap-4",
                    for item in nav_items.iter() {
                        button {
                            key: "{item.id}",
                            class: if item.is_active { "nav-link nav-link-active" } else { "nav-link" },
                            onclick: {
                                let id = item.id.clone();
                                move |_| on_nav_click.call(id.clone())
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
