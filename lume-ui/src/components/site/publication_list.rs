use crate::display_types::Publication;
use dioxus::prelude::*;

/// Publications grouped as a flat list, newest first (callers sort).
#[component]
pub fn PublicationListView(publications: Vec<Publication>) -> Element {
    rsx! {
        ul { class: "publication-list space-y-3",
            for (index, publication) in publications.iter().enumerate() {
                li { key: "{index}", class: "bg-white rounded-lg shadow p-4",
                    div { class: "font-semibold",
                        if let Some(link) = &publication.link {
                            a { class: "hover:underline", href: "{link}", target: "_blank",
                                "{publication.title}"
                            }
                        } else {
                            "{publication.title}"
                        }
                    }
                    div { class: "text-sm text-gray-600",
                        { publication.authors.join(", ") }
                    }
                    div { class: "text-sm text-gray-400",
                        "{publication.venue}, {publication.year}"
                    }
                }
            }
        }
    }
}
