use crate::music_player::GlobalMusicPlayer;
use crate::player::WebPlayerService;
use crate::Route;
use dioxus::prelude::*;
use lume_ui::display_types::NavItem;
use lume_ui::stores::PlayerStore;
use lume_ui::NavBarView;

fn nav_items(current: &Route) -> Vec<NavItem> {
    let entries: [(&str, &str, bool); 6] = [
        ("home", "Home", matches!(current, Route::Home {})),
        ("about", "About", matches!(current, Route::About {})),
        ("members", "Members", matches!(current, Route::Members {})),
        (
            "publications",
            "Publications",
            matches!(current, Route::Publications {}),
        ),
        ("projects", "Projects", matches!(current, Route::Projects {})),
        (
            "archives",
            "Archives",
            matches!(current, Route::Archives {} | Route::Music {}),
        ),
    ];
    entries
        .into_iter()
        .map(|(id, label, is_active)| NavItem {
            id: id.to_string(),
            label: label.to_string(),
            is_active,
        })
        .collect()
}

fn route_for_nav(id: &str) -> Option<Route> {
    match id {
        "home" => Some(Route::Home {}),
        "about" => Some(Route::About {}),
        "members" => Some(Route::Members {}),
        "publications" => Some(Route::Publications {}),
        "projects" => Some(Route::Projects {}),
        "archives" => Some(Route::Archives {}),
        _ => None,
    }
}

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    // The playback store and service live here for the application's
    // lifetime; the layout itself persists across route changes.
    let store = use_context_provider(PlayerStore::new);
    let _service =
        use_context_provider(move || Signal::new(WebPlayerService::new(store)));

    rsx! {
        NavBarView {
            site_name: "lume lab",
            nav_items: nav_items(&current_route),
            on_nav_click: move |id: String| {
                if let Some(route) = route_for_nav(&id) {
                    navigator().push(route);
                }
            },
        }
        main { class: "max-w-5xl mx-auto px-4 py-8",
            Outlet::<Route> {}
        }
        GlobalMusicPlayer {}
    }
}
