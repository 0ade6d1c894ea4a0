pub mod api;
pub mod music_player;
pub mod pages;
pub mod player;
pub mod youtube;

use dioxus::prelude::*;
use pages::{About, AppLayout, Archives, Home, Members, Music, Projects, Publications};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub const DATA_PROFILE: Asset = asset!("/assets/data/profile.json");
pub const DATA_MEMBERS: Asset = asset!("/assets/data/members.json");
pub const DATA_PUBLICATIONS: Asset = asset!("/assets/data/publications.json");
pub const DATA_PROJECTS: Asset = asset!("/assets/data/projects.json");
pub const DATA_ARCHIVES: Asset = asset!("/assets/data/archives.json");
pub const DATA_PLAYLIST: Asset = asset!("/assets/data/playlist.json");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/members")]
    Members {},
    #[route("/publications")]
    Publications {},
    #[route("/projects")]
    Projects {},
    #[route("/archives")]
    Archives {},
    #[route("/archives/music")]
    Music {},
}

impl Route {
    /// The page family where the full player is permitted to render.
    pub fn in_media_family(&self) -> bool {
        matches!(self, Route::Home {} | Route::Archives {} | Route::Music {})
    }

    /// The dedicated playlist page; it lists the queue itself, so the
    /// full widget stays out of the way there.
    pub fn is_playlist_page(&self) -> bool {
        matches!(self, Route::Music {})
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_family_routes() {
        assert!(Route::Home {}.in_media_family());
        assert!(Route::Archives {}.in_media_family());
        assert!(Route::Music {}.in_media_family());
        assert!(!Route::About {}.in_media_family());
        assert!(!Route::Members {}.in_media_family());
        assert!(!Route::Publications {}.in_media_family());
        assert!(!Route::Projects {}.in_media_family());
    }

    #[test]
    fn test_playlist_page() {
        assert!(Route::Music {}.is_playlist_page());
        assert!(!Route::Archives {}.is_playlist_page());
        assert!(!Route::Home {}.is_playlist_page());
    }
}
