mod about;
mod archives;
mod home;
mod layout;
mod members;
mod music;
mod projects;
mod publications;

pub use about::About;
pub use archives::Archives;
pub use home::Home;
pub use layout::AppLayout;
pub use members::Members;
pub use music::Music;
pub use projects::Projects;
pub use publications::Publications;
