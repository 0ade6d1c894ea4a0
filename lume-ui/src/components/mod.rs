pub mod player;
pub mod resume_modal;
pub mod rotating_tagline;
pub mod site;

pub use player::*;
pub use resume_modal::*;
pub use rotating_tagline::*;
pub use site::*;
