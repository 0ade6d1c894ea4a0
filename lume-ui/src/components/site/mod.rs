mod member_card;
mod nav_bar;
mod page_header;
mod project_card;
mod publication_list;

pub use member_card::MemberCardView;
pub use nav_bar::NavBarView;
pub use page_header::PageHeaderView;
pub use project_card::ProjectCardView;
pub use publication_list::PublicationListView;
