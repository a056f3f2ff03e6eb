//! UI Components
//!
//! Reusable Leptos components.

mod nav_link;
mod search_box;
mod category_nav;
mod route_view;
mod game_list;
mod game_card;
mod game_detail;
mod lazy_image;
mod pagination;
mod status_views;
mod copy_address;

pub use nav_link::NavLink;
pub use search_box::SearchBox;
pub use category_nav::CategoryNav;
pub use route_view::RouteView;
pub use game_list::GameList;
pub use game_card::GameCard;
pub use game_detail::GameDetail;
pub use lazy_image::LazyImage;
pub use pagination::Pagination;
pub use status_views::{LoadErrorView, LoadingView, NotFound};
pub use copy_address::CopyAddress;
