//! The application's page components.
//!
//! Pages are opaque renderable units as far as the router is concerned;
//! their markup is cosmetic. Only the cocktail detail page consumes route
//! parameters.

mod cocktail_detail;
mod home;
mod not_found;
mod search;

pub use cocktail_detail::cocktail_detail_page;
pub use home::home_page;
pub use not_found::not_found_page;
pub use search::search_page;
