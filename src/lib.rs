//! mixfinder - client-side navigation for a cocktail search/browse app.
//!
//! The crate is split into a small routing engine and the application built
//! on top of it:
//!
//! - [`router`]: path-pattern matching, the route table, push/replace
//!   navigation, and the history synchronizer that keeps the active route
//!   consistent with native back/forward navigation.
//! - [`page`]: the renderable unit produced by page components.
//! - [`pages`]: the application's page components (home, search, cocktail
//!   detail).
//! - [`theme`]: declarative presentation tokens consumed by an external
//!   styling layer.
//! - [`app`]: route declarations and startup wiring.
//!
//! The browser boundary is abstracted behind
//! [`router::HistoryEnvironment`]; hosts without a navigable history (SSR,
//! test harnesses) use [`router::DetachedEnvironment`] and get no history
//! listener installed.

pub mod app;
pub mod page;
pub mod pages;
pub mod reactive;
pub mod router;
pub mod theme;

pub use app::{App, build_router, mount};
pub use page::{Page, PageElement};
pub use router::{
	DetachedEnvironment, HistoryEnvironment, HistorySync, MemoryEnvironment, PathPattern, Route,
	RouteMatch, RouteParams, Router, RouterError,
};
pub use theme::Theme;
