//! Application wiring: the route table and startup sequence.
//!
//! Startup order matters: the route table is constructed first, then the
//! history synchronizer is installed (skipped on non-interactive hosts),
//! then the application renders against the resolved route.

use std::sync::Arc;

use crate::page::Page;
use crate::pages::{cocktail_detail_page, home_page, not_found_page, search_page};
use crate::router::{
	HistoryEnvironment, HistorySync, Route, Router, RouterError, component, component_with_props,
};

/// Name of the home route (`/`).
pub const ROUTE_HOME: &str = "home";
/// Name of the search route (`/SearchCocktail`).
pub const ROUTE_SEARCH: &str = "search";
/// Name of the legacy search alias (`/search`).
pub const ROUTE_SEARCH_LEGACY: &str = "search-legacy";
/// Name of the cocktail detail route (`/cocktail/:id`).
pub const ROUTE_COCKTAIL_DETAIL: &str = "cocktail-detail";

/// Builds the application's route table against a host environment.
///
/// `/SearchCocktail` is the authoritative search route; `/search` stays
/// registered as a legacy alias to the same component so old links keep
/// resolving.
pub fn build_router(env: Arc<dyn HistoryEnvironment>) -> Result<Arc<Router>, RouterError> {
	let router = Router::builder(env)
		.route(Route::new(ROUTE_HOME, "/", component(home_page))?)
		.route(
			Route::new(ROUTE_SEARCH, "/SearchCocktail", component(search_page))?
				.with_meta("title", "Search Cocktails"),
		)
		.route(
			Route::new(ROUTE_SEARCH_LEGACY, "/search", component(search_page))?
				.with_meta("legacy", true),
		)
		.route(
			Route::new(
				ROUTE_COCKTAIL_DETAIL,
				"/cocktail/:id",
				component_with_props(cocktail_detail_page),
			)?
			.with_props()
			.with_meta("title", "Cocktail Details"),
		)
		.not_found(component(not_found_page))
		.build()?;

	Ok(Arc::new(router))
}

/// A mounted application.
pub struct App {
	router: Arc<Router>,
	history_sync: HistorySync,
}

impl App {
	/// Returns the router.
	pub fn router(&self) -> &Arc<Router> {
		&self.router
	}

	/// Returns whether the back/forward listener is installed.
	pub fn history_synced(&self) -> bool {
		self.history_sync.is_installed()
	}

	/// Renders the active route.
	pub fn render(&self) -> Page {
		self.router.render_current()
	}
}

/// Mounts the application against a host environment.
///
/// # Errors
///
/// Returns [`RouterError`] if the route table fails to build.
pub fn mount(env: Arc<dyn HistoryEnvironment>) -> Result<App, RouterError> {
	let router = build_router(env)?;

	let history_sync = HistorySync::new();
	history_sync.install(&router);

	Ok(App {
		router,
		history_sync,
	})
}
