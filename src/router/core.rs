//! The route table and navigation service.
//!
//! Resolution order is declaration order, first match wins; the
//! application's route table relies on it. The active route is the only
//! mutable state here, held in [`Signal`] cells so the host can subscribe
//! for re-render.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::RouterError;
use super::history::HistoryEnvironment;
use super::pattern::RouteParams;
use super::route::{PageComponent, Route};
use crate::page::Page;
use crate::reactive::Signal;

/// A matched route with its extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route.
	pub route: Route,
	/// Parameters extracted from the path.
	pub params: RouteParams,
}

/// How a navigation manipulates the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// Appends a new history entry.
	Push,
	/// Overwrites the current history entry.
	Replace,
}

/// Builds a [`Router`] from route declarations.
pub struct RouterBuilder {
	env: Arc<dyn HistoryEnvironment>,
	routes: Vec<Route>,
	not_found: Option<Arc<dyn PageComponent>>,
}

impl RouterBuilder {
	/// Declares a route. Declaration order is resolution order.
	pub fn route(mut self, route: Route) -> Self {
		self.routes.push(route);
		self
	}

	/// Sets the fallback component rendered when no route matches.
	///
	/// The fallback affects rendering only; navigation to an unmatched
	/// path still fails.
	pub fn not_found(mut self, component: Arc<dyn PageComponent>) -> Self {
		self.not_found = Some(component);
		self
	}

	/// Finalizes the route table.
	///
	/// The active route is seeded from the environment's current path.
	///
	/// # Errors
	///
	/// Returns [`RouterError::DuplicateName`] if two routes share a name.
	pub fn build(self) -> Result<Router, RouterError> {
		let mut name_index = HashMap::with_capacity(self.routes.len());
		for (index, route) in self.routes.iter().enumerate() {
			if name_index.insert(route.name().to_string(), index).is_some() {
				return Err(RouterError::DuplicateName(route.name().to_string()));
			}
		}

		let router = Router {
			routes: self.routes,
			name_index,
			env: self.env,
			current_path: Signal::new(String::new()),
			current_params: Signal::new(RouteParams::new()),
			current_route_name: Signal::new(None),
			not_found: self.not_found,
		};
		router.sync_from_environment();
		Ok(router)
	}
}

/// The client-side router: an immutable route table plus the active route.
pub struct Router {
	/// Declared routes, in resolution order.
	routes: Vec<Route>,
	/// Route name -> index into `routes`.
	name_index: HashMap<String, usize>,
	/// The host history boundary.
	env: Arc<dyn HistoryEnvironment>,
	/// Active path.
	current_path: Signal<String>,
	/// Active params.
	current_params: Signal<RouteParams>,
	/// Active route name, `None` when the current path matches nothing.
	current_route_name: Signal<Option<String>>,
	/// Fallback component for unmatched renders.
	not_found: Option<Arc<dyn PageComponent>>,
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.routes)
			.field("current_path", &self.current_path)
			.finish()
	}
}

impl Router {
	/// Starts building a router against a host environment.
	pub fn builder(env: Arc<dyn HistoryEnvironment>) -> RouterBuilder {
		RouterBuilder {
			env,
			routes: Vec::new(),
			not_found: None,
		}
	}

	/// Returns the host environment.
	pub fn environment(&self) -> Arc<dyn HistoryEnvironment> {
		Arc::clone(&self.env)
	}

	/// Resolves a path against the route table.
	///
	/// First declared match wins. Unknown paths simply return `None`;
	/// resolution never fails hard.
	pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
		self.routes.iter().find_map(|route| {
			route.pattern().matches(path).map(|params| RouteMatch {
				route: route.clone(),
				params,
			})
		})
	}

	/// Navigates to `path`, appending a new history entry.
	///
	/// # Errors
	///
	/// Returns [`RouterError::NavigationMismatch`] if no route matches;
	/// the active route and the history stack are left untouched.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Push)
	}

	/// Navigates to `path`, overwriting the current history entry.
	///
	/// Same failure contract as [`push`](Self::push).
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Replace)
	}

	fn navigate(&self, path: &str, nav_type: NavigationType) -> Result<(), RouterError> {
		let Some(route_match) = self.resolve(path) else {
			return Err(RouterError::NavigationMismatch(path.to_string()));
		};

		match nav_type {
			NavigationType::Push => self.env.push_entry(path),
			NavigationType::Replace => self.env.replace_entry(path),
		}

		tracing::debug!(
			%path,
			route = route_match.route.name(),
			?nav_type,
			"navigated"
		);
		self.set_active(path, &route_match);
		Ok(())
	}

	/// Re-derives the active route from the environment's current path.
	///
	/// Used at startup; an unmatched initial path leaves the route name
	/// empty and rendering falls back to the not-found component.
	pub(crate) fn sync_from_environment(&self) {
		let path = self.env.current_path();
		match self.resolve(&path) {
			Some(route_match) => self.set_active(&path, &route_match),
			None => {
				self.current_path.set(path);
				self.current_params.set(RouteParams::new());
				self.current_route_name.set(None);
			}
		}
	}

	fn set_active(&self, path: &str, route_match: &RouteMatch) {
		self.current_path.set(path.to_string());
		self.current_params.set(route_match.params.clone());
		self.current_route_name
			.set(Some(route_match.route.name().to_string()));
	}

	/// Generates a URL for a named route.
	///
	/// # Errors
	///
	/// Returns [`RouterError::UnknownRouteName`] for undeclared names and
	/// [`RouterError::Pattern`] when a pattern parameter has no value.
	pub fn reverse(&self, name: &str, params: &RouteParams) -> Result<String, RouterError> {
		let index = self
			.name_index
			.get(name)
			.ok_or_else(|| RouterError::UnknownRouteName(name.to_string()))?;
		Ok(self.routes[*index].pattern().to_path(params)?)
	}

	/// Renders the active route's component.
	///
	/// Parameters are forwarded only for routes declared with `props`.
	/// Falls back to the not-found component, or [`Page::Empty`] if none
	/// is registered.
	pub fn render_current(&self) -> Page {
		let name = self.current_route_name.get();
		let route = name
			.as_deref()
			.and_then(|n| self.name_index.get(n))
			.map(|i| &self.routes[*i]);

		match route {
			Some(route) => self
				.current_params
				.with(|params| route.render(params)),
			None => self
				.not_found
				.as_ref()
				.map(|c| c.render(&RouteParams::new()))
				.unwrap_or(Page::Empty),
		}
	}

	/// The active path cell.
	pub fn current_path(&self) -> &Signal<String> {
		&self.current_path
	}

	/// The active params cell.
	pub fn current_params(&self) -> &Signal<RouteParams> {
		&self.current_params
	}

	/// The active route name cell.
	pub fn current_route_name(&self) -> &Signal<Option<String>> {
		&self.current_route_name
	}

	/// Returns the number of declared routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether a route name is declared.
	pub fn has_route(&self, name: &str) -> bool {
		self.name_index.contains_key(name)
	}

	/// Returns the declared routes in resolution order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::history::MemoryEnvironment;
	use crate::router::route::{component, component_with_props};

	fn page(text: &'static str) -> Arc<dyn PageComponent> {
		component(move || Page::text(text))
	}

	fn test_router() -> Router {
		Router::builder(Arc::new(MemoryEnvironment::new()))
			.route(Route::new("home", "/", page("Home")).unwrap())
			.route(Route::new("search", "/SearchCocktail", page("Search")).unwrap())
			.route(
				Route::new(
					"detail",
					"/cocktail/:id",
					component_with_props(|params| {
						Page::text(format!("Cocktail {}", params.get("id").unwrap_or("?")))
					}),
				)
				.unwrap()
				.with_props(),
			)
			.not_found(page("NotFound"))
			.build()
			.unwrap()
	}

	#[test]
	fn test_resolve_literal_paths_identity() {
		let router = test_router();
		for (path, name) in [("/", "home"), ("/SearchCocktail", "search")] {
			let m = router.resolve(path).unwrap();
			assert_eq!(m.route.name(), name);
			assert!(m.params.is_empty());
		}
	}

	#[test]
	fn test_resolve_extracts_params() {
		let router = test_router();
		let m = router.resolve("/cocktail/42").unwrap();
		assert_eq!(m.route.name(), "detail");
		assert_eq!(m.params.get("id"), Some("42"));
		assert!(m.route.props());
	}

	#[test]
	fn test_resolve_unknown_path() {
		let router = test_router();
		assert!(router.resolve("/nowhere").is_none());
	}

	#[test]
	fn test_first_declared_wins() {
		let env: Arc<dyn HistoryEnvironment> = Arc::new(MemoryEnvironment::new());
		let router = Router::builder(env)
			.route(Route::new("specific", "/cocktail/featured", page("Featured")).unwrap())
			.route(
				Route::new("detail", "/cocktail/:id", page("Detail"))
					.unwrap()
					.with_props(),
			)
			.build()
			.unwrap();

		assert_eq!(
			router.resolve("/cocktail/featured").unwrap().route.name(),
			"specific"
		);
		assert_eq!(router.resolve("/cocktail/7").unwrap().route.name(), "detail");
	}

	#[test]
	fn test_duplicate_name_rejected() {
		let env: Arc<dyn HistoryEnvironment> = Arc::new(MemoryEnvironment::new());
		let result = Router::builder(env)
			.route(Route::new("home", "/", page("A")).unwrap())
			.route(Route::new("home", "/other", page("B")).unwrap())
			.build();

		assert_eq!(
			result.err(),
			Some(RouterError::DuplicateName("home".to_string()))
		);
	}

	#[test]
	fn test_push_updates_active_route_and_history() {
		let env = Arc::new(MemoryEnvironment::new());
		let router = Router::builder(env.clone())
			.route(Route::new("home", "/", page("Home")).unwrap())
			.route(Route::new("search", "/SearchCocktail", page("Search")).unwrap())
			.build()
			.unwrap();

		router.push("/SearchCocktail").unwrap();
		assert_eq!(router.current_path().get(), "/SearchCocktail");
		assert_eq!(router.current_route_name().get().as_deref(), Some("search"));
		assert_eq!(env.entry_count(), 2);
	}

	#[test]
	fn test_replace_does_not_add_history_entry() {
		let env = Arc::new(MemoryEnvironment::new());
		let router = Router::builder(env.clone())
			.route(Route::new("home", "/", page("Home")).unwrap())
			.route(Route::new("search", "/SearchCocktail", page("Search")).unwrap())
			.build()
			.unwrap();

		router.replace("/SearchCocktail").unwrap();
		assert_eq!(router.current_path().get(), "/SearchCocktail");
		assert_eq!(env.entry_count(), 1);
	}

	#[test]
	fn test_failed_navigation_leaves_active_route_untouched() {
		let env = Arc::new(MemoryEnvironment::new());
		let router = Router::builder(env.clone())
			.route(Route::new("home", "/", page("Home")).unwrap())
			.build()
			.unwrap();

		let err = router.replace("/nowhere").unwrap_err();
		assert_eq!(err, RouterError::NavigationMismatch("/nowhere".to_string()));
		assert_eq!(router.current_path().get(), "/");
		assert_eq!(router.current_route_name().get().as_deref(), Some("home"));
		assert_eq!(env.entry_count(), 1);
		assert_eq!(env.current_path(), "/");
	}

	#[test]
	fn test_reverse() {
		let router = test_router();
		let params: RouteParams = [("id", "42")].into_iter().collect();
		assert_eq!(router.reverse("detail", &params).unwrap(), "/cocktail/42");
		assert_eq!(router.reverse("home", &RouteParams::new()).unwrap(), "/");
	}

	#[test]
	fn test_reverse_unknown_name() {
		let router = test_router();
		assert_eq!(
			router.reverse("nope", &RouteParams::new()),
			Err(RouterError::UnknownRouteName("nope".to_string()))
		);
	}

	#[test]
	fn test_reverse_missing_param() {
		let router = test_router();
		assert!(matches!(
			router.reverse("detail", &RouteParams::new()),
			Err(RouterError::Pattern(_))
		));
	}

	#[test]
	fn test_render_current_forwards_props() {
		let router = test_router();
		router.push("/cocktail/7").unwrap();
		assert_eq!(router.render_current().render_html(), "Cocktail 7");
	}

	#[test]
	fn test_render_falls_back_to_not_found() {
		let env = Arc::new(MemoryEnvironment::with_initial_path("/nowhere"));
		let router = Router::builder(env)
			.route(Route::new("home", "/", page("Home")).unwrap())
			.not_found(page("NotFound"))
			.build()
			.unwrap();

		assert!(router.current_route_name().get().is_none());
		assert_eq!(router.render_current().render_html(), "NotFound");
	}

	#[test]
	fn test_initial_route_seeded_from_environment() {
		let env = Arc::new(MemoryEnvironment::with_initial_path("/SearchCocktail"));
		let router = Router::builder(env)
			.route(Route::new("home", "/", page("Home")).unwrap())
			.route(Route::new("search", "/SearchCocktail", page("Search")).unwrap())
			.build()
			.unwrap();

		assert_eq!(router.current_route_name().get().as_deref(), Some("search"));
	}
}
