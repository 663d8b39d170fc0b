//! End-to-end navigation behavior against an in-memory history host.

use std::sync::Arc;

use mixfinder::app::{ROUTE_COCKTAIL_DETAIL, ROUTE_HOME, ROUTE_SEARCH};
use mixfinder::router::{DetachedEnvironment, HistorySync, MemoryEnvironment, RouterError};
use mixfinder::HistoryEnvironment;
use mixfinder::{build_router, mount};

#[test]
fn declared_paths_resolve_to_their_routes() {
	let router = build_router(Arc::new(MemoryEnvironment::new())).unwrap();
	for route in router.routes() {
		if route.pattern().is_static() {
			let m = router.resolve(route.pattern().pattern()).unwrap();
			assert_eq!(m.route.name(), route.name());
		}
	}
}

#[test]
fn back_event_replaces_active_route_without_new_entry() {
	let env = Arc::new(MemoryEnvironment::new());
	let app = mount(env.clone()).unwrap();

	app.router().push("/SearchCocktail").unwrap();
	assert_eq!(env.entry_count(), 2);

	env.back();
	assert_eq!(
		app.router().current_route_name().get().as_deref(),
		Some(ROUTE_HOME)
	);
	// Replace navigation: the entry count is unchanged.
	assert_eq!(env.entry_count(), 2);

	env.forward();
	assert_eq!(
		app.router().current_route_name().get().as_deref(),
		Some(ROUTE_SEARCH)
	);
	assert_eq!(env.entry_count(), 2);
}

#[test]
fn back_and_forward_through_a_detail_page() {
	let env = Arc::new(MemoryEnvironment::new());
	let app = mount(env.clone()).unwrap();

	app.router().push("/cocktail/7").unwrap();
	assert_eq!(app.router().current_params().get().get("id"), Some("7"));

	env.back();
	assert_eq!(
		app.router().current_route_name().get().as_deref(),
		Some(ROUTE_HOME)
	);
	assert!(app.router().current_params().get().is_empty());

	env.forward();
	assert_eq!(
		app.router().current_route_name().get().as_deref(),
		Some(ROUTE_COCKTAIL_DETAIL)
	);
	assert_eq!(app.router().current_params().get().get("id"), Some("7"));
	assert!(app.render().render_html().contains("Cocktail #7"));
}

#[test]
fn detached_host_registers_no_listener_and_does_not_panic() {
	let app = mount(Arc::new(DetachedEnvironment)).unwrap();
	assert!(!app.history_synced());
}

#[test]
fn history_sync_install_is_one_shot() {
	let env = Arc::new(MemoryEnvironment::new());
	let router = build_router(env).unwrap();

	let sync = HistorySync::new();
	assert!(sync.install(&router));
	assert!(!sync.install(&router));
	assert!(sync.is_installed());
}

#[test]
fn popstate_to_unmatched_path_is_swallowed() {
	let env = Arc::new(MemoryEnvironment::new());
	let app = mount(env.clone()).unwrap();

	app.router().push("/SearchCocktail").unwrap();

	// Simulate an entry the route table does not know about, e.g. pushed
	// by something outside the router.
	env.push_entry("/externally-added");
	env.back();
	env.forward();

	// The failed replace was logged, not propagated; the app still sits on
	// its previous route.
	assert_eq!(
		app.router().current_route_name().get().as_deref(),
		Some(ROUTE_SEARCH)
	);
	assert_eq!(app.router().current_path().get(), "/SearchCocktail");
}

#[test]
fn push_to_unmatched_path_fails_without_side_effects() {
	let env = Arc::new(MemoryEnvironment::new());
	let app = mount(env.clone()).unwrap();

	let err = app.router().push("/no-such-page").unwrap_err();
	assert_eq!(
		err,
		RouterError::NavigationMismatch("/no-such-page".to_string())
	);
	assert_eq!(env.entry_count(), 1);
	assert_eq!(
		app.router().current_route_name().get().as_deref(),
		Some(ROUTE_HOME)
	);
}

#[test]
fn legacy_search_path_still_syncs() {
	let env = Arc::new(MemoryEnvironment::new());
	let app = mount(env.clone()).unwrap();

	app.router().push("/search").unwrap();
	app.router().push("/cocktail/3").unwrap();
	env.back();

	assert_eq!(app.router().current_path().get(), "/search");
	assert_eq!(
		app.router().current_route_name().get().as_deref(),
		Some("search-legacy")
	);
}
