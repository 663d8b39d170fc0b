//! Route declarations: the mapping from a path pattern to a page.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::error::RouterError;
use super::pattern::{PathPattern, RouteParams};
use crate::page::Page;

/// An opaque renderable page unit.
///
/// The router never looks inside a component; it only forwards matched
/// path parameters when the route's `props` flag is set.
pub trait PageComponent: Send + Sync {
	/// Renders the page. `params` is empty unless the matched route
	/// forwards parameters.
	fn render(&self, params: &RouteParams) -> Page;
}

struct StatelessComponent<F>(F);

impl<F> PageComponent for StatelessComponent<F>
where
	F: Fn() -> Page + Send + Sync,
{
	fn render(&self, _params: &RouteParams) -> Page {
		(self.0)()
	}
}

struct PropsComponent<F>(F);

impl<F> PageComponent for PropsComponent<F>
where
	F: Fn(&RouteParams) -> Page + Send + Sync,
{
	fn render(&self, params: &RouteParams) -> Page {
		(self.0)(params)
	}
}

/// Wraps a parameterless closure as a [`PageComponent`].
pub fn component<F>(f: F) -> Arc<dyn PageComponent>
where
	F: Fn() -> Page + Send + Sync + 'static,
{
	Arc::new(StatelessComponent(f))
}

/// Wraps a closure taking route parameters as a [`PageComponent`].
pub fn component_with_props<F>(f: F) -> Arc<dyn PageComponent>
where
	F: Fn(&RouteParams) -> Page + Send + Sync + 'static,
{
	Arc::new(PropsComponent(f))
}

/// A single route declaration.
pub struct Route {
	/// The compiled path pattern.
	pattern: PathPattern,
	/// Unique route name.
	name: String,
	/// The page rendered for this route.
	component: Arc<dyn PageComponent>,
	/// Whether matched path parameters are forwarded to the component.
	props: bool,
	/// Arbitrary annotations (display title, legacy markers, ...).
	meta: BTreeMap<String, Value>,
}

impl Clone for Route {
	fn clone(&self) -> Self {
		Self {
			pattern: self.pattern.clone(),
			name: self.name.clone(),
			component: Arc::clone(&self.component),
			props: self.props,
			meta: self.meta.clone(),
		}
	}
}

impl fmt::Debug for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.field("props", &self.props)
			.field("meta", &self.meta)
			.finish()
	}
}

impl Route {
	/// Creates a route mapping `pattern` to `component`.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Pattern`] if the pattern does not compile.
	pub fn new(
		name: impl Into<String>,
		pattern: &str,
		component: Arc<dyn PageComponent>,
	) -> Result<Self, RouterError> {
		Ok(Self {
			pattern: PathPattern::new(pattern)?,
			name: name.into(),
			component,
			props: false,
			meta: BTreeMap::new(),
		})
	}

	/// Forwards matched path parameters to the component.
	pub fn with_props(mut self) -> Self {
		self.props = true;
		self
	}

	/// Attaches a meta annotation.
	pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.meta.insert(key.into(), value.into());
		self
	}

	/// Returns the route name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the path pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Returns whether parameters are forwarded to the component.
	pub fn props(&self) -> bool {
		self.props
	}

	/// Returns the meta annotations.
	pub fn meta(&self) -> &BTreeMap<String, Value> {
		&self.meta
	}

	/// Returns a meta annotation by key.
	pub fn meta_value(&self, key: &str) -> Option<&Value> {
		self.meta.get(key)
	}

	/// Renders this route's component, honoring the `props` flag.
	pub(crate) fn render(&self, params: &RouteParams) -> Page {
		if self.props {
			self.component.render(params)
		} else {
			self.component.render(&RouteParams::new())
		}
	}
}
