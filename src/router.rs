//! Client-side routing: pattern matching, the route table, and history
//! synchronization.

mod core;
mod error;
mod history;
mod pattern;
mod route;

pub use self::core::{NavigationType, RouteMatch, Router, RouterBuilder};
pub use error::{PatternError, RouterError};
pub use history::{
	DetachedEnvironment, HistoryEnvironment, HistorySync, MemoryEnvironment, PopstateHandler,
};
pub use pattern::{PathPattern, RouteParams};
pub use route::{PageComponent, Route, component, component_with_props};
