//! The host history boundary and the back/forward synchronizer.
//!
//! The router never talks to a browser directly; it goes through
//! [`HistoryEnvironment`], an injected port. Hosts without a navigable
//! history (server-side rendering, test harnesses) plug in
//! [`DetachedEnvironment`] and no listener is ever registered.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use super::core::Router;

/// Callback invoked with the environment's current path after a
/// back/forward navigation.
pub type PopstateHandler = Arc<dyn Fn(String) + Send + Sync>;

/// A host environment providing navigable history.
pub trait HistoryEnvironment: Send + Sync {
	/// Capability detection: does this host provide a navigable-history
	/// environment at all?
	fn is_interactive(&self) -> bool;

	/// The environment's current path.
	///
	/// Deliberately a plain string rather than richer navigable state, so
	/// nothing non-serializable crosses into the router.
	fn current_path(&self) -> String;

	/// Appends a new history entry for `path`.
	fn push_entry(&self, path: &str);

	/// Overwrites the current history entry with `path`.
	fn replace_entry(&self, path: &str);

	/// Registers the single back/forward listener. Returns whether a
	/// listener was actually installed.
	fn set_popstate_handler(&self, handler: PopstateHandler) -> bool;
}

/// The no-op environment for non-interactive hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedEnvironment;

impl HistoryEnvironment for DetachedEnvironment {
	fn is_interactive(&self) -> bool {
		false
	}

	fn current_path(&self) -> String {
		"/".to_string()
	}

	fn push_entry(&self, _path: &str) {}

	fn replace_entry(&self, _path: &str) {}

	fn set_popstate_handler(&self, _handler: PopstateHandler) -> bool {
		false
	}
}

/// Entry stack of a [`MemoryEnvironment`].
#[derive(Debug)]
struct MemoryEntries {
	entries: Vec<String>,
	index: usize,
}

/// An in-memory history environment.
///
/// Stands in for the browser: keeps an entry stack with a cursor, and
/// `back`/`forward` fire the registered popstate handler synchronously
/// with the new current path, the way browsers deliver the event.
pub struct MemoryEnvironment {
	inner: RwLock<MemoryEntries>,
	handler: RwLock<Option<PopstateHandler>>,
}

impl Default for MemoryEnvironment {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryEnvironment {
	/// Creates an environment with a single `/` entry.
	pub fn new() -> Self {
		Self::with_initial_path("/")
	}

	/// Creates an environment whose first entry is `path`.
	pub fn with_initial_path(path: impl Into<String>) -> Self {
		Self {
			inner: RwLock::new(MemoryEntries {
				entries: vec![path.into()],
				index: 0,
			}),
			handler: RwLock::new(None),
		}
	}

	/// Returns the number of history entries.
	pub fn entry_count(&self) -> usize {
		self.inner.read().entries.len()
	}

	/// Navigates one entry back, firing the popstate handler. No-op at
	/// the oldest entry.
	pub fn back(&self) {
		let moved = {
			let mut inner = self.inner.write();
			if inner.index == 0 {
				false
			} else {
				inner.index -= 1;
				true
			}
		};
		if moved {
			self.fire_popstate();
		}
	}

	/// Navigates one entry forward, firing the popstate handler. No-op at
	/// the newest entry.
	pub fn forward(&self) {
		let moved = {
			let mut inner = self.inner.write();
			if inner.index + 1 >= inner.entries.len() {
				false
			} else {
				inner.index += 1;
				true
			}
		};
		if moved {
			self.fire_popstate();
		}
	}

	/// Invokes the registered handler with the current path.
	///
	/// The entry lock is released before the handler runs; the handler is
	/// expected to call back into `replace_entry`.
	fn fire_popstate(&self) {
		let handler = self.handler.read().clone();
		if let Some(handler) = handler {
			handler(self.current_path());
		}
	}
}

impl HistoryEnvironment for MemoryEnvironment {
	fn is_interactive(&self) -> bool {
		true
	}

	fn current_path(&self) -> String {
		let inner = self.inner.read();
		inner.entries[inner.index].clone()
	}

	fn push_entry(&self, path: &str) {
		let mut inner = self.inner.write();
		let next = inner.index + 1;
		// Pushing from a mid-stack position discards the forward entries,
		// matching browser history semantics.
		inner.entries.truncate(next);
		inner.entries.push(path.to_string());
		inner.index = next;
	}

	fn replace_entry(&self, path: &str) {
		let mut inner = self.inner.write();
		let index = inner.index;
		inner.entries[index] = path.to_string();
	}

	fn set_popstate_handler(&self, handler: PopstateHandler) -> bool {
		*self.handler.write() = Some(handler);
		true
	}
}

/// Keeps the active route consistent with native back/forward navigation.
///
/// The underlying router does not observe history movement on its own;
/// this service subscribes once, at startup, and replays the environment's
/// current path into [`Router::replace`]. Two states only: uninstalled
/// (initial) and installed (terminal for the process lifetime).
#[derive(Debug, Default)]
pub struct HistorySync {
	installed: AtomicBool,
}

impl HistorySync {
	/// Creates an uninstalled synchronizer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Installs the back/forward listener for `router`.
	///
	/// Skipped entirely on non-interactive hosts and on repeat calls;
	/// returns whether a listener was registered by this call.
	///
	/// A failed `replace` (path matching no declared route) is caught and
	/// logged here, never propagated: the application stays on its current
	/// route.
	pub fn install(&self, router: &Arc<Router>) -> bool {
		let env = router.environment();
		if !env.is_interactive() {
			tracing::debug!("host has no navigable history, skipping history sync");
			return false;
		}
		if self.installed.swap(true, Ordering::SeqCst) {
			return false;
		}

		let router = Arc::clone(router);
		env.set_popstate_handler(Arc::new(move |path: String| {
			if let Err(err) = router.replace(&path) {
				tracing::error!(%path, %err, "history sync could not replace route");
			}
		}))
	}

	/// Returns whether the listener has been installed.
	pub fn is_installed(&self) -> bool {
		self.installed.load(Ordering::SeqCst)
	}
}
