//! A minimal reactive cell.
//!
//! `Signal<T>` holds a value shared across clones and notifies subscribers
//! on change. There is no dependency-tracking runtime here; subscribers
//! are registered explicitly, which is all the navigation state needs.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

struct SignalInner<T> {
	value: RwLock<T>,
	subscribers: RwLock<Vec<Subscriber<T>>>,
}

/// A shared value cell with change notification.
///
/// Clones are cheap and share the same underlying value.
pub struct Signal<T> {
	inner: Arc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Signal").field(&*self.inner.value.read()).finish()
	}
}

impl<T> Signal<T> {
	/// Creates a signal holding `value`.
	pub fn new(value: T) -> Self {
		Self {
			inner: Arc::new(SignalInner {
				value: RwLock::new(value),
				subscribers: RwLock::new(Vec::new()),
			}),
		}
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.inner.value.read().clone()
	}

	/// Replaces the value and notifies subscribers.
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.inner.value.write() = value.clone();
		self.notify(&value);
	}

	/// Mutates the value in place and notifies subscribers.
	pub fn update<F: FnOnce(&mut T)>(&self, f: F)
	where
		T: Clone,
	{
		let snapshot = {
			let mut value = self.inner.value.write();
			f(&mut value);
			value.clone()
		};
		self.notify(&snapshot);
	}

	/// Reads the value through `f` without cloning.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.value.read())
	}

	/// Registers a callback invoked after every change.
	pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) {
		self.inner.subscribers.write().push(Box::new(f));
	}

	/// Runs subscribers against a snapshot of the new value. The value
	/// lock is released before subscribers execute, so they may read the
	/// signal freely.
	fn notify(&self, value: &T) {
		for subscriber in self.inner.subscribers.read().iter() {
			subscriber(value);
		}
	}
}
