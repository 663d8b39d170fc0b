//! Error types for routing and navigation.

use thiserror::Error;

/// Error raised while compiling a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
	/// Pattern string exceeds the maximum allowed length.
	#[error("pattern length {actual} exceeds maximum of {max} bytes")]
	TooLong {
		/// Actual pattern length in bytes.
		actual: usize,
		/// Maximum allowed length in bytes.
		max: usize,
	},
	/// Pattern has more path segments than allowed.
	#[error("pattern has {actual} path segments, exceeding maximum of {max}")]
	TooManySegments {
		/// Actual segment count.
		actual: usize,
		/// Maximum allowed segment count.
		max: usize,
	},
	/// Pattern compiled to an invalid or oversized regex.
	#[error("failed to compile pattern regex: {0}")]
	Regex(String),
	/// A parameter required for reverse URL generation was not supplied.
	#[error("missing value for parameter ':{0}'")]
	MissingParameter(String),
}

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// A requested path matched no declared route.
	///
	/// Always caught and logged where the history synchronizer invokes
	/// `replace`; one failed navigation must not take the application down.
	#[error("no route matches path: {0}")]
	NavigationMismatch(String),
	/// Two routes were declared with the same name.
	#[error("duplicate route name: {0}")]
	DuplicateName(String),
	/// Reverse lookup referenced a route name that was never declared.
	#[error("unknown route name: {0}")]
	UnknownRouteName(String),
	/// Invalid pattern in a route declaration.
	#[error(transparent)]
	Pattern(#[from] PatternError),
}
