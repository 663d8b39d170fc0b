//! Path pattern matching for client-side routes.
//!
//! Reimplements the matching semantics the application relies on:
//! first-declared-wins resolution happens in the route table, while this
//! module handles a single pattern. Syntax:
//!
//! - literal segments match exactly (`/SearchCocktail`),
//! - `:name` captures one path segment, excluding `/` (`/cocktail/:id`),
//! - `*name` captures the rest of the path, including `/`.

use std::fmt;

use super::error::PatternError;

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// Parameters extracted from a matched path.
///
/// Preserves the order in which parameters appear in the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
	entries: Vec<(String, String)>,
}

impl RouteParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the value for a named parameter, if present.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Appends a parameter value. `get` returns the first occurrence of a
	/// name; patterns cannot declare a name twice, so each name appears
	/// once.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.entries.push((name.into(), value.into()));
	}

	/// Iterates over `(name, value)` pairs in pattern order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Returns the number of parameters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether there are no parameters.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for RouteParams {
	fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(n, v)| (n.into(), v.into()))
				.collect(),
		}
	}
}

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled regex, anchored at both ends.
	regex: regex::Regex,
	/// Parameter names in pattern order.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns [`PatternError`] if the pattern exceeds the length or
	/// segment bounds, or compiles to an invalid regex (which includes
	/// repeated parameter names within one pattern).
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(PatternError::TooLong {
				actual: pattern.len(),
				max: MAX_PATTERN_LENGTH,
			});
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(PatternError::TooManySegments {
				actual: segment_count,
				max: MAX_PATH_SEGMENTS,
			});
		}

		let (regex_str, param_names) = Self::compile(pattern);

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| PatternError::Regex(e.to_string()))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
		})
	}

	/// Compiles a pattern into a regex string and ordered parameter names.
	fn compile(pattern: &str) -> (String, Vec<String>) {
		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();

		let mut first = true;
		for segment in pattern.split('/') {
			if !first {
				regex_str.push('/');
			}
			first = false;

			if let Some(name) = segment.strip_prefix(':') {
				param_names.push(name.to_string());
				regex_str.push_str(&format!("(?P<{name}>[^/]+)"));
			} else if let Some(name) = segment.strip_prefix('*') {
				// Catch-all: matches across path separators.
				param_names.push(name.to_string());
				regex_str.push_str(&format!("(?P<{name}>.*)"));
			} else {
				regex_str.push_str(&regex::escape(segment));
			}
		}

		regex_str.push('$');
		(regex_str, param_names)
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether this pattern contains no parameters.
	pub fn is_static(&self) -> bool {
		self.param_names.is_empty()
	}

	/// Checks whether the pattern matches a path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Attempts to match a path, extracting named parameters.
	pub fn matches(&self, path: &str) -> Option<RouteParams> {
		self.regex.captures(path).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| caps.name(name).map(|m| (name.as_str(), m.as_str())))
				.collect()
		})
	}

	/// Generates a concrete path from this pattern and parameter values.
	///
	/// # Errors
	///
	/// Returns [`PatternError::MissingParameter`] if a parameter in the
	/// pattern has no value in `params`.
	pub fn to_path(&self, params: &RouteParams) -> Result<String, PatternError> {
		let mut out = String::new();

		let mut first = true;
		for segment in self.pattern.split('/') {
			if !first {
				out.push('/');
			}
			first = false;

			let name = segment
				.strip_prefix(':')
				.or_else(|| segment.strip_prefix('*'));
			match name {
				Some(name) => {
					let value = params
						.get(name)
						.ok_or_else(|| PatternError::MissingParameter(name.to_string()))?;
					out.push_str(value);
				}
				None => out.push_str(segment),
			}
		}

		Ok(out)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl fmt::Display for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
