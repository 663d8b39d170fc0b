//! Presentation tokens consumed by the external styling layer.
//!
//! Nothing at runtime reads these values; they exist so the styling
//! collaborator can be fed one declarative record.

use std::collections::BTreeMap;

use serde::Serialize;

/// Theme configuration: font stacks, grid tokens, and the color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
	/// Font family tokens, each a preference-ordered stack.
	pub font_families: BTreeMap<String, Vec<String>>,
	/// Custom grid-template-columns tokens.
	pub grid_template_columns: BTreeMap<String, String>,
	/// Named colors, as hex strings.
	pub colors: BTreeMap<String, String>,
}

impl Default for Theme {
	fn default() -> Self {
		let font_families = BTreeMap::from([
			(
				"sans".to_string(),
				vec!["Poppins".to_string(), "sans-serif".to_string()],
			),
			(
				"custom".to_string(),
				vec!["Plaster".to_string(), "Plaster".to_string()],
			),
		]);

		let grid_template_columns =
			BTreeMap::from([("70/30".to_string(), "70% 28%".to_string())]);

		let colors = BTreeMap::from(
			[
				("custom-orange", "#fb6b35"),
				("custom-light-orange", "#FAE1CB"),
				("back", "#FFFDF6"),
				("title", "#5f3919"),
				("blue", "#C4D5FB"),
			]
			.map(|(k, v)| (k.to_string(), v.to_string())),
		);

		Self {
			font_families,
			grid_template_columns,
			colors,
		}
	}
}

impl Theme {
	/// Serializes the theme to a JSON value for the styling collaborator.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
	}
}
