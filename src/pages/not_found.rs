//! Fallback page for unmatched paths.

use crate::page::{Page, el};

/// Renders the not-found page.
pub fn not_found_page() -> Page {
	el("main")
		.class("bg-back")
		.child(el("h1").class("font-custom text-title").text("Nothing here"))
		.child(
			el("a")
				.attr("href", "/")
				.class("text-custom-orange")
				.text("Back to the bar"),
		)
		.into()
}
