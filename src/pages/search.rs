//! Cocktail search page.

use crate::page::{Page, el};

/// Renders the search page.
pub fn search_page() -> Page {
	el("main")
		.class("bg-back")
		.child(el("h1").class("font-custom text-title").text("Search cocktails"))
		.child(
			el("form")
				.child(
					el("input")
						.attr("type", "search")
						.attr("name", "q")
						.attr("placeholder", "Margarita, Negroni, ..."),
				)
				.child(
					el("button")
						.class("bg-custom-orange")
						.attr("type", "submit")
						.text("Search"),
				),
		)
		.into()
}
