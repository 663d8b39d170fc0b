//! Landing page.

use crate::page::{Page, el};

/// Renders the home page.
pub fn home_page() -> Page {
	el("main")
		.class("bg-back grid grid-cols-70/30")
		.child(
			el("section")
				.child(el("h1").class("font-custom text-title").text("MixFinder"))
				.child(
					el("p")
						.class("font-sans")
						.text("Browse cocktails or search for one by name."),
				),
		)
		.child(
			el("nav").child(
				el("a")
					.attr("href", "/SearchCocktail")
					.class("text-custom-orange")
					.text("Search cocktails"),
			),
		)
		.into()
}
