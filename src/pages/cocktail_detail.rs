//! Cocktail detail page.

use crate::page::{Page, el};
use crate::router::RouteParams;

/// Renders the detail page for the cocktail in the `id` route parameter.
pub fn cocktail_detail_page(params: &RouteParams) -> Page {
	let id = params.get("id").unwrap_or_default();

	el("main")
		.class("bg-back")
		.child(el("h1").class("font-custom text-title").text("Cocktail Details"))
		.child(
			el("article")
				.attr("data-cocktail-id", id.to_string())
				.child(el("p").class("font-sans").text(format!("Cocktail #{id}"))),
		)
		.into()
}
