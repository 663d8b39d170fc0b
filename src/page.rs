//! A unified representation of renderable content.
//!
//! `Page` is what page components produce. The router treats it as opaque;
//! the demo binary renders it to an HTML string.

use std::borrow::Cow;

/// A renderable view.
#[derive(Debug)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// Multiple views without a wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

impl Page {
	/// Creates a text node.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(text.into())
	}

	/// Renders the view to an HTML string.
	pub fn render_html(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}

	fn write_html(&self, out: &mut String) {
		match self {
			Self::Element(element) => element.write_html(out),
			Self::Text(text) => out.push_str(&escape_text(text)),
			Self::Fragment(children) => {
				for child in children {
					child.write_html(out);
				}
			}
			Self::Empty => {}
		}
	}
}

impl From<PageElement> for Page {
	fn from(element: PageElement) -> Self {
		Self::Element(element)
	}
}

/// A DOM element in the view tree.
#[derive(Debug)]
pub struct PageElement {
	/// The tag name.
	tag: Cow<'static, str>,
	/// HTML attributes.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<Page>,
	/// Void elements render without a closing tag.
	is_void: bool,
}

impl PageElement {
	/// Creates an element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a `class` attribute.
	pub fn class(self, value: impl Into<Cow<'static, str>>) -> Self {
		self.attr("class", value)
	}

	/// Appends a child view.
	pub fn child(mut self, child: impl Into<Page>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Appends a text child.
	pub fn text(self, text: impl Into<Cow<'static, str>>) -> Self {
		self.child(Page::text(text))
	}

	fn write_html(&self, out: &mut String) {
		out.push('<');
		out.push_str(&self.tag);
		for (name, value) in &self.attrs {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&escape_attr(value));
			out.push('"');
		}
		out.push('>');

		if self.is_void {
			return;
		}

		for child in &self.children {
			child.write_html(out);
		}
		out.push_str("</");
		out.push_str(&self.tag);
		out.push('>');
	}
}

/// Creates an element view; shorthand used by page components.
pub fn el(tag: impl Into<Cow<'static, str>>) -> PageElement {
	PageElement::new(tag)
}

fn escape_text(text: &str) -> String {
	text.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
	escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_renders_nothing() {
		assert_eq!(Page::Empty.render_html(), "");
	}

	#[test]
	fn test_text_is_escaped() {
		assert_eq!(Page::text("a < b & c").render_html(), "a &lt; b &amp; c");
	}

	#[test]
	fn test_element_with_attrs_and_children() {
		let page: Page = el("div")
			.class("menu")
			.child(el("h1").text("Cocktails"))
			.text("browse")
			.into();

		assert_eq!(
			page.render_html(),
			"<div class=\"menu\"><h1>Cocktails</h1>browse</div>"
		);
	}

	#[test]
	fn test_void_element_has_no_closing_tag() {
		let page: Page = el("img").attr("src", "/glass.png").into();
		assert_eq!(page.render_html(), "<img src=\"/glass.png\">");
	}

	#[test]
	fn test_fragment_concatenates() {
		let page = Page::Fragment(vec![Page::text("a"), Page::text("b")]);
		assert_eq!(page.render_html(), "ab");
	}

	#[test]
	fn test_attr_values_escape_quotes() {
		let page: Page = el("div").attr("title", "say \"hi\"").into();
		assert_eq!(page.render_html(), "<div title=\"say &quot;hi&quot;\"></div>");
	}
}
