//! Pure rendering of the result list state.
//!
//! [`render`] maps state to a [`View`]; the view's `Display` impl produces the
//! markup contract (listbox container, `<prefix>--<index>` entry ids, active
//! entry flagged with `aria-selected`). Non-HTML front-ends consume the
//! [`View`] directly.

use std::fmt;

use html_escape::{encode_double_quoted_attribute, encode_text};
use url::Url;

use crate::config::ListboxConfig;
use crate::cursor::Cursor;
use crate::hit::Hit;
use crate::sanitize::sanitize_title;

const CONTAINER_CLASS: &str = "search-results";
const EMPTY_CLASS: &str = "search-results--empty";
const LINK_CLASS: &str = "search-results__link";
const ACTIVE_LINK_CLASS: &str = "search-results__link--active";

/// Everything rendering depends on.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
	pub hits: &'a [Hit],
	pub cursor: Cursor,
	pub visible: bool,
	pub query: &'a str,
}

/// What the dropdown shows for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
	/// Dropdown closed: an empty container hidden from assistive technology.
	Hidden { container_id: String },
	/// Nothing typed and nothing found.
	Empty,
	/// A query without hits: offer a general web search instead.
	NoSuggestions(NoSuggestions),
	Listbox(Listbox<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoSuggestions {
	pub message: String,
	pub link_text: String,
	pub href: Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listbox<'a> {
	pub container_id: String,
	pub label: String,
	pub entries: Vec<Entry<'a>>,
}

/// One rendered hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
	/// Position in the result set (not in the rendered list).
	pub index: usize,
	pub id: String,
	pub href: &'a str,
	/// Highlighted title as received from the provider.
	pub title: &'a str,
	/// Title after allow-list escaping, safe to embed in markup.
	pub title_html: String,
	pub active: bool,
}

/// Map state to the view shown for it.
pub fn render<'a>(config: &ListboxConfig, input: RenderInput<'a>) -> View<'a> {
	if !input.visible {
		return View::Hidden {
			container_id: config.container_id(),
		};
	}

	if input.hits.is_empty() {
		if input.query.is_empty() {
			return View::Empty;
		}
		let fallback = &config.fallback;
		return View::NoSuggestions(NoSuggestions {
			message: fallback.message.clone(),
			link_text: fallback.link_text.clone(),
			href: fallback.link_for(input.query),
		});
	}

	let entries = input
		.hits
		.iter()
		.enumerate()
		.filter_map(|(index, hit)| {
			let title = hit.highlighted_title()?;
			Some(Entry {
				index,
				id: config.entry_id(index),
				href: hit.url.as_str(),
				title,
				title_html: sanitize_title(title),
				active: input.cursor.index() == Some(index),
			})
		})
		.collect();

	View::Listbox(Listbox {
		container_id: config.container_id(),
		label: config.listbox.label.clone(),
		entries,
	})
}

impl View<'_> {
	/// Whether the view contributes anything visible.
	pub fn is_blank(&self) -> bool {
		matches!(self, View::Hidden { .. } | View::Empty)
	}
}

impl fmt::Display for View<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			View::Hidden { container_id } => write!(
				f,
				r#"<div id="{}" class="{CONTAINER_CLASS}" aria-hidden="true"></div>"#,
				encode_double_quoted_attribute(container_id),
			),
			View::Empty => Ok(()),
			View::NoSuggestions(empty) => write!(
				f,
				r#"<div class="{CONTAINER_CLASS} {EMPTY_CLASS}" role="status">{} <a href="{}" target="_blank" rel="noopener">{}</a></div>"#,
				encode_text(&empty.message),
				encode_double_quoted_attribute(empty.href.as_str()),
				encode_text(&empty.link_text),
			),
			View::Listbox(listbox) => {
				write!(
					f,
					r#"<div id="{}" class="{CONTAINER_CLASS}" role="listbox" aria-label="{}">"#,
					encode_double_quoted_attribute(&listbox.container_id),
					encode_double_quoted_attribute(&listbox.label),
				)?;
				for entry in &listbox.entries {
					writeln!(f)?;
					write!(f, "{entry}")?;
				}
				f.write_str("\n</div>")
			}
		}
	}
}

impl fmt::Display for Entry<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let class = if self.active {
			format!("{LINK_CLASS} {ACTIVE_LINK_CLASS}")
		} else {
			LINK_CLASS.to_string()
		};
		write!(
			f,
			r#"<a id="{}" class="{class}" role="option" aria-selected="{}" tabindex="-1" href="{}">{}</a>"#,
			encode_double_quoted_attribute(&self.id),
			self.active,
			encode_double_quoted_attribute(self.href),
			self.title_html,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hits() -> Vec<Hit> {
		vec![
			Hit::new("https://web.dev/lcp/", "<strong>L</strong>argest Contentful Paint"),
			Hit::without_title("https://web.dev/untitled/"),
			Hit::new("https://web.dev/cls/?a=1&b=2", "Cumulative `Layout` Shift"),
		]
	}

	fn input<'a>(hits: &'a [Hit], cursor: Cursor, visible: bool, query: &'a str) -> RenderInput<'a> {
		RenderInput {
			hits,
			cursor,
			visible,
			query,
		}
	}

	#[test]
	fn hidden_ignores_hits() {
		let config = ListboxConfig::default();
		let hits = hits();
		let view = render(&config, input(&hits, Cursor::at(0), false, "paint"));
		assert!(view.is_blank());
		insta::assert_snapshot!(
			view.to_string(),
			@r#"<div id="search-results-list" class="search-results" aria-hidden="true"></div>"#
		);
	}

	#[test]
	fn empty_query_without_hits_renders_nothing() {
		let config = ListboxConfig::default();
		let view = render(&config, input(&[], Cursor::NONE, true, ""));
		assert_eq!(view, View::Empty);
		assert_eq!(view.to_string(), "");
	}

	#[test]
	fn no_suggestions_links_to_web_search() {
		let config = ListboxConfig::default();
		let view = render(&config, input(&[], Cursor::NONE, true, "cats"));
		let View::NoSuggestions(empty) = &view else {
			panic!("expected fallback view, got {view:?}");
		};
		let q = empty
			.href
			.query_pairs()
			.find(|(key, _)| key == "q")
			.map(|(_, value)| value.into_owned());
		assert_eq!(q.as_deref(), Some("web.dev cats"));
		insta::assert_snapshot!(
			view.to_string(),
			@r#"<div class="search-results search-results--empty" role="status">There are no suggestions for your query, try <a href="https://www.google.com/search?q=web.dev+cats" target="_blank" rel="noopener">Google search</a></div>"#
		);
	}

	#[test]
	fn listbox_skips_untitled_hits_and_marks_active() {
		let config = ListboxConfig::default();
		let hits = hits();
		let view = render(&config, input(&hits, Cursor::at(2), true, "s"));
		let View::Listbox(listbox) = &view else {
			panic!("expected listbox, got {view:?}");
		};
		let indices: Vec<usize> = listbox.entries.iter().map(|entry| entry.index).collect();
		assert_eq!(indices, vec![0, 2]);
		assert!(listbox.entries[1].active);

		insta::assert_snapshot!(view.to_string(), @r#"
		<div id="search-results-list" class="search-results" role="listbox" aria-label="Search results">
		<a id="search-results--0" class="search-results__link" role="option" aria-selected="false" tabindex="-1" href="https://web.dev/lcp/"><strong>L</strong>argest Contentful Paint</a>
		<a id="search-results--2" class="search-results__link search-results__link--active" role="option" aria-selected="true" tabindex="-1" href="https://web.dev/cls/?a=1&amp;b=2">Cumulative Layout Shift</a>
		</div>
		"#);
	}

	#[test]
	fn script_in_title_is_escaped_in_markup() {
		let config = ListboxConfig::default();
		let hits = vec![Hit::new(
			"/x",
			"foo <strong>bar</strong> <script>baz</script>",
		)];
		let markup = render(&config, input(&hits, Cursor::NONE, true, "bar")).to_string();
		assert!(markup.contains("foo <strong>bar</strong> &lt;script&gt;baz&lt;/script&gt;"));
		assert!(!markup.contains("<script>"));
	}
}
