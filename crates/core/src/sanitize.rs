//! Allow-list escaping for provider-highlighted titles.
//!
//! The provider wraps matched characters in a single emphasis tag. Everything
//! else in a title is untrusted: it is escaped first, and only the escaped
//! forms of the emphasis tag are turned back into markup afterwards.

use std::borrow::Cow;

const OPEN: &str = "<strong>";
const CLOSE: &str = "</strong>";
const ESCAPED_OPEN: &str = "&lt;strong&gt;";
const ESCAPED_CLOSE: &str = "&lt;/strong&gt;";

/// Escape a highlighted title for direct insertion into markup.
///
/// Backticks are dropped, every HTML-significant character is escaped, and
/// `<strong>`/`</strong>` are restored.
pub fn sanitize_title(title: &str) -> String {
	let stripped: Cow<'_, str> = if title.contains('`') {
		Cow::Owned(title.replace('`', ""))
	} else {
		Cow::Borrowed(title)
	};

	html_escape::encode_quoted_attribute(&stripped)
		.replace(ESCAPED_OPEN, OPEN)
		.replace(ESCAPED_CLOSE, CLOSE)
}

/// A run of title text, either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
	pub text: String,
	pub emphasized: bool,
}

/// Split a title into plain and emphasized runs with entities decoded.
///
/// Used by front-ends that style text themselves instead of emitting HTML.
/// Unbalanced tags are tolerated: a stray close tag is ignored and an
/// unclosed open tag emphasizes the rest of the title.
pub fn highlight_segments(title: &str) -> Vec<HighlightSegment> {
	let sanitized = sanitize_title(title);
	let mut segments = Vec::new();
	let mut emphasized = false;
	let mut rest = sanitized.as_str();

	loop {
		let marker = if emphasized { CLOSE } else { OPEN };
		let (chunk, next) = match rest.find(marker) {
			Some(pos) => (&rest[..pos], Some(&rest[pos + marker.len()..])),
			None => (rest, None),
		};

		// Stray tags of the opposite kind carry no meaning inside a run.
		let text = chunk.replace(OPEN, "").replace(CLOSE, "");
		push_segment(&mut segments, &text, emphasized);

		match next {
			Some(remaining) => {
				rest = remaining;
				emphasized = !emphasized;
			}
			None => break,
		}
	}

	segments
}

fn push_segment(segments: &mut Vec<HighlightSegment>, raw: &str, emphasized: bool) {
	if raw.is_empty() {
		return;
	}
	let text = html_escape::decode_html_entities(raw).into_owned();
	match segments.last_mut() {
		Some(last) if last.emphasized == emphasized => last.text.push_str(&text),
		_ => segments.push(HighlightSegment { text, emphasized }),
	}
}
