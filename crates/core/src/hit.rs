//! Search hits as delivered by the hosted index.

use serde::{Deserialize, Serialize};

/// One search result.
///
/// Only the fields the dropdown consumes are modelled; everything else the
/// provider sends is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
	/// Destination opened when the hit is activated.
	pub url: String,
	/// Provider-annotated fields, absent for malformed hits.
	#[serde(
		rename = "_highlightResult",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub highlight_result: Option<HighlightResult>,
}

/// Highlighted variants of a hit's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightResult {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<HighlightField>,
}

/// A single highlighted field with emphasis markup around matched characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightField {
	pub value: String,
}

impl Hit {
	/// Build a hit with a highlighted title.
	pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			highlight_result: Some(HighlightResult {
				title: Some(HighlightField {
					value: title.into(),
				}),
			}),
		}
	}

	/// Build a hit the provider returned without any highlight data.
	pub fn without_title(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			highlight_result: None,
		}
	}

	/// Return the highlighted title when present and non-empty.
	pub fn highlighted_title(&self) -> Option<&str> {
		self.highlight_result
			.as_ref()
			.and_then(|result| result.title.as_ref())
			.map(|field| field.value.as_str())
			.filter(|value| !value.is_empty())
	}
}

/// The unit pushed in by the query-execution side: the hits for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
	#[serde(default)]
	pub hits: Vec<Hit>,
	#[serde(default)]
	pub query: String,
}

impl SearchResponse {
	pub fn new(hits: Vec<Hit>, query: impl Into<String>) -> Self {
		Self {
			hits,
			query: query.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_provider_shape() {
		let raw = r#"{
			"url": "https://web.dev/lcp/",
			"objectID": "abc",
			"_highlightResult": {
				"title": { "value": "<strong>L</strong>argest paint", "matchLevel": "full" },
				"description": { "value": "ignored" }
			}
		}"#;

		let hit: Hit = serde_json::from_str(raw).expect("hit");
		assert_eq!(hit.url, "https://web.dev/lcp/");
		assert_eq!(hit.highlighted_title(), Some("<strong>L</strong>argest paint"));
	}

	#[test]
	fn missing_or_empty_title_is_absent() {
		let bare: Hit = serde_json::from_str(r#"{ "url": "/a" }"#).expect("bare");
		assert_eq!(bare.highlighted_title(), None);

		let no_title: Hit =
			serde_json::from_str(r#"{ "url": "/b", "_highlightResult": {} }"#).expect("no title");
		assert_eq!(no_title.highlighted_title(), None);

		assert_eq!(Hit::new("/c", "").highlighted_title(), None);
	}

	#[test]
	fn response_defaults_missing_fields() {
		let response: SearchResponse = serde_json::from_str("{}").expect("response");
		assert!(response.hits.is_empty());
		assert!(response.query.is_empty());
	}
}
