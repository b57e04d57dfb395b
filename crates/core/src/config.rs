//! Labels, identifiers and fallback search settings for the dropdown.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

const DEFAULT_ID_PREFIX: &str = "search-results";
const DEFAULT_LABEL: &str = "Search results";
const DEFAULT_ENGINE_URL: &str = "https://www.google.com/search";
const DEFAULT_QUERY_PARAM: &str = "q";
const DEFAULT_SITE_BIAS: &str = "web.dev";
const DEFAULT_MESSAGE: &str = "There are no suggestions for your query, try";
const DEFAULT_LINK_TEXT: &str = "Google search";

/// Complete dropdown configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListboxConfig {
	pub listbox: ListboxLabels,
	pub fallback: FallbackSearch,
}

/// Identifiers and accessible labels of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListboxLabels {
	/// Prefix for the container id and every `<prefix>--<index>` entry id.
	pub id_prefix: String,
	/// Accessible name of the listbox.
	pub label: String,
}

impl Default for ListboxLabels {
	fn default() -> Self {
		Self {
			id_prefix: DEFAULT_ID_PREFIX.to_string(),
			label: DEFAULT_LABEL.to_string(),
		}
	}
}

/// General web search offered when the index has no suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSearch {
	pub engine_url: Url,
	pub query_param: String,
	/// Prepended to the query to bias results towards one site.
	pub site_bias: String,
	pub message: String,
	pub link_text: String,
}

impl Default for FallbackSearch {
	fn default() -> Self {
		Self {
			engine_url: Url::parse(DEFAULT_ENGINE_URL).expect("default engine URL must parse"),
			query_param: DEFAULT_QUERY_PARAM.to_string(),
			site_bias: DEFAULT_SITE_BIAS.to_string(),
			message: DEFAULT_MESSAGE.to_string(),
			link_text: DEFAULT_LINK_TEXT.to_string(),
		}
	}
}

impl FallbackSearch {
	/// Build the web search link for `query`, encoding `"<site_bias> <query>"`
	/// into the configured query parameter. Existing parameters on the engine
	/// URL are preserved.
	///
	/// The value is form-encoded, so a space becomes `+` (`q=web.dev+cats`)
	/// rather than the `%20` a browser's `encodeURIComponent` produces. Search
	/// engines decode both the same way.
	pub fn link_for(&self, query: &str) -> Url {
		let biased = if self.site_bias.is_empty() {
			query.to_string()
		} else {
			format!("{} {}", self.site_bias, query)
		};

		let mut url = self.engine_url.clone();
		url.query_pairs_mut().append_pair(&self.query_param, &biased);
		url
	}
}

impl ListboxConfig {
	/// Id of the list container.
	pub fn container_id(&self) -> String {
		format!("{}-list", self.listbox.id_prefix)
	}

	/// Id of the entry at `index`, referenced by `aria-activedescendant`.
	pub fn entry_id(&self, index: usize) -> String {
		format!("{}--{}", self.listbox.id_prefix, index)
	}

	/// Reject values that would produce broken markup.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let prefix = &self.listbox.id_prefix;
		if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
			return Err(ConfigError::InvalidIdPrefix(prefix.clone()));
		}
		if self.listbox.label.trim().is_empty() {
			return Err(ConfigError::EmptyLabel);
		}
		if self.fallback.query_param.is_empty() {
			return Err(ConfigError::EmptyQueryParam);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn query_value(url: &Url, key: &str) -> Option<String> {
		url.query_pairs()
			.find(|(name, _)| name == key)
			.map(|(_, value)| value.into_owned())
	}

	#[test]
	fn fallback_link_encodes_site_bias_and_query() {
		let fallback = FallbackSearch::default();
		let link = fallback.link_for("cats");
		assert_eq!(query_value(&link, "q").as_deref(), Some("web.dev cats"));
		assert_eq!(link.as_str(), "https://www.google.com/search?q=web.dev+cats");
	}

	#[test]
	fn fallback_link_encodes_reserved_characters() {
		let link = FallbackSearch::default().link_for("a&b=c #d");
		assert_eq!(query_value(&link, "q").as_deref(), Some("web.dev a&b=c #d"));
		assert!(!link.as_str().contains("a&b"));
	}

	#[test]
	fn fallback_link_keeps_existing_parameters() {
		let fallback = FallbackSearch {
			engine_url: Url::parse("https://duckduckgo.com/?ia=web").expect("url"),
			site_bias: String::new(),
			..FallbackSearch::default()
		};
		let link = fallback.link_for("dogs");
		assert_eq!(query_value(&link, "ia").as_deref(), Some("web"));
		assert_eq!(query_value(&link, "q").as_deref(), Some("dogs"));
	}

	#[test]
	fn entry_ids_use_double_dash() {
		let config = ListboxConfig::default();
		assert_eq!(config.entry_id(3), "search-results--3");
		assert_eq!(config.container_id(), "search-results-list");
	}

	#[test]
	fn validate_rejects_broken_prefixes() {
		let mut config = ListboxConfig::default();
		assert!(config.validate().is_ok());

		config.listbox.id_prefix = "has space".into();
		assert_eq!(
			config.validate(),
			Err(ConfigError::InvalidIdPrefix("has space".into()))
		);

		config.listbox.id_prefix = "ok".into();
		config.listbox.label = "  ".into();
		assert_eq!(config.validate(), Err(ConfigError::EmptyLabel));
	}

	#[test]
	fn deserializes_partial_sections() {
		let config: ListboxConfig = serde_json::from_str(
			r#"{ "fallback": { "site_bias": "developer.chrome.com" } }"#,
		)
		.expect("config");
		assert_eq!(config.fallback.site_bias, "developer.chrome.com");
		assert_eq!(config.fallback.query_param, "q");
		assert_eq!(config.listbox, ListboxLabels::default());
	}
}
