use thiserror::Error;

/// A logical key name that the result list does not understand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown navigation key '{0}' (expected Home, End, ArrowUp, ArrowDown or Enter)")]
pub struct UnknownKey(pub String);

/// Invalid configuration values detected by [`ListboxConfig::validate`](crate::ListboxConfig::validate).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
	/// Entry ids are derived from the prefix, so it must be a usable HTML id.
	#[error("listbox.id_prefix must be non-empty and contain no whitespace (value: '{0}')")]
	InvalidIdPrefix(String),

	#[error("listbox.label must not be empty")]
	EmptyLabel,

	#[error("fallback.query_param must not be empty")]
	EmptyQueryParam,
}
