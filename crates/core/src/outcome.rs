use serde::Serialize;

/// How an interactive or replayed session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickOutcome {
	/// Whether a hit was activated.
	pub accepted: bool,
	pub query: String,
	/// URL handed to the navigator, when a hit was activated.
	pub url: Option<String>,
}

impl PickOutcome {
	pub fn accepted(query: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			url: Some(url.into()),
		}
	}

	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			url: None,
		}
	}
}
