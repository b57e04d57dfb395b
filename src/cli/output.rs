use anyhow::Result;
use sitesearch_core::PickOutcome;

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &PickOutcome) {
	match (&outcome.url, outcome.accepted) {
		(Some(url), true) => println!("{url}"),
		_ => println!("No hit opened (query: '{}')", outcome.query),
	}
}

/// Format the outcome as pretty-printed JSON.
pub(crate) fn format_outcome_json(outcome: &PickOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &PickOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_url() {
		let outcome = PickOutcome::accepted("cls", "https://web.dev/cls/");
		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["query"], "cls");
		assert_eq!(value["url"], "https://web.dev/cls/");
	}

	#[test]
	fn json_format_uses_null_when_cancelled() {
		let outcome = PickOutcome::cancelled("cls");
		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], false);
		assert!(value["url"].is_null());
	}
}
