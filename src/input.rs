//! Reading hits pushed in by the query side.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sitesearch_core::{Hit, SearchResponse};
use tracing::{debug, warn};

/// Accepted input shapes: a full response or a bare list of hits.
#[derive(Deserialize)]
#[serde(untagged)]
enum HitsDocument {
	Response(SearchResponse),
	Hits(Vec<Hit>),
}

/// Read a response from `path`, or from stdin for `None` and `-`.
pub(crate) fn read_response(path: Option<&Path>) -> Result<SearchResponse> {
	let raw = match path {
		Some(path) if path != Path::new("-") => fs::read_to_string(path)
			.with_context(|| format!("failed to read hits from {}", path.display()))?,
		_ => {
			let mut buffer = String::new();
			io::stdin()
				.read_to_string(&mut buffer)
				.context("failed to read hits from stdin")?;
			buffer
		}
	};
	parse_response(&raw)
}

pub(crate) fn parse_response(raw: &str) -> Result<SearchResponse> {
	let document: HitsDocument =
		serde_json::from_str(raw).context("hits must be a JSON array or an object with `hits`")?;
	let response = match document {
		HitsDocument::Response(response) => response,
		HitsDocument::Hits(hits) => SearchResponse::new(hits, ""),
	};

	let untitled = response
		.hits
		.iter()
		.filter(|hit| hit.highlighted_title().is_none())
		.count();
	if untitled > 0 {
		warn!(untitled, "hits without a highlighted title will not be shown");
	}
	debug!(hits = response.hits.len(), query = %response.query, "loaded search response");

	Ok(response)
}
