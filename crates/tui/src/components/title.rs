use ratatui::style::Style;
use ratatui::text::{Line, Span};
use sitesearch_core::sanitize::highlight_segments;

/// Build a styled line from a provider-highlighted title.
pub fn title_line(title: &str, emphasis: Style) -> Line<'static> {
	let spans: Vec<Span<'static>> = highlight_segments(title)
		.into_iter()
		.map(|segment| {
			if segment.emphasized {
				Span::styled(segment.text, emphasis)
			} else {
				Span::raw(segment.text)
			}
		})
		.collect();
	Line::from(spans)
}
