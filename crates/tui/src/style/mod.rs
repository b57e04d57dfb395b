//! Colors and text styles used by the terminal front-end.

use ratatui::style::{Color, Modifier, Style};

/// Styles for the query box and the dropdown.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for borders and titles.
	pub header: Style,
	/// Style applied to the active entry.
	pub row_highlight: Style,
	/// Style for the characters the provider marked as matches.
	pub emphasis: Style,
	/// Style for the fallback web search link.
	pub link: Style,
	/// Style for secondary text such as hints and ids.
	pub muted: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			header: Style::new().fg(Color::Cyan),
			row_highlight: Style::new()
				.bg(Color::DarkGray)
				.add_modifier(Modifier::BOLD),
			emphasis: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
			link: Style::new()
				.fg(Color::Blue)
				.add_modifier(Modifier::UNDERLINED),
			muted: Style::new().fg(Color::DarkGray),
		}
	}
}
