use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::symbols::border;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use sitesearch_core::View;

use super::title_line;
use crate::style::Theme;

/// Prefix marking the active entry. The list never holds a ratatui selection;
/// the controller owns scrolling.
const ACTIVE_SYMBOL: &str = "▶ ";
const INACTIVE_PAD: &str = "  ";

/// Geometry of the drawn dropdown, needed to scroll it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownLayout {
	/// Result-set index of each drawn row, top to bottom.
	pub rows: Vec<usize>,
	/// Number of rows that fit inside the list border.
	pub viewport_rows: usize,
}

/// Draw `view` into `area`. Hidden and empty views leave the area untouched.
pub fn render_dropdown(
	frame: &mut Frame,
	area: Rect,
	view: &View<'_>,
	list_state: &mut ListState,
	status: Option<&str>,
	theme: &Theme,
) -> DropdownLayout {
	match view {
		View::Hidden { .. } | View::Empty => DropdownLayout::default(),
		View::NoSuggestions(empty) => {
			let text = Text::from(vec![
				Line::from(vec![
					Span::raw(empty.message.clone()),
					Span::raw(" "),
					Span::styled(empty.link_text.clone(), theme.link),
				]),
				Line::styled(empty.href.to_string(), theme.muted),
			]);
			let paragraph = Paragraph::new(text)
				.block(dropdown_block(theme))
				.wrap(Wrap { trim: true });
			frame.render_widget(paragraph, area);
			DropdownLayout::default()
		}
		View::Listbox(listbox) => {
			let items: Vec<ListItem<'static>> = listbox
				.entries
				.iter()
				.map(|entry| {
					let mut line = title_line(entry.title, theme.emphasis);
					if entry.active {
						line.spans.insert(0, Span::raw(ACTIVE_SYMBOL));
						ListItem::new(line).style(theme.row_highlight)
					} else {
						line.spans.insert(0, Span::raw(INACTIVE_PAD));
						ListItem::new(line)
					}
				})
				.collect();

			let mut block = dropdown_block(theme).title(format!(
				" {} ({}) ",
				listbox.label,
				listbox.entries.len()
			));
			if let Some(status) = status {
				block = block.title_bottom(Line::styled(format!(" {status} "), theme.muted));
			}

			let viewport_rows = usize::from(block.inner(area).height);
			frame.render_stateful_widget(List::new(items).block(block), area, list_state);

			DropdownLayout {
				rows: listbox.entries.iter().map(|entry| entry.index).collect(),
				viewport_rows,
			}
		}
	}
}

fn dropdown_block(theme: &Theme) -> Block<'static> {
	Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.header)
}
