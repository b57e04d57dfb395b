//! Terminal application state wrapping the result list controller.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Layout};
use ratatui::symbols::border;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, ListState, Paragraph};
use sitesearch_core::{
	ACTIVE_DESCENDANT, AttributeMap, ListboxConfig, NavKey, PickOutcome, RecordingNavigator,
	ResultList, SearchResponse,
};
use tracing::debug;

use crate::components::{DropdownLayout, render_dropdown};
use crate::keymap::{Action, action_for};
use crate::style::Theme;
use crate::viewport::ListViewport;

const QUERY_TITLE: &str = " Search ";
const HINT: &str = " Enter open | Tab toggle | Esc quit ";

/// Result list plus the terminal-specific state needed to draw and scroll it.
pub struct App {
	list: ResultList<RecordingNavigator, AttributeMap>,
	list_state: ListState,
	layout: DropdownLayout,
	drawn_revision: Option<u64>,
	pub theme: Theme,
}

impl App {
	/// Build an app showing `response` with the given configuration.
	pub fn new(config: ListboxConfig, response: SearchResponse) -> Self {
		let mut list = ResultList::new(config, RecordingNavigator::new(), AttributeMap::new());
		list.apply(response);
		Self::with_list(list)
	}

	/// Wrap an existing controller, keeping its cursor and visibility.
	pub fn with_list(list: ResultList<RecordingNavigator, AttributeMap>) -> Self {
		Self {
			list,
			list_state: ListState::default(),
			layout: DropdownLayout::default(),
			drawn_revision: None,
			theme: Theme::default(),
		}
	}

	pub fn list(&self) -> &ResultList<RecordingNavigator, AttributeMap> {
		&self.list
	}

	/// Process a key press and return an outcome once the session ends.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickOutcome> {
		match action_for(key)? {
			Action::Cancel => Some(PickOutcome::cancelled(self.list.query())),
			Action::ToggleVisibility => {
				let visible = !self.list.is_visible();
				self.list.set_visible(visible);
				None
			}
			// A closed dropdown has nothing to move through or open.
			Action::Navigate(_) if !self.list.is_visible() => None,
			Action::Navigate(NavKey::Enter) => {
				if !self.list.activate() {
					return None;
				}
				let url = self.list.navigator().last()?;
				debug!(url = %url, "hit activated");
				Some(PickOutcome::accepted(self.list.query(), url))
			}
			Action::Navigate(key) => {
				self.list.navigate_key(key);
				None
			}
		}
	}

	/// Draw the query box and the dropdown.
	pub fn draw(&mut self, frame: &mut Frame) {
		let [query_area, dropdown_area] =
			Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(frame.area());

		let query_block = Block::default()
			.borders(Borders::ALL)
			.border_set(border::ROUNDED)
			.border_style(self.theme.header)
			.title(QUERY_TITLE)
			.title_bottom(Line::styled(HINT, self.theme.muted));
		frame.render_widget(
			Paragraph::new(self.list.query().to_string()).block(query_block),
			query_area,
		);

		let view = self.list.view();
		let status = self.list.host().get(ACTIVE_DESCENDANT);
		self.layout = render_dropdown(
			frame,
			dropdown_area,
			&view,
			&mut self.list_state,
			status,
			&self.theme,
		);
		self.drawn_revision = Some(self.list.revision());
	}

	/// Finish a frame: scroll to the active entry if the last draw shows it.
	/// Returns whether the list offset changed and a redraw is due.
	pub fn after_draw(&mut self) -> bool {
		let Some(rendered) = self.drawn_revision else {
			return false;
		};
		let before = self.list_state.offset();
		let mut viewport = ListViewport::new(&mut self.list_state, &self.layout);
		self.list.after_render(rendered, &mut viewport);
		self.list_state.offset() != before
	}
}
