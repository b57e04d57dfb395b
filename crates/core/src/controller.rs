//! The result list controller.
//!
//! [`ResultList`] owns the hits, the cursor, the visibility flag and the query.
//! It is generic over the collaborators it drives: a [`Navigator`] for
//! activation and an [`AccessibilityTarget`] for `aria-activedescendant`.

use tracing::debug;

use crate::a11y::{AccessibilityTarget, ActiveDescendant};
use crate::config::ListboxConfig;
use crate::cursor::Cursor;
use crate::hit::{Hit, SearchResponse};
use crate::keys::NavKey;
use crate::navigator::Navigator;
use crate::scroll::{ScrollRequest, Viewport};
use crate::view::{RenderInput, View, render};

pub struct ResultList<N, H> {
	config: ListboxConfig,
	hits: Vec<Hit>,
	cursor: Cursor,
	visible: bool,
	query: String,
	navigator: N,
	host: H,
	active_descendant: ActiveDescendant,
	pending_scroll: Option<ScrollRequest>,
	revision: u64,
}

impl<N: Navigator, H: AccessibilityTarget> ResultList<N, H> {
	/// Create a visible, empty result list.
	pub fn new(config: ListboxConfig, navigator: N, host: H) -> Self {
		Self {
			config,
			hits: Vec::new(),
			cursor: Cursor::NONE,
			visible: true,
			query: String::new(),
			navigator,
			host,
			active_descendant: ActiveDescendant::default(),
			pending_scroll: None,
			revision: 0,
		}
	}

	pub fn hits(&self) -> &[Hit] {
		&self.hits
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn navigator(&self) -> &N {
		&self.navigator
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	/// Counter bumped on every state change that affects [`view`](Self::view).
	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// The scroll request waiting for the next render, if any.
	pub fn pending_scroll(&self) -> Option<&ScrollRequest> {
		self.pending_scroll.as_ref()
	}

	/// Replace the result set. The cursor always resets to none.
	pub fn set_result_set(&mut self, hits: Vec<Hit>) {
		debug!(count = hits.len(), "replacing result set");
		self.hits = hits;
		self.pending_scroll = None;
		self.set_cursor(Cursor::NONE);
		self.touch();
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
		self.touch();
	}

	/// Apply the hits and query of one search cycle.
	pub fn apply(&mut self, response: SearchResponse) {
		self.set_query(response.query);
		self.set_result_set(response.hits);
	}

	pub fn set_visible(&mut self, visible: bool) {
		if self.visible != visible {
			self.visible = visible;
			self.touch();
		}
	}

	/// Dispatch a logical key name. Unrecognized names are ignored.
	/// Returns whether the key was recognized.
	pub fn navigate(&mut self, key: &str) -> bool {
		match NavKey::from_name(key) {
			Some(key) => {
				self.navigate_key(key);
				true
			}
			None => false,
		}
	}

	pub fn navigate_key(&mut self, key: NavKey) {
		match key {
			NavKey::Home => self.first(),
			NavKey::End => self.last(),
			NavKey::Up => self.prev(),
			NavKey::Down => self.next(),
			NavKey::Enter => {
				self.activate();
			}
		}
	}

	pub fn first(&mut self) {
		self.move_to(self.cursor.first(self.hits.len()));
	}

	pub fn last(&mut self) {
		self.move_to(self.cursor.last(self.hits.len()));
	}

	pub fn next(&mut self) {
		self.move_to(self.cursor.next(self.hits.len()));
	}

	pub fn prev(&mut self) {
		self.move_to(self.cursor.prev(self.hits.len()));
	}

	/// Navigate to the active hit. Returns whether navigation happened.
	pub fn activate(&mut self) -> bool {
		let Some(index) = self.cursor.within(self.hits.len()) else {
			return false;
		};
		let url = &self.hits[index].url;
		debug!(index, url = %url, "activating hit");
		self.navigator.navigate(url);
		true
	}

	/// Render the current state.
	pub fn view(&self) -> View<'_> {
		render(
			&self.config,
			RenderInput {
				hits: &self.hits,
				cursor: self.cursor,
				visible: self.visible,
				query: &self.query,
			},
		)
	}

	/// Second phase of a movement: once the view layer has drawn `rendered`,
	/// perform the pending scroll if that revision already shows it.
	/// Returns whether a scroll was performed.
	pub fn after_render<V: Viewport>(&mut self, rendered: u64, viewport: &mut V) -> bool {
		let ready = self
			.pending_scroll
			.as_ref()
			.is_some_and(|request| request.is_ready(rendered));
		if !ready {
			return false;
		}
		match self.pending_scroll.take() {
			Some(request) => {
				viewport.scroll_into_view(&request);
				true
			}
			None => false,
		}
	}

	fn move_to(&mut self, cursor: Cursor) {
		let Some(index) = cursor.index() else {
			return;
		};
		if self.hits.is_empty() {
			return;
		}
		debug!(from = self.cursor.position(), to = index, "moving cursor");
		self.set_cursor(cursor);
		self.touch();
		self.pending_scroll = Some(ScrollRequest {
			element_id: self.config.entry_id(index),
			index,
			revision: self.revision,
		});
	}

	fn set_cursor(&mut self, cursor: Cursor) {
		self.cursor = cursor;
		let target = cursor.index().map(|index| self.config.entry_id(index));
		self.active_descendant.sync(&mut self.host, target);
	}

	fn touch(&mut self) {
		self.revision += 1;
	}
}
