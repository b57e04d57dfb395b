//! Scroll the drawn result list so a requested entry is visible.

use ratatui::widgets::ListState;
use sitesearch_core::{ScrollRequest, Viewport};

use crate::components::DropdownLayout;

/// [`Viewport`] over a ratatui list, using the layout of the last draw.
pub struct ListViewport<'a> {
	state: &'a mut ListState,
	layout: &'a DropdownLayout,
}

impl<'a> ListViewport<'a> {
	pub fn new(state: &'a mut ListState, layout: &'a DropdownLayout) -> Self {
		Self { state, layout }
	}
}

impl Viewport for ListViewport<'_> {
	fn scroll_into_view(&mut self, request: &ScrollRequest) {
		let Some(row) = self.layout.rows.iter().position(|&index| index == request.index) else {
			return;
		};
		let visible = self.layout.viewport_rows;
		if visible == 0 {
			return;
		}

		let offset = self.state.offset();
		if row < offset {
			*self.state.offset_mut() = row;
		} else if row >= offset + visible {
			*self.state.offset_mut() = row + 1 - visible;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request(index: usize) -> ScrollRequest {
		ScrollRequest {
			element_id: format!("r--{index}"),
			index,
			revision: 0,
		}
	}

	fn layout(rows: Vec<usize>, viewport_rows: usize) -> DropdownLayout {
		DropdownLayout {
			rows,
			viewport_rows,
		}
	}

	#[test]
	fn scrolls_down_until_row_is_last_visible() {
		let layout = layout((0..10).collect(), 3);
		let mut state = ListState::default();
		ListViewport::new(&mut state, &layout).scroll_into_view(&request(5));
		assert_eq!(state.offset(), 3);
	}

	#[test]
	fn scrolls_up_to_row() {
		let layout = layout((0..10).collect(), 3);
		let mut state = ListState::default().with_offset(6);
		ListViewport::new(&mut state, &layout).scroll_into_view(&request(2));
		assert_eq!(state.offset(), 2);
	}

	#[test]
	fn maps_result_index_to_drawn_row() {
		// Index 1 had no title and was not drawn.
		let layout = layout(vec![0, 2, 3, 4], 2);
		let mut state = ListState::default();
		ListViewport::new(&mut state, &layout).scroll_into_view(&request(3));
		assert_eq!(state.offset(), 1);

		ListViewport::new(&mut state, &layout).scroll_into_view(&request(1));
		assert_eq!(state.offset(), 1);
	}
}
