//! Deferred scroll-into-view.
//!
//! Moving the cursor only records a [`ScrollRequest`]. The view layer performs
//! it through [`Viewport`] after it has drawn a revision that already shows the
//! new cursor, so the target entry is guaranteed to be in its active state.

/// Scroll target recorded by a cursor movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
	/// Id of the entry to bring into view.
	pub element_id: String,
	/// Position of the entry in the result set.
	pub index: usize,
	/// Render revision that first reflects the movement.
	pub revision: u64,
}

impl ScrollRequest {
	/// Whether a view that drew `rendered` already shows this request's state.
	pub fn is_ready(&self, rendered: u64) -> bool {
		rendered >= self.revision
	}
}

/// The scrollable region that hosts the rendered entries.
pub trait Viewport {
	fn scroll_into_view(&mut self, request: &ScrollRequest);
}

impl<V: Viewport + ?Sized> Viewport for &mut V {
	fn scroll_into_view(&mut self, request: &ScrollRequest) {
		(**self).scroll_into_view(request);
	}
}

/// Viewport that records the ids it was asked to reveal.
#[cfg(test)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RecordingViewport {
	pub(crate) revealed: Vec<String>,
}

#[cfg(test)]
impl Viewport for RecordingViewport {
	fn scroll_into_view(&mut self, request: &ScrollRequest) {
		self.revealed.push(request.element_id.clone());
	}
}
