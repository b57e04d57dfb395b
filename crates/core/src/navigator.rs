//! Page navigation seam.

/// Performs a full navigation to a URL when a hit is activated.
pub trait Navigator {
	fn navigate(&mut self, url: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
	fn navigate(&mut self, url: &str) {
		(**self).navigate(url);
	}
}

/// Navigator that remembers every URL it was asked to open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
	visited: Vec<String>,
}

impl RecordingNavigator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn visited(&self) -> &[String] {
		&self.visited
	}

	/// The most recent navigation target.
	pub fn last(&self) -> Option<&str> {
		self.visited.last().map(String::as_str)
	}
}

impl Navigator for RecordingNavigator {
	fn navigate(&mut self, url: &str) {
		self.visited.push(url.to_string());
	}
}
