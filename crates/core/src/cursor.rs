//! Virtual selection over the result list.

/// Index of the keyboard-highlighted hit, or none.
///
/// Movement helpers take the current list length and return the new cursor.
/// Every movement over an empty list returns the cursor unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor(Option<usize>);

impl Cursor {
	/// No entry selected.
	pub const NONE: Cursor = Cursor(None);

	pub fn at(index: usize) -> Self {
		Self(Some(index))
	}

	pub fn index(self) -> Option<usize> {
		self.0
	}

	/// Position using the `-1` convention for "no selection".
	pub fn position(self) -> isize {
		self.0.map_or(-1, |index| index as isize)
	}

	pub fn first(self, len: usize) -> Self {
		if len == 0 { self } else { Self::at(0) }
	}

	pub fn last(self, len: usize) -> Self {
		if len == 0 { self } else { Self::at(len - 1) }
	}

	/// Step forward, wrapping from the last entry back to the first.
	pub fn next(self, len: usize) -> Self {
		if len == 0 {
			return self;
		}
		match self.0 {
			None => Self::at(0),
			Some(index) => Self::at((index + 1) % len),
		}
	}

	/// Step backward. From none the cursor enters at the bottom; from the
	/// first entry it wraps to the last.
	pub fn prev(self, len: usize) -> Self {
		if len == 0 {
			return self;
		}
		match self.0 {
			None => Self::at(len - 1),
			Some(index) => Self::at((index + len - 1) % len),
		}
	}

	/// Return the index when it addresses an entry of a list of `len` items.
	pub fn within(self, len: usize) -> Option<usize> {
		self.0.filter(|&index| index < len)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn next_cycles_back_to_start() {
		for len in 1..6 {
			for start in 0..len {
				let mut cursor = Cursor::at(start);
				for _ in 0..len {
					cursor = cursor.next(len);
				}
				assert_eq!(cursor, Cursor::at(start), "len {len} start {start}");
			}
		}
	}

	#[test]
	fn next_from_none_enters_at_top() {
		assert_eq!(Cursor::NONE.next(3), Cursor::at(0));
	}

	#[test]
	fn prev_from_none_enters_at_bottom() {
		assert_eq!(Cursor::NONE.prev(4), Cursor::at(3));
	}

	#[test]
	fn prev_from_first_wraps_to_last() {
		assert_eq!(Cursor::at(0).prev(4), Cursor::at(3));
		assert_eq!(Cursor::at(2).prev(4), Cursor::at(1));
	}

	#[test]
	fn empty_list_leaves_cursor_untouched() {
		for cursor in [Cursor::NONE, Cursor::at(2)] {
			assert_eq!(cursor.first(0), cursor);
			assert_eq!(cursor.last(0), cursor);
			assert_eq!(cursor.next(0), cursor);
			assert_eq!(cursor.prev(0), cursor);
		}
	}

	#[test]
	fn position_uses_minus_one_for_none() {
		assert_eq!(Cursor::NONE.position(), -1);
		assert_eq!(Cursor::at(5).position(), 5);
	}

	#[test]
	fn within_rejects_out_of_range() {
		assert_eq!(Cursor::at(3).within(3), None);
		assert_eq!(Cursor::at(2).within(3), Some(2));
		assert_eq!(Cursor::NONE.within(3), None);
	}
}
