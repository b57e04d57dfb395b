//! Logical navigation keys understood by the result list.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownKey;

/// Keys the dropdown reacts to. Anything else is ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
	Home,
	End,
	Up,
	Down,
	Enter,
}

impl NavKey {
	/// Resolve a DOM-style key name. Legacy `Up`/`Down` spellings are accepted.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"Home" => Some(Self::Home),
			"End" => Some(Self::End),
			"ArrowUp" | "Up" => Some(Self::Up),
			"ArrowDown" | "Down" => Some(Self::Down),
			"Enter" => Some(Self::Enter),
			_ => None,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Home => "Home",
			Self::End => "End",
			Self::Up => "ArrowUp",
			Self::Down => "ArrowDown",
			Self::Enter => "Enter",
		}
	}
}

impl fmt::Display for NavKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for NavKey {
	type Err = UnknownKey;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		Self::from_name(trimmed).ok_or_else(|| UnknownKey(trimmed.to_string()))
	}
}
