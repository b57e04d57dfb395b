//! Translate terminal key events into dropdown actions.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sitesearch_core::NavKey;

/// What a key press asks the front-end to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
	Navigate(NavKey),
	ToggleVisibility,
	Cancel,
}

/// Map a key event to an action. Unmapped keys return `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
	let action = match key.code {
		KeyCode::Home => Action::Navigate(NavKey::Home),
		KeyCode::End => Action::Navigate(NavKey::End),
		KeyCode::Up => Action::Navigate(NavKey::Up),
		KeyCode::Down => Action::Navigate(NavKey::Down),
		KeyCode::Enter => Action::Navigate(NavKey::Enter),
		KeyCode::Tab => Action::ToggleVisibility,
		KeyCode::Esc => Action::Cancel,
		KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Cancel,
		_ => return None,
	};
	Some(action)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn arrows_map_to_navigation() {
		let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
		assert_eq!(action_for(up), Some(Action::Navigate(NavKey::Up)));
		let end = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
		assert_eq!(action_for(end), Some(Action::Navigate(NavKey::End)));
	}

	#[test]
	fn ctrl_c_cancels_but_plain_c_does_not() {
		let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
		assert_eq!(action_for(ctrl_c), Some(Action::Cancel));
		let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
		assert_eq!(action_for(c), None);
	}
}
