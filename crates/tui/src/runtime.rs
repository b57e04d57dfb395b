//! Terminal event loop.

use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use sitesearch_core::PickOutcome;

use crate::App;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
	/// Take over the terminal until the user opens a hit or cancels.
	pub fn run(&mut self) -> Result<PickOutcome> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<PickOutcome> {
		terminal.clear()?;
		let mut dirty = true;
		loop {
			if dirty {
				terminal.draw(|frame| self.draw(frame))?;
				// The scroll only lands once the drawn frame shows the new cursor.
				if self.after_draw() {
					terminal.draw(|frame| self.draw(frame))?;
				}
				dirty = false;
			}

			if !event::poll(POLL_INTERVAL)? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key) {
						return Ok(outcome);
					}
					dirty = true;
				}
				Event::Resize(_, _) => dirty = true,
				_ => {}
			}
		}
	}
}
