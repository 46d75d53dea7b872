//! Terminal setup and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::App;
use crate::outcome::SearchOutcome;

const INPUT_POLL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl App<'_> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = terminal.clear() {
			ratatui::restore();
			return Err(err.into());
		}

		let (event_tx, event_rx) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let input_running = Arc::clone(&running);

		let input_thread = thread::spawn(move || -> Result<()> {
			while input_running.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();
		let result: Result<SearchOutcome> = loop {
			match self.step(&mut terminal, &event_rx, &mut pending_events) {
				Ok(Some(outcome)) => break Ok(outcome),
				Ok(None) => thread::sleep(FRAME_INTERVAL),
				Err(err) => break Err(err),
			}
		};

		ratatui::restore();
		running.store(false, Ordering::Relaxed);
		match input_thread.join() {
			Ok(join_result) => join_result?,
			Err(panic) => std::panic::resume_unwind(panic),
		}
		debug!(accepted = result.as_ref().is_ok_and(|outcome| outcome.accepted), "picker closed");

		result
	}

	/// Drain queued input, apply worker completions and redraw once.
	fn step(
		&mut self,
		terminal: &mut DefaultTerminal,
		events: &mpsc::Receiver<Event>,
		pending_events: &mut VecDeque<Event>,
	) -> Result<Option<SearchOutcome>> {
		loop {
			match events.try_recv() {
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					return Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		while let Some(event) = pending_events.pop_front() {
			if let Event::Key(key) = event
				&& key.kind == KeyEventKind::Press
				&& let Some(outcome) = self.handle_key(key)?
			{
				return Ok(Some(outcome));
			}
		}

		self.pump_fetch_results();
		if self.state().is_loading() {
			self.throbber_state.calc_next();
		}

		terminal.draw(|frame| self.draw(frame))?;
		Ok(None)
	}
}
