use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::game::renderer;
use crate::game::state::GameState;

/// Tick period for the update + render cycle.
pub const TICK: Duration = Duration::from_millis(30);

/// How one round ended.
pub struct RoundOutcome {
    pub score: i32,
    /// True when the player left with Esc instead of losing.
    pub aborted: bool,
}

/// Runs a single round: one `GameState`, one tick interval, one input stream.
/// All state mutation happens on this task, so no locking is needed.
pub struct Engine {
    state: GameState,
}

impl Engine {
    pub fn new(high_score: i32) -> Self {
        Self {
            state: GameState::new(high_score),
        }
    }

    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<RoundOutcome> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(TICK);

        loop {
            terminal.draw(|frame| renderer::draw(frame, &self.state))?;

            tokio::select! {
                // INPUT: keystrokes mutate the buffer between ticks
                Some(event) = events.next() => {
                    if let Event::Key(key) = event? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key.code {
                            KeyCode::Esc => {
                                info!(score = self.state.score, "round aborted");
                                return Ok(RoundOutcome { score: self.state.score, aborted: true });
                            }
                            KeyCode::Backspace => self.state.backspace(),
                            KeyCode::Char(c) => self.state.push_char(c),
                            _ => {}
                        }
                    }
                }

                // TICK: game heartbeat
                _ = ticker.tick() => {
                    self.state.tick();
                    if self.state.over {
                        info!(score = self.state.score, "round over");
                        return Ok(RoundOutcome { score: self.state.score, aborted: false });
                    }
                }
            }
        }
    }
}
