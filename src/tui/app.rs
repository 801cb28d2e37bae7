//! Application state: the client state value plus the cursor.

use tracing::debug;

use super::input::{self, Action};
use crate::board::Coord;
use crate::machine::{ClientState, Effect, Event};
use crate::sync::GameId;

/// Main application state.
#[derive(Debug)]
pub struct App {
    state: ClientState,
    cursor: Coord,
    game_id: GameId,
}

impl App {
    /// Creates the application and the effects that load the first board.
    pub fn new(game_id: GameId) -> (Self, Vec<Effect>) {
        let (state, effects) = ClientState::start();
        let app = Self {
            state,
            cursor: Coord::new(0, 0),
            game_id,
        };
        (app, effects)
    }

    /// Current client state.
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Game being played.
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Runs one event through the state machine.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        debug!(event = event.name(), user = event.is_user(), "Dispatching event");
        let state = std::mem::take(&mut self.state);
        let (next, effects) = state.apply(event);
        self.state = next;
        self.clamp_cursor();
        effects
    }

    /// Handles a mapped key press. `Quit` is left to the caller.
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Move(direction) => {
                if let Some(model) = self.state.model() {
                    self.cursor = input::move_cursor(self.cursor, direction, model.size());
                }
                Vec::new()
            }
            Action::ClickCursor => self.dispatch(Event::Click(self.cursor)),
            Action::Dispatch(event) => self.dispatch(event),
            Action::Quit => Vec::new(),
        }
    }

    fn clamp_cursor(&mut self) {
        if let Some(model) = self.state.model() {
            let last = model.size().saturating_sub(1);
            self.cursor = Coord::new(self.cursor.row.min(last), self.cursor.col.min(last));
        }
    }
}
