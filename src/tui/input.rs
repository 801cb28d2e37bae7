//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::board::Coord;
use crate::machine::Event;

/// Cursor movement direction as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the top row (higher row index).
    Up,
    /// Toward the bottom row.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

/// What a key press asks the UI to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Move the cursor.
    Move(Direction),
    /// Click the square under the cursor.
    ClickCursor,
    /// Feed an event straight to the state machine.
    Dispatch(Event),
}

/// Maps a key press to an action. Unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::ClickCursor,
        KeyCode::Char('s') => Action::Dispatch(Event::Shoot),
        KeyCode::Char('y') => Action::Dispatch(Event::Confirm),
        KeyCode::Char('n') => Action::Dispatch(Event::Deny),
        KeyCode::Char('f') => Action::Dispatch(Event::SubmitSunk),
        KeyCode::Char('u') => Action::Dispatch(Event::Undo),
        KeyCode::Char('r') => Action::Dispatch(Event::Retry),
        KeyCode::Char('R') | KeyCode::F(5) => Action::Dispatch(Event::Reload),
        KeyCode::Char('d') => Action::Dispatch(Event::Dismiss),
        KeyCode::Esc => Action::Dispatch(Event::Cancel),
        _ => return None,
    };
    Some(action)
}

/// Moves `cursor` one square, staying inside an `size×size` board.
pub fn move_cursor(cursor: Coord, direction: Direction, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    match direction {
        Direction::Up => Coord::new((cursor.row + 1).min(last), cursor.col),
        Direction::Down => Coord::new(cursor.row.saturating_sub(1), cursor.col),
        Direction::Left => Coord::new(cursor.row, cursor.col.saturating_sub(1)),
        Direction::Right => Coord::new(cursor.row, (cursor.col + 1).min(last)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_prompt_answers_map_to_confirm_and_deny() {
        assert_eq!(
            map_key(key(KeyCode::Char('y'))),
            Some(Action::Dispatch(Event::Confirm))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('n'))),
            Some(Action::Dispatch(Event::Deny))
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let corner = Coord::new(9, 9);
        assert_eq!(move_cursor(corner, Direction::Up, 10), corner);
        assert_eq!(move_cursor(corner, Direction::Right, 10), corner);

        let origin = Coord::new(0, 0);
        assert_eq!(move_cursor(origin, Direction::Down, 10), origin);
        assert_eq!(move_cursor(origin, Direction::Left, 10), origin);
        assert_eq!(move_cursor(origin, Direction::Up, 10), Coord::new(1, 0));
    }
}
