//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tictactoe_engine::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Start a new game.
    NewGame,
    /// Activate a specific cell.
    Activate(Position),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Move the cursor.
    Move(Direction),
}

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Maps a key event to an action. Releases and unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::NewGame),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        KeyCode::Char(c) => {
            // 1 is top-left, 9 is bottom-right
            let digit = c.to_digit(10)? as usize;
            let index = digit.checked_sub(1)?;
            Position::from_index(index).map(Action::Activate)
        }
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|row| (column, row)),
        Direction::Down => Some((column, row + 1)),
        Direction::Left => column.checked_sub(1).map(|column| (column, row)),
        Direction::Right => Some((column + 1, row)),
    };
    target
        .and_then(|(column, row)| Position::from_grid(column, row))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(
            action_for(press(KeyCode::Char('1'))),
            Some(Action::Activate(Position::TopLeft))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('9'))),
            Some(Action::Activate(Position::BottomRight))
        );
        assert_eq!(action_for(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key), None);
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(
            move_cursor(Position::Center, Direction::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, Direction::Right),
            Position::MiddleRight
        );
        assert_eq!(
            move_cursor(Position::MiddleLeft, Direction::Down),
            Position::BottomLeft
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Up),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::TopLeft, Direction::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::TopRight, Direction::Right),
            Position::TopRight
        );
    }
}
