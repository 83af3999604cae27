//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tripawn_core::Cell;

/// Moves the cursor one cell for an arrow key, stopping at the board edge.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (dx, dy) = match key {
        KeyCode::Left => (-1, 0),
        KeyCode::Right => (1, 0),
        KeyCode::Up => (0, -1),
        KeyCode::Down => (0, 1),
        _ => return cursor,
    };
    cursor.offset(dx, dy).unwrap_or(cursor)
}
