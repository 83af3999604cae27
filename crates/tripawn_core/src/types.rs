//! Core domain types for Tri-Pawn.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 3;

/// A side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// White (moves first, starts on row 2, advances toward row 0).
    White,
    /// Black (starts on row 0, advances toward row 2).
    Black,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a single forward step.
    pub fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Row this player's pawns start on.
    pub fn home_row(self) -> i8 {
        match self {
            Player::White => BOARD_SIZE - 1,
            Player::Black => 0,
        }
    }

    /// Row this player must reach for a breakthrough (the opponent's home row).
    pub fn target_row(self) -> i8 {
        self.opponent().home_row()
    }

    /// The occupant value of one of this player's pawns.
    pub fn pawn(self) -> Occupant {
        Occupant::Pawn(self)
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occupant {
    /// No pawn.
    #[default]
    Empty,
    /// A pawn owned by a player.
    Pawn(Player),
}

impl Occupant {
    /// Returns the owning player, or `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Pawn(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    fn symbol(self) -> char {
        match self {
            Occupant::Empty => '.',
            Occupant::Pawn(Player::White) => 'W',
            Occupant::Pawn(Player::Black) => 'B',
        }
    }
}

/// A board coordinate, origin top-left, `y` growing downward.
///
/// Coordinates are signed so that off-board input can be represented and
/// rejected; use [`Cell::in_bounds`] before trusting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column (0-2 on the board).
    pub x: i8,
    /// Row (0-2 on the board).
    pub y: i8,
}

impl Cell {
    /// Creates a cell. The coordinates are not validated.
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Checks if both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Returns the cell shifted by `(dx, dy)` if it is still on the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Cell> {
        let cell = Cell::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?);
        cell.in_bounds().then_some(cell)
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell::new(x, y)))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cell lies outside the 3x3 grid.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(Cell),
}

impl std::error::Error for BoardError {}

/// 3x3 Tri-Pawn board, stored as rows (`cells[y][x]`).
///
/// The board knows nothing about the rules; it only stores occupants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Occupant; 3]; 3],
}

impl Board {
    /// Creates a board in the starting layout: Black on row 0, White on row 2.
    pub fn new() -> Self {
        let black = Player::Black.pawn();
        let white = Player::White.pawn();
        Self {
            cells: [
                [black; 3],
                [Occupant::Empty; 3],
                [white; 3],
            ],
        }
    }

    /// Creates a board with no pawns.
    pub fn empty() -> Self {
        Self {
            cells: [[Occupant::Empty; 3]; 3],
        }
    }

    /// Creates a board from explicit rows (`rows[y][x]`).
    pub fn from_rows(rows: [[Occupant; 3]; 3]) -> Self {
        Self { cells: rows }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Occupant; 3]; 3] {
        &self.cells
    }

    /// Gets the occupant of a cell.
    pub fn get(&self, cell: Cell) -> Result<Occupant, BoardError> {
        let (x, y) = Self::index(cell)?;
        Ok(self.cells[y][x])
    }

    /// Sets the occupant of a cell.
    pub fn set(&mut self, cell: Cell, occupant: Occupant) -> Result<(), BoardError> {
        let (x, y) = Self::index(cell)?;
        self.cells[y][x] = occupant;
        Ok(())
    }

    /// Checks if an on-board cell is empty. Off-board cells are never empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Ok(Occupant::Empty))
    }

    /// All cells holding one of `player`'s pawns, in row-major order.
    pub fn occupied_by(&self, player: Player) -> Vec<Cell> {
        Cell::all()
            .filter(|&cell| matches!(self.get(cell), Ok(Occupant::Pawn(p)) if p == player))
            .collect()
    }

    /// Number of pawns `player` has left.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&occupant| occupant == player.pawn())
            .count()
    }

    /// Total number of pawns on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|occupant| !occupant.is_empty())
            .count()
    }

    /// Restores the starting layout.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn index(cell: Cell) -> Result<(usize, usize), BoardError> {
        if cell.in_bounds() {
            Ok((cell.x as usize, cell.y as usize))
        } else {
            Err(BoardError::OutOfBounds(cell))
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            let line: String = row.iter().map(|occupant| occupant.symbol()).collect();
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(board.to_string(), "BBB\n...\nWWW");
        assert_eq!(board.count(Player::White), 3);
        assert_eq!(board.count(Player::Black), 3);
        assert_eq!(board.piece_count(), 6);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        for cell in [Cell::new(-1, 0), Cell::new(0, 3), Cell::new(3, 3), Cell::new(1, -1)] {
            assert_eq!(board.get(cell), Err(BoardError::OutOfBounds(cell)));
        }
    }

    #[test]
    fn test_set_out_of_bounds_leaves_board_unchanged() {
        let mut board = Board::new();
        let result = board.set(Cell::new(3, 0), Occupant::Empty);
        assert!(result.is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::empty();
        let cell = Cell::new(1, 1);
        board.set(cell, Player::White.pawn()).unwrap();
        assert_eq!(board.get(cell), Ok(Occupant::Pawn(Player::White)));
        assert!(!board.is_empty(cell));
    }

    #[test]
    fn test_occupied_by_is_row_major() {
        let board = Board::new();
        assert_eq!(
            board.occupied_by(Player::Black),
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
        );
        assert_eq!(
            board.occupied_by(Player::White),
            vec![Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)]
        );
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut board = Board::empty();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cell_offset_stays_on_board() {
        assert_eq!(Cell::new(0, 0).offset(-1, 0), None);
        assert_eq!(Cell::new(2, 2).offset(0, 1), None);
        assert_eq!(Cell::new(1, 1).offset(1, -1), Some(Cell::new(2, 0)));
        assert_eq!(Cell::new(i8::MAX, 0).offset(1, 0), None);
    }

    #[test]
    fn test_player_directions() {
        assert_eq!(Player::White.forward(), -1);
        assert_eq!(Player::Black.forward(), 1);
        assert_eq!(Player::White.target_row(), 0);
        assert_eq!(Player::Black.target_row(), 2);
        assert_eq!(Player::White.opponent(), Player::Black);
    }
}
