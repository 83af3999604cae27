//! Tests for the game engine.

use tripawn_core::{Board, Cell, GameEngine, GameOutcome, MoveError, Occupant, Player};

#[test]
fn test_new_engine() {
    let engine = GameEngine::new();
    assert_eq!(engine.current_player(), Player::White);
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.board().to_string(), "BBB\n...\nWWW");
}

#[test]
fn test_forward_step_and_turn() {
    let mut engine = GameEngine::new();
    let captured = engine.apply_move(Cell::new(0, 2), Cell::new(0, 1)).unwrap();
    assert_eq!(captured, None);
    engine.switch_player();

    assert_eq!(engine.current_player(), Player::Black);
    assert_eq!(engine.evaluate_outcome(Player::Black), GameOutcome::InProgress);
    assert_eq!(engine.board().to_string(), "BBB\nW..\n.WW");
}

#[test]
fn test_illegal_moves_rejected() {
    let mut engine = GameEngine::new();

    // Sideways.
    assert!(matches!(
        engine.apply_move(Cell::new(0, 2), Cell::new(1, 2)),
        Err(MoveError::IllegalMove(_))
    ));
    // Off the board.
    assert!(matches!(
        engine.apply_move(Cell::new(0, 2), Cell::new(0, 3)),
        Err(MoveError::OutOfBounds(_))
    ));
    // Empty source.
    assert!(matches!(
        engine.apply_move(Cell::new(1, 1), Cell::new(1, 0)),
        Err(MoveError::IllegalMove(_))
    ));
    // Diagonal onto an empty cell.
    assert!(matches!(
        engine.apply_move(Cell::new(0, 2), Cell::new(1, 1)),
        Err(MoveError::IllegalMove(_))
    ));

    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_error_messages() {
    let mut engine = GameEngine::new();
    let err = engine
        .apply_move(Cell::new(0, 2), Cell::new(0, 3))
        .unwrap_err();
    assert_eq!(err.to_string(), "Cell (0, 3) is off the board");

    let err = engine
        .apply_move(Cell::new(1, 0), Cell::new(1, 1))
        .unwrap_err();
    assert_eq!(err.to_string(), "Illegal move (1, 0) -> (1, 1)");
}

#[test]
fn test_capture_removes_pawn() {
    let board = Board::from_rows([
        [Occupant::Empty, Occupant::Pawn(Player::Black), Occupant::Empty],
        [Occupant::Pawn(Player::White), Occupant::Empty, Occupant::Empty],
        [Occupant::Empty, Occupant::Empty, Occupant::Empty],
    ]);
    let mut engine = GameEngine::from_position(board, Player::White);

    let captured = engine.apply_move(Cell::new(0, 1), Cell::new(1, 0)).unwrap();
    assert_eq!(captured, Some(Player::Black));
    assert_eq!(engine.board().count(Player::Black), 0);
    assert_eq!(engine.board().piece_count(), 1);
    assert_eq!(
        engine.evaluate_outcome(Player::Black),
        GameOutcome::Win(Player::White)
    );
}

#[test]
fn test_engine_serializes() {
    let engine = GameEngine::new();
    let json = serde_json::to_string(&engine).unwrap();
    let back: GameEngine = serde_json::from_str(&json).unwrap();
    assert_eq!(back, engine);
}
