//! Tests for move contracts through the public API.

use tictactoe_engine::{
    CellIsEmpty, Contract, GameEngine, GameNotOver, LegalMove, Move, MoveContract, MoveError,
    Player, PlayersTurn, Position,
};

#[test]
fn test_legal_move_passes_on_fresh_engine() {
    let engine = GameEngine::new();
    let action = Move::new(Player::X, Position::Center);

    assert!(LegalMove::check(&action, &engine).is_ok());
}

#[test]
fn test_cell_is_empty_rejects_occupied() {
    let mut engine = GameEngine::new();
    engine.attempt_move(1, 1).unwrap();

    let action = Move::new(Player::O, Position::Center);
    assert_eq!(
        CellIsEmpty::check(&action, &engine),
        Err(MoveError::CellOccupied(Position::Center))
    );
}

#[test]
fn test_players_turn_rejects_off_turn_player() {
    let engine = GameEngine::new();
    let action = Move::new(Player::O, Position::Center);

    assert_eq!(
        PlayersTurn::check(&action, &engine),
        Err(MoveError::WrongPlayer(Player::O))
    );
}

#[test]
fn test_game_not_over_rejects_terminal_state() {
    let mut engine = GameEngine::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.attempt_move(row, col).unwrap();
    }

    let action = Move::new(Player::O, Position::BottomRight);
    assert_eq!(GameNotOver::check(&action, &engine), Err(MoveError::GameOver));
}

#[test]
fn test_contract_pre_matches_engine_rejection() {
    let mut engine = GameEngine::new();
    engine.attempt_move(0, 0).unwrap();

    let action = Move::new(Player::O, Position::TopLeft);
    let pre = MoveContract::pre(&engine, &action);
    let applied = engine.attempt_move(0, 0);

    // The standalone precondition and the engine agree
    assert_eq!(pre, Err(MoveError::CellOccupied(Position::TopLeft)));
    assert_eq!(applied, Err(MoveError::CellOccupied(Position::TopLeft)));
}

#[test]
fn test_error_messages_name_the_problem() {
    assert_eq!(
        MoveError::CellOccupied(Position::Center).to_string(),
        "Cell Center is already occupied"
    );
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    assert_eq!(
        MoveError::OutOfBounds(3, 7).to_string(),
        "Position (3, 7) is out of bounds"
    );
}
