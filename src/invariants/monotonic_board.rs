//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Board, Cell};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to Occupied, it never changes
/// until a full reset. This is verified by replaying the move history
/// and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        // Reconstruct board from history
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            // Cell must be empty before placing
            if !reconstructed.is_empty(mov.position) {
                return false;
            }

            reconstructed.set(mov.position, Cell::Occupied(mov.player));
        }

        // Reconstructed board must match current board
        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_engine_holds() {
        let engine = GameEngine::new();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new();
        engine.attempt_move(1, 1).unwrap();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            engine.attempt_move(row, col).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut engine = GameEngine::new();
        engine.attempt_move(1, 1).unwrap();

        // Corrupt the board by changing an occupied cell
        engine.board.set(Position::Center, Cell::Occupied(Player::O));

        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_reset_restores_invariant() {
        let mut engine = GameEngine::new();
        engine.attempt_move(1, 1).unwrap();
        engine.board.set(Position::Center, Cell::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&engine));

        engine.reset();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }
}
