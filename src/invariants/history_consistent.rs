//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Cell;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
/// No moves are missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history_len = engine.history().len();

        let occupied_count = engine
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        history_len == occupied_count
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_engine_holds() {
        let engine = GameEngine::new();
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new();
        engine.attempt_move(1, 1).unwrap();

        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            engine.attempt_move(row, col).unwrap();
        }

        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 4);
    }

    #[test]
    fn test_corrupted_history_violates() {
        let mut engine = GameEngine::new();
        engine.attempt_move(1, 1).unwrap();

        // Fill a cell without a matching history entry
        engine
            .board
            .set(Position::TopLeft, Cell::Occupied(Player::O));

        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_full_game_holds() {
        let mut engine = GameEngine::new();
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 0),
        ] {
            if engine.is_over() {
                break;
            }
            engine.attempt_move(row, col).unwrap();
        }

        assert!(HistoryConsistentInvariant::holds(&engine));
    }
}
