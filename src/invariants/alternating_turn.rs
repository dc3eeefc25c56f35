//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern, starting with X.
/// While the game is in progress, the stored current player must agree
/// with the history length. Once the game ends the current player stays
/// on the last mover, so the parity check only applies in progress.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first() {
            // First move must be X
            if first.player != Player::X {
                return false;
            }
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if engine.is_over() {
            return true;
        }

        // Current player must be consistent with history length
        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        engine.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_new_engine_holds() {
        let engine = GameEngine::new();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new();
        engine.attempt_move(1, 1).unwrap();

        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0), (2, 2)] {
            engine.attempt_move(row, col).unwrap();
        }

        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut engine = GameEngine::new();
        engine.attempt_move(0, 0).unwrap();

        // Forge a history where X moved twice in a row
        engine
            .history
            .push(Move::new(Player::X, Position::Center));

        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_terminal_move() {
        let mut engine = GameEngine::new();
        // X takes the top row
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.attempt_move(row, col).unwrap();
        }

        assert!(engine.is_over());
        assert!(AlternatingTurnInvariant::holds(&engine));
    }
}
