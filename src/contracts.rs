//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::engine::GameEngine;
use crate::invariants::{EngineInvariants, InvariantSet};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not have reached a terminal outcome.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks that the game is still in progress.
    #[instrument(skip(engine))]
    pub fn check(_mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The cell at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks that the targeted cell is unoccupied.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if !engine.board().is_empty(mov.position) {
            Err(MoveError::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks that the moving player owns the turn.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        if mov.player != engine.current_player() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the game is in progress,
/// the cell is empty, and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(mov: &Move, engine: &GameEngine) -> Result<(), MoveError> {
        GameNotOver::check(mov, engine)?;
        CellIsEmpty::check(mov, engine)?;
        PlayersTurn::check(mov, engine)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game must be in progress
/// - Cell must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(engine: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, engine)
    }

    fn post(_before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        // Verify all invariants using the composed set
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
