//! Pure tic-tac-toe game logic.
//!
//! This crate implements the game-state engine for two-player tic-tac-toe:
//! board representation, move validation, win/draw detection, and reset.
//! It is pure state + rules, with no rendering or input handling. A
//! presentation layer owns a [`GameEngine`], forwards `(row, col)` clicks
//! to [`GameEngine::attempt_move`], and reads a [`Snapshot`] to decide what
//! to draw.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Line, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.attempt_move(0, 0)?; // X
//! engine.attempt_move(1, 0)?; // O
//! engine.attempt_move(0, 1)?; // X
//! engine.attempt_move(1, 1)?; // O
//! let outcome = engine.attempt_move(0, 2)?; // X completes the top row
//!
//! assert_eq!(outcome, Outcome::Won { player: Player::X, line: Line::TopRow });
//! engine.reset();
//! assert_eq!(engine.outcome(), Outcome::InProgress);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod engine;
mod kani_support;
mod line;
mod position;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - domain types
pub use types::{Board, Cell, Outcome, Player};

// Crate-level exports - positions and winning lines
pub use line::Line;
pub use position::Position;

// Crate-level exports - moves and errors
pub use action::{Move, MoveError};

// Crate-level exports - contracts
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn};

// Crate-level exports - invariants
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - engine
pub use engine::{GameEngine, Snapshot};
