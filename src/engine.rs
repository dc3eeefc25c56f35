//! The game engine: sole authority over board state and outcomes.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the current player, and the outcome. All mutation
/// goes through [`attempt_move`](GameEngine::attempt_move) and
/// [`reset`](GameEngine::reset); the presentation layer reads state
/// through accessors or a [`Snapshot`].
///
/// The engine assumes single-threaded, single-caller access: each user
/// interaction maps to one synchronous call followed by a render.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

/// Read-only copy of engine state for the presentation layer.
///
/// The snapshot owns its data; mutating it cannot touch the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Current player to move.
    pub current_player: Player,
    /// Game outcome.
    pub outcome: Outcome,
}

impl GameEngine {
    /// Creates a new engine with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Attempts a move at `(row, col)` for the current player.
    ///
    /// Returns the recomputed [`Outcome`] on success. On a win the scan
    /// runs rows top-to-bottom, then columns left-to-right, then the two
    /// diagonals, and the first completed line is reported.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] when either coordinate is outside `0..3`
    /// - [`MoveError::GameOver`] when the outcome is already terminal
    /// - [`MoveError::CellOccupied`] when the targeted cell is non-empty
    ///
    /// Rejected moves leave the board, current player, and outcome
    /// unchanged. A front-end that wants the classic "clicking an
    /// occupied cell does nothing" behavior simply discards the error.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds(row, col))?;
        self.apply(Move::new(self.current_player, position))
    }

    /// Applies a validated move and recomputes the outcome.
    fn apply(&mut self, action: Move) -> Result<Outcome, MoveError> {
        // Precondition: Check contract
        MoveContract::pre(self, &action)?;

        // Store state for postcondition checking
        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(action.position, Cell::Occupied(action.player));
        self.history.push(action);

        // Win scan first, then draw, else the turn passes
        if let Some((player, line)) = rules::winning_line(&self.board) {
            self.outcome = Outcome::Won { player, line };
        } else if rules::is_full(&self.board) {
            self.outcome = Outcome::Draw;
        } else {
            self.current_player = self.current_player.opponent();
        }

        debug!(%action, outcome = ?self.outcome, "Applied move");

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(self.outcome)
    }

    /// Resets the game: empty board, X to move, outcome in progress.
    ///
    /// Always succeeds; the engine is replaced wholesale so no partial
    /// state is ever observable.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns an owned snapshot of board, current player, and outcome.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            outcome: self.outcome,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    ///
    /// After a terminal move the current player stays on the last mover;
    /// the turn only passes on a move that keeps the game in progress.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true if the game has ended (win or draw).
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the positions still open for play.
    ///
    /// Empty once the game is over: a terminal outcome accepts no moves.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Returns a status string for display.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Player {:?}'s turn", self.current_player),
            _ => self.outcome.to_string(),
        }
    }

    /// Replays a move sequence from the initial state.
    ///
    /// Each move is fully validated, including turn ownership.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered; the partially built
    /// engine is discarded.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::new();

        for action in moves {
            engine.apply(*action)?;
        }

        Ok(engine)
    }

    /// Builds an engine directly from parts (for verification harnesses).
    #[cfg(kani)]
    pub(crate) fn from_parts(
        board: Board,
        current_player: Player,
        outcome: Outcome,
        history: Vec<Move>,
    ) -> Self {
        Self {
            board,
            current_player,
            outcome,
            history,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
