//! Kani arbitrary implementations for engine types.
//!
//! These implementations allow Kani to explore all possible values of
//! our types during model checking.

#[cfg(kani)]
use crate::{Board, Cell, GameEngine, Line, Move, Outcome, Player, Position};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() {
            Player::X
        } else {
            Player::O
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        match Position::from_index(index) {
            Some(pos) => pos,
            None => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Line {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 8);
        Line::ALL[index]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any())
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let cells: [Cell; 9] = kani::any();
        Board::from_cells(cells)
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Outcome {
    fn any() -> Self {
        let discriminant: u8 = kani::any();
        kani::assume(discriminant < 3);
        match discriminant {
            0 => Outcome::InProgress,
            1 => Outcome::Won {
                player: kani::any(),
                line: kani::any(),
            },
            _ => Outcome::Draw,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for GameEngine {
    fn any() -> Self {
        let board: Board = kani::any();
        let current_player: Player = kani::any();
        let outcome: Outcome = kani::any();

        // Generate history of moves
        let history_len: usize = kani::any();
        kani::assume(history_len <= 9);

        let mut history = Vec::with_capacity(history_len);
        for _ in 0..history_len {
            history.push(kani::any());
        }

        // This bypasses normal construction, allowing Kani to explore
        // invalid states
        GameEngine::from_parts(board, current_player, outcome, history)
    }
}
