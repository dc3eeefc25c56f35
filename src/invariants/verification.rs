//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible engine states (bounded).

#[cfg(kani)]
mod proofs {
    use crate::invariants::{Invariant, MonotonicBoardInvariant};
    use crate::{GameEngine, Move};

    /// Verify MonotonicBoardInvariant holds for every replayed history.
    ///
    /// Proves: Cells only transition Empty -> Occupied, never reverse.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_monotonic_board_replay() {
        let moves: [Move; 4] = [kani::any(), kani::any(), kani::any(), kani::any()];

        // Replay rejects illegal sequences; legal ones must preserve
        // the invariant
        if let Ok(engine) = GameEngine::replay(&moves) {
            assert!(
                MonotonicBoardInvariant::holds(&engine),
                "MonotonicBoardInvariant violated"
            );
        }
    }
}
