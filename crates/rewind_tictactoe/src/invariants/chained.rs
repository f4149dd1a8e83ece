//! Invariants tying consecutive snapshots together.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the first snapshot is the empty board with no move.
pub struct GenesisEmpty;

impl Invariant<GameState> for GenesisEmpty {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .get(0)
            .is_some_and(|s| s.board().occupied() == 0 && s.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

/// Invariant: each snapshot adds exactly one mark to its predecessor.
///
/// The new mark sits at the snapshot's recorded coordinate and belongs to
/// the player whose turn it was one step earlier.
pub struct SnapshotsChained;

impl Invariant<GameState> for SnapshotsChained {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                let Some(pos) = after.last_move().and_then(|c| c.position()) else {
                    return false;
                };
                let expected = before
                    .board()
                    .with_mark(pos, Player::for_step(prev_step));
                before.board().get(pos) == Square::Empty && *after.board() == expected
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player on turn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Snapshot};

    #[test]
    fn test_replayed_game_is_chained() {
        let state = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
            Position::TopRight,
        ])
        .expect("legal moves");
        assert!(GenesisEmpty::holds(&state));
        assert!(SnapshotsChained::holds(&state));
    }

    #[test]
    fn test_wrong_mark_breaks_chain() {
        let mut state = GameState::new();
        let board = Board::new().with_mark(Position::Center, Player::O);
        state
            .history
            .branch_from(0, Snapshot::after_move(board, Position::Center.coordinate()));
        assert!(!SnapshotsChained::holds(&state));
    }

    #[test]
    fn test_descriptor_mismatch_breaks_chain() {
        let mut state = GameState::new();
        let board = Board::new().with_mark(Position::Center, Player::X);
        state
            .history
            .branch_from(0, Snapshot::after_move(board, Position::TopLeft.coordinate()));
        assert!(!SnapshotsChained::holds(&state));
    }
}
