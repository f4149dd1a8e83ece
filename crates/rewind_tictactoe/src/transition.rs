//! The single transition function driving the game.

use super::contracts::{Contract, EventContract};
use super::event::{GameEvent, Rejection};
use super::position::Position;
use super::snapshot::Snapshot;
use super::state::GameState;
use super::types::Player;
use tracing::{debug, instrument};

/// Applies `event` to `state`, returning the next state.
///
/// A rejected event leaves the caller's state untouched; the error says
/// why. Postconditions are verified in debug builds.
#[instrument(skip(state), fields(step = state.current_step, to_move = %state.to_move))]
pub fn apply(state: &GameState, event: GameEvent) -> Result<GameState, Rejection> {
    EventContract::pre(state, &event)?;

    let next = match event {
        GameEvent::CellClicked { position } => select_cell(state, position),
        GameEvent::JumpTo { step } => jump_to(state, step),
        GameEvent::ToggleOrder => GameState {
            order: state.order.toggle(),
            ..state.clone()
        },
    };

    #[cfg(debug_assertions)]
    EventContract::post(state, &next)?;

    debug!(
        step = next.current_step,
        history_len = next.history.len(),
        "Event applied"
    );
    Ok(next)
}

fn select_cell(state: &GameState, position: Position) -> GameState {
    let board = state.board().with_mark(position, state.to_move);
    let mut history = state.history.clone();
    let current_step =
        history.branch_from(state.current_step, Snapshot::after_move(board, position.coordinate()));
    GameState {
        history,
        current_step,
        to_move: state.to_move.opponent(),
        order: state.order,
    }
}

fn jump_to(state: &GameState, step: usize) -> GameState {
    GameState {
        current_step: step,
        to_move: Player::for_step(step),
        ..state.clone()
    }
}

impl GameState {
    /// Applies `event` in place; a rejected event changes nothing.
    pub fn dispatch(&mut self, event: GameEvent) -> Result<(), Rejection> {
        *self = apply(self, event)?;
        Ok(())
    }

    /// Builds a state by selecting each position in turn from a new game.
    ///
    /// Fails on the first selection the rules reject.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(positions: &[Position]) -> Result<Self, Rejection> {
        positions.iter().try_fold(Self::new(), |state, &position| {
            apply(&state, GameEvent::CellClicked { position })
        })
    }
}
