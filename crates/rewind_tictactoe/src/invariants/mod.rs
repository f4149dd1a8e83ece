//! First-class invariants over [`GameState`].
//!
//! Each invariant is a small named property. They are composed into
//! [`StateInvariants`] and checked after every transition in debug builds.

mod chained;
mod step;

pub use chained::{GenesisEmpty, SnapshotsChained};
pub use step::{StepInBounds, TurnMatchesStep};

use super::state::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` if none are.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every invariant a reachable [`GameState`] satisfies.
pub type StateInvariants = (StepInBounds, TurnMatchesStep, GenesisEmpty, SnapshotsChained);

/// Checks [`StateInvariants`] against `state`.
pub fn check_state(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    StateInvariants::check_all(state)
}
