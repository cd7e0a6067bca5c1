use super::intent::Intent;
use super::state::UiState;

/// Folds an intent into a state. The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
