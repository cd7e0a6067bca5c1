//! Model-View-Intent primitives shared by every stateful piece of the UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Key presses become intents, a reducer folds each intent into the next
//! state, and the render pass re-reads the state on every frame.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
