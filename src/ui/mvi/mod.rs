//! Model-View-Intent (MVI) architecture primitives.
//!
//! Unidirectional data flow for the UI layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything the view needs
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function turning a state and an intent into the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
