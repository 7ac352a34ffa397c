//! Game engine: session store, payoff matrix, rejection signals.
//!
//! All state lives in [`GameStore`]; [`payoff`] is the deterministic matrix
//! it applies at resolution; [`Rejection`] is the typed "no effect" signal
//! every refused operation returns.

pub mod error;
pub mod payoff;
pub mod store;

pub use error::Rejection;
pub use payoff::{payoff, GameResult, Outcome};
pub use store::GameStore;
