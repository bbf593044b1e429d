//! Common module containing shared state primitives
//!
//! Every store in [`crate::domains`] keeps its state in a [`StateCell`] and
//! reports a [`LoadPhase`].

pub mod phase;
pub mod store;

pub use phase::LoadPhase;
pub use store::StateCell;
