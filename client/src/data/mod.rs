//! Dashboard records and the static data that seeds them.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no network layer: every page builds its state from the
//! constructors in `seed`. Record shapes live in `types` so state modules
//! and components share one vocabulary.

pub mod seed;
pub mod types;
