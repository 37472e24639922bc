//! Collision Resolver - body vs. static geometry
//!
//! Two sweeps over the full static set: vertical first, then horizontal.
//! Ground contact is settled by the vertical sweep so anything in the
//! horizontal response (and friction next tick) sees this tick's value.

mod contact;
mod resolve;

pub use contact::{blocks, ghost_passes, rests_on, separate_horizontally};
pub use resolve::resolve_static;
