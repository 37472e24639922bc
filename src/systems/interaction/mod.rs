//! Interaction Resolver - dynamic vs. dynamic and player vs. dynamic
//!
//! Runs after every body has been resolved against static geometry.
//! Box pairs trade horizontal momentum; the player gets its own rules for
//! pushing, standing and bouncing.

mod dynamic;
mod player;

pub use dynamic::{resolve_dynamic_pairs, resolve_pair};
pub use player::resolve_player;
