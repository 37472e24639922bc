//! Body - the one physical entity type (platform, box, player, goal)
//!
//! Bodies are axis-aligned rectangles with a small material model (mass,
//! friction, elasticity, gravity scale) and a bounded list of modifiers.

mod vec2;
mod body;
mod integrate;

pub use vec2::{Rect, Vec2};
pub use body::{Body, BodyId, BodyRole};
pub use integrate::{apply_ground_friction, integrate};
