//! Per-tick systems. Each one is a free function (or small controller) over
//! bodies and the settings it needs.

pub mod body;
pub mod collision;
pub mod interaction;
pub mod bounds;
pub mod drag;
pub mod player_control;
