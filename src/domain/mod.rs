//! Domain data: tunables, the modifier catalog and level descriptions.

pub mod config;
pub mod level;
pub mod modifiers;
