//! Mallet Engine - physics and interaction core for a modifier-driven
//! puzzle-platformer, compiled to WASM
//!
//! Architecture:
//! - core/       - errors, time source
//! - domain/     - config, modifier catalog, level description
//! - systems/    - per-tick systems (integration, collision, interaction, bounds, drag)
//! - simulation/ - `WorldCore` orchestration and the wasm `World` facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the most used systems
pub use systems::body;
pub use systems::collision;
pub use systems::interaction;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🔨 Mallet WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use body::{Body, BodyId, BodyRole};
pub use domain::config::PhysicsConfig;
pub use domain::level::LevelLayout;
pub use domain::modifiers::EffectKind;
pub use simulation::{BodyView, World, WorldCore};

// Export modifier kind ids for JS
#[wasm_bindgen]
pub fn mod_bouncy() -> u8 { EffectKind::Bouncy.id() }
#[wasm_bindgen]
pub fn mod_heavy() -> u8 { EffectKind::Heavy.id() }
#[wasm_bindgen]
pub fn mod_floaty() -> u8 { EffectKind::Floaty.id() }
#[wasm_bindgen]
pub fn mod_sticky() -> u8 { EffectKind::Sticky.id() }
#[wasm_bindgen]
pub fn mod_reversed() -> u8 { EffectKind::Reversed.id() }
#[wasm_bindgen]
pub fn mod_ghostly() -> u8 { EffectKind::Ghostly.id() }

/// Modifier kind name for a numeric id ("" when unknown)
#[wasm_bindgen]
pub fn mod_name(id: u8) -> String {
    EffectKind::from_id(id).map(|k| k.name().to_string()).unwrap_or_default()
}
