use serde::Serialize;

use crate::domain::config::{ModifierSettings, ObjectSettings};
use crate::domain::modifiers::{EffectKind, Modifier};

use super::vec2::{Rect, Vec2};

/// Stable handle for a body within one loaded level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BodyId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyRole {
    Static,
    Dynamic,
    Player,
    Goal,
}

/// Any physical thing in the world: platform, box, player or goal.
///
/// Every body has the same complete shape. Optional behavior is expressed
/// through plain flags, never through missing fields.
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    pub role: BodyRole,

    // === Physics State ===
    pub rect: Rect,
    /// Velocity (pixels per frame)
    pub velocity: Vec2,
    /// Always > 0
    pub mass: f32,
    pub friction: f32,
    /// Bounciness in [0, 1]
    pub elasticity: f32,
    pub gravity_scale: f32,

    /// Position at the start of the current tick
    pub prev_pos: Vec2,

    // === Appearance ===
    pub color: [u8; 3],
    pub alpha: u8,

    // === Flags ===
    pub on_ground: bool,
    pub is_pushable: bool,
    pub is_draggable: bool,
    pub being_dragged: bool,
    pub collision_enabled: bool,
    pub is_ghost_passable: bool,

    modifiers: Vec<Modifier>,
}

impl Body {
    /// Bare body with neutral material values.
    pub fn new(id: BodyId, role: BodyRole, rect: Rect) -> Self {
        Self {
            id,
            role,
            rect,
            velocity: Vec2::zero(),
            mass: 1.0,
            friction: 0.0,
            elasticity: 0.0,
            gravity_scale: 1.0,
            prev_pos: rect.pos(),
            color: [255, 255, 255],
            alpha: 255,
            on_ground: false,
            is_pushable: false,
            is_draggable: false,
            being_dragged: false,
            collision_enabled: true,
            is_ghost_passable: false,
            modifiers: Vec::new(),
        }
    }

    /// Immovable level geometry.
    pub fn new_static(id: BodyId, rect: Rect) -> Self {
        let mut body = Self::new(id, BodyRole::Static, rect);
        body.color = [0, 255, 0];
        body
    }

    /// Box-like object using the configured material defaults.
    pub fn new_dynamic(id: BodyId, rect: Rect, object: &ObjectSettings) -> Self {
        let mut body = Self::new(id, BodyRole::Dynamic, rect);
        body.mass = object.default_mass;
        body.friction = object.default_friction;
        body.elasticity = object.default_elasticity;
        body.is_pushable = true;
        body.color = [255, 0, 0];
        body
    }

    pub fn is_static(&self) -> bool {
        self.role == BodyRole::Static
    }

    /// Save current position as previous (call before integration)
    pub fn save_prev_state(&mut self) {
        self.prev_pos = self.rect.pos();
    }

    pub fn prev_rect(&self) -> Rect {
        Rect::new(self.prev_pos.x, self.prev_pos.y, self.rect.w, self.rect.h)
    }

    // === Modifiers ===

    pub fn has_modifier(&self, kind: EffectKind) -> bool {
        self.modifiers.iter().any(|m| m.kind() == kind)
    }

    /// Active kinds in the order they were applied.
    pub fn modifier_kinds(&self) -> Vec<EffectKind> {
        self.modifiers.iter().map(|m| m.kind()).collect()
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }

    /// Attach a modifier of `kind`. An existing modifier of the same kind is
    /// removed first so snapshots never nest. Returns false when the body is
    /// already at capacity.
    pub fn add_modifier(&mut self, kind: EffectKind, settings: &ModifierSettings) -> bool {
        self.remove_modifier(kind, settings);
        if self.modifiers.len() >= settings.max_active {
            return false;
        }

        let mut modifier = Modifier::new(kind);
        modifier.apply(self, settings);
        self.modifiers.push(modifier);
        true
    }

    /// Detach the modifier of `kind`, restoring what it changed.
    ///
    /// Modifiers applied after it snapshotted values it produced, so they are
    /// unwound newest first and re-applied in order once it is gone. Velocity
    /// is carried across the unwind: the one-shot velocity effects are not
    /// replayed.
    pub fn remove_modifier(&mut self, kind: EffectKind, settings: &ModifierSettings) -> bool {
        let Some(idx) = self.modifiers.iter().position(|m| m.kind() == kind) else {
            return false;
        };

        let velocity = self.velocity;
        let mut newer = self.modifiers.split_off(idx + 1);
        for modifier in newer.iter_mut().rev() {
            modifier.remove(self);
        }
        self.velocity = velocity;

        if let Some(mut modifier) = self.modifiers.pop() {
            modifier.remove(self);
        }

        let velocity = self.velocity;
        for mut modifier in newer {
            modifier.apply(self, settings);
            self.modifiers.push(modifier);
        }
        self.velocity = velocity;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crate_box() -> Body {
        Body::new_dynamic(BodyId(7), Rect::new(0.0, 0.0, 32.0, 32.0), &ObjectSettings::default())
    }

    #[test]
    fn duplicate_kind_replaces_instead_of_stacking() {
        let settings = ModifierSettings::default();
        let mut body = crate_box();

        assert!(body.add_modifier(EffectKind::Heavy, &settings));
        assert!(body.add_modifier(EffectKind::Heavy, &settings));

        assert_eq!(body.modifier_count(), 1);
        assert!((body.mass - 5.0).abs() < 1e-6);
    }

    #[test]
    fn capacity_is_enforced() {
        let settings = ModifierSettings::default();
        let mut body = crate_box();

        assert!(body.add_modifier(EffectKind::Heavy, &settings));
        assert!(body.add_modifier(EffectKind::Bouncy, &settings));
        assert!(body.add_modifier(EffectKind::Floaty, &settings));
        assert!(!body.add_modifier(EffectKind::Sticky, &settings));
        assert_eq!(
            body.modifier_kinds(),
            vec![EffectKind::Heavy, EffectKind::Bouncy, EffectKind::Floaty]
        );

        // Re-applying an active kind still works at capacity.
        assert!(body.add_modifier(EffectKind::Heavy, &settings));
        assert_eq!(body.modifier_count(), 3);
    }

    #[test]
    fn removing_all_restores_defaults() {
        let settings = ModifierSettings::default();
        let mut body = crate_box();
        let before = body.clone();

        body.add_modifier(EffectKind::Bouncy, &settings);
        body.add_modifier(EffectKind::Ghostly, &settings);
        body.add_modifier(EffectKind::Reversed, &settings);
        for kind in [EffectKind::Reversed, EffectKind::Ghostly, EffectKind::Bouncy] {
            assert!(body.remove_modifier(kind, &settings));
        }

        assert_eq!(body.modifier_count(), 0);
        assert_eq!(body.mass, before.mass);
        assert_eq!(body.elasticity, before.elasticity);
        assert!(body.collision_enabled);
        assert_eq!(body.alpha, 255);
    }

    #[test]
    fn removing_an_older_modifier_keeps_the_newer_one_intact() {
        let settings = ModifierSettings::default();
        let mut body = crate_box();
        let before = body.clone();

        body.add_modifier(EffectKind::Heavy, &settings);
        body.add_modifier(EffectKind::Bouncy, &settings);
        assert!(body.remove_modifier(EffectKind::Heavy, &settings));

        // Bouncy alone on the untouched baseline.
        assert_eq!(body.modifier_kinds(), vec![EffectKind::Bouncy]);
        assert!((body.mass - before.mass * settings.bouncy_mass_scale).abs() < 1e-6);
        assert_eq!(body.elasticity, settings.bouncy_elasticity);
        assert_eq!(body.friction, before.friction);

        assert!(body.remove_modifier(EffectKind::Bouncy, &settings));
        assert_eq!(body.modifier_count(), 0);
        assert_eq!(body.mass, before.mass);
        assert_eq!(body.elasticity, before.elasticity);
        assert_eq!(body.friction, before.friction);
    }

    #[test]
    fn unwinding_keeps_current_velocity() {
        let settings = ModifierSettings::default();
        let mut body = crate_box();
        body.velocity = Vec2::new(2.0, 0.0);

        body.add_modifier(EffectKind::Heavy, &settings);
        body.add_modifier(EffectKind::Reversed, &settings);
        assert_eq!(body.velocity.x, -2.0);
        body.velocity = Vec2::new(-1.5, 3.0);

        assert!(body.remove_modifier(EffectKind::Heavy, &settings));
        assert_eq!(body.velocity, Vec2::new(-1.5, 3.0));
        assert!(body.has_modifier(EffectKind::Reversed));
    }

    #[test]
    fn remove_missing_kind_reports_false() {
        let mut body = crate_box();
        assert!(!body.remove_modifier(EffectKind::Sticky, &ModifierSettings::default()));
    }
}
