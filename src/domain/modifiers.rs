//! Modifier effect catalog.
//!
//! Every effect is a reversible transform over a fixed set of body
//! parameters. `apply` snapshots exactly the parameters it is about to touch,
//! `remove` writes the snapshot back. Removal therefore restores the values
//! the body had right before this modifier, which may themselves come from
//! another modifier.

use serde::{Deserialize, Serialize};

use crate::domain::config::ModifierSettings;
use crate::body::{Body, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    Bouncy,
    Heavy,
    Floaty,
    Sticky,
    Reversed,
    Ghostly,
}

impl EffectKind {
    pub const ALL: [EffectKind; 6] = [
        EffectKind::Bouncy,
        EffectKind::Heavy,
        EffectKind::Floaty,
        EffectKind::Sticky,
        EffectKind::Reversed,
        EffectKind::Ghostly,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EffectKind::Bouncy => "bouncy",
            EffectKind::Heavy => "heavy",
            EffectKind::Floaty => "floaty",
            EffectKind::Sticky => "sticky",
            EffectKind::Reversed => "reversed",
            EffectKind::Ghostly => "ghostly",
        }
    }

    /// Stable numeric id for the wasm boundary.
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        EffectKind::ALL.get(id as usize).copied()
    }

    /// Outline color for a body carrying this effect.
    pub fn color(self) -> [u8; 3] {
        match self {
            EffectKind::Bouncy => [0, 255, 255],
            EffectKind::Heavy => [139, 69, 19],
            EffectKind::Floaty => [255, 105, 180],
            EffectKind::Sticky => [128, 0, 128],
            EffectKind::Reversed => [255, 165, 0],
            EffectKind::Ghostly => [128, 128, 128],
        }
    }
}

/// Pre-effect parameter values, one variant per effect kind.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Snapshot {
    Bouncy { elasticity: f32, mass: f32 },
    Heavy { mass: f32, friction: f32 },
    Floaty { gravity_scale: f32, mass: f32 },
    Sticky { velocity: Vec2, friction: f32, is_draggable: bool },
    Reversed { velocity_x: f32, elasticity: f32 },
    Ghostly { collision_enabled: bool, alpha: u8, mass: f32 },
}

/// An effect instance owned by exactly one body.
#[derive(Clone, Debug, PartialEq)]
pub struct Modifier {
    kind: EffectKind,
    snapshot: Option<Snapshot>,
}

impl Modifier {
    pub fn new(kind: EffectKind) -> Self {
        Self { kind, snapshot: None }
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn is_applied(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Capture the parameters this effect touches, then transform them.
    pub fn apply(&mut self, body: &mut Body, settings: &ModifierSettings) {
        let scaled_mass = |mass: f32, scale: f32| (mass * scale).max(settings.min_mass);

        let snapshot = match self.kind {
            EffectKind::Bouncy => {
                let snap = Snapshot::Bouncy { elasticity: body.elasticity, mass: body.mass };
                body.elasticity = settings.bouncy_elasticity;
                body.mass = scaled_mass(body.mass, settings.bouncy_mass_scale);
                snap
            }
            EffectKind::Heavy => {
                let snap = Snapshot::Heavy { mass: body.mass, friction: body.friction };
                body.mass = scaled_mass(body.mass, settings.heavy_mass_multiplier);
                body.friction *= settings.heavy_friction_scale;
                snap
            }
            EffectKind::Floaty => {
                let snap = Snapshot::Floaty { gravity_scale: body.gravity_scale, mass: body.mass };
                body.gravity_scale *= settings.floaty_gravity_scale;
                body.mass = scaled_mass(body.mass, settings.floaty_mass_scale);
                snap
            }
            EffectKind::Sticky => {
                let snap = Snapshot::Sticky {
                    velocity: body.velocity,
                    friction: body.friction,
                    is_draggable: body.is_draggable,
                };
                body.velocity = Vec2::zero();
                body.friction = settings.sticky_drag_force;
                body.is_draggable = true;
                snap
            }
            EffectKind::Reversed => {
                let snap = Snapshot::Reversed {
                    velocity_x: body.velocity.x,
                    elasticity: body.elasticity,
                };
                // One-time flip; later input is not inverted.
                body.velocity.x = -body.velocity.x;
                body.elasticity = (body.elasticity * settings.reversed_elasticity_scale).min(1.0);
                snap
            }
            EffectKind::Ghostly => {
                let snap = Snapshot::Ghostly {
                    collision_enabled: body.collision_enabled,
                    alpha: body.alpha,
                    mass: body.mass,
                };
                body.collision_enabled = false;
                body.alpha = settings.ghostly_alpha;
                body.mass = scaled_mass(body.mass, settings.ghostly_mass_scale);
                snap
            }
        };

        self.snapshot = Some(snapshot);
    }

    /// Restore every captured parameter to its exact snapshot value.
    pub fn remove(&mut self, body: &mut Body) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };

        match snapshot {
            Snapshot::Bouncy { elasticity, mass } => {
                body.elasticity = elasticity;
                body.mass = mass;
            }
            Snapshot::Heavy { mass, friction } => {
                body.mass = mass;
                body.friction = friction;
            }
            Snapshot::Floaty { gravity_scale, mass } => {
                body.gravity_scale = gravity_scale;
                body.mass = mass;
            }
            Snapshot::Sticky { velocity, friction, is_draggable } => {
                body.velocity = velocity;
                body.friction = friction;
                body.is_draggable = is_draggable;
            }
            Snapshot::Reversed { velocity_x, elasticity } => {
                body.velocity.x = velocity_x;
                body.elasticity = elasticity;
            }
            Snapshot::Ghostly { collision_enabled, alpha, mass } => {
                body.collision_enabled = collision_enabled;
                body.alpha = alpha;
                body.mass = mass;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{Body, BodyId, BodyRole, Rect};

    const EPS: f32 = 1e-6;

    fn sample_body() -> Body {
        let mut body = Body::new(BodyId(1), BodyRole::Dynamic, Rect::new(10.0, 20.0, 32.0, 32.0));
        body.velocity = Vec2::new(3.0, -2.0);
        body.mass = 1.7;
        body.friction = 0.4;
        body.elasticity = 0.25;
        body.gravity_scale = 1.0;
        body
    }

    fn assert_params_eq(a: &Body, b: &Body) {
        assert!((a.mass - b.mass).abs() < EPS, "mass {} vs {}", a.mass, b.mass);
        assert!((a.friction - b.friction).abs() < EPS);
        assert!((a.elasticity - b.elasticity).abs() < EPS);
        assert!((a.gravity_scale - b.gravity_scale).abs() < EPS);
        assert!((a.velocity.x - b.velocity.x).abs() < EPS);
        assert!((a.velocity.y - b.velocity.y).abs() < EPS);
        assert_eq!(a.alpha, b.alpha);
        assert_eq!(a.collision_enabled, b.collision_enabled);
        assert_eq!(a.is_draggable, b.is_draggable);
    }

    #[test]
    fn every_kind_is_an_exact_inverse() {
        let settings = ModifierSettings::default();
        for kind in EffectKind::ALL {
            let before = sample_body();
            let mut body = before.clone();
            let mut m = Modifier::new(kind);
            m.apply(&mut body, &settings);
            assert!(m.is_applied());
            m.remove(&mut body);
            assert!(!m.is_applied());
            assert_params_eq(&body, &before);
        }
    }

    #[test]
    fn stacked_kinds_unwind_in_reverse_order() {
        let settings = ModifierSettings::default();
        let before = sample_body();
        let mut body = before.clone();

        let mut stack: Vec<Modifier> = [EffectKind::Heavy, EffectKind::Bouncy, EffectKind::Ghostly]
            .into_iter()
            .map(Modifier::new)
            .collect();
        for m in stack.iter_mut() {
            m.apply(&mut body, &settings);
        }
        assert!((body.mass - 1.7 * 5.0 * 0.8 * 0.3).abs() < 1e-4);

        for m in stack.iter_mut().rev() {
            m.remove(&mut body);
        }
        assert_params_eq(&body, &before);
    }

    #[test]
    fn mass_never_drops_below_floor() {
        let settings = ModifierSettings { min_mass: 0.1, ..ModifierSettings::default() };
        let mut body = sample_body();
        body.mass = 0.12;
        let mut applied = Vec::new();
        for kind in [EffectKind::Ghostly, EffectKind::Floaty, EffectKind::Bouncy] {
            let mut m = Modifier::new(kind);
            m.apply(&mut body, &settings);
            assert!(body.mass >= settings.min_mass);
            applied.push(m);
        }
    }

    #[test]
    fn remove_without_apply_is_a_no_op() {
        let mut body = sample_body();
        let before = body.clone();
        Modifier::new(EffectKind::Sticky).remove(&mut body);
        assert_params_eq(&body, &before);
    }

    #[test]
    fn sticky_freezes_and_enables_drag() {
        let settings = ModifierSettings::default();
        let mut body = sample_body();
        let mut m = Modifier::new(EffectKind::Sticky);
        m.apply(&mut body, &settings);
        assert_eq!(body.velocity, Vec2::zero());
        assert!(body.is_draggable);
        assert_eq!(body.friction, settings.sticky_drag_force);
    }

    #[test]
    fn names_and_ids_roundtrip() {
        for kind in EffectKind::ALL {
            assert_eq!(EffectKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(EffectKind::from_id(6), None);
        let parsed: EffectKind = serde_json::from_str("\"ghostly\"").unwrap();
        assert_eq!(parsed, EffectKind::Ghostly);
    }
}
