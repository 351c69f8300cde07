//! Verlet point masses with per-axis pinning.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet point mass: position-based dynamics with implicit velocity.
///
/// Velocity is never stored; it is `pos - prev_pos` at the moment of integration.
/// Acceleration is consumed by every [`update`](PointMass::update), so sustained
/// forces must be re-applied each step.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    /// When set, the x coordinate is held at this value through every integration.
    pub pin_x: Option<F>,
    /// When set, the y coordinate is held at this value through every integration.
    pub pin_y: Option<F>,
    /// Multiplier on the inferred velocity each step. 1.0 = no drag.
    pub damping: F,
}

impl<F: Float> PointMass<F> {
    /// A free point at rest at `pos`.
    pub fn new(pos: Vec2<F>) -> Self {
        PointMass {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            pin_x: None,
            pin_y: None,
            damping: F::one(),
        }
    }

    /// A point pinned on both axes at its starting position.
    pub fn pinned(pos: Vec2<F>) -> Self {
        let mut p = Self::new(pos);
        p.pin();
        p
    }

    /// Set the velocity multiplier applied each step.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Verlet step: pin, infer velocity, advance, clear acceleration.
    ///
    /// Pins are applied before the velocity is inferred and again after the
    /// advance, so a pinned axis ends every step exactly on its pin.
    pub fn update(&mut self, dt: F) {
        self.apply_pins();

        let velocity = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        self.pos = self.pos + velocity.scale(self.damping) + self.acceleration.scale(dt * dt);
        self.acceleration = Vec2::zero();

        self.apply_pins();
    }

    fn apply_pins(&mut self) {
        if let Some(x) = self.pin_x {
            self.pos.x = x;
        }
        if let Some(y) = self.pin_y {
            self.pos.y = y;
        }
    }

    /// Accumulate an acceleration until the next `update`.
    pub fn add_force(&mut self, force: Vec2<F>) {
        self.acceleration += force;
    }

    /// Clamp into the box `[min, max]`.
    ///
    /// A previous position lying past the same bound is clamped with it, so the
    /// next step does not read the clamp as a velocity.
    pub fn constrain_to_box(&mut self, min: Vec2<F>, max: Vec2<F>) {
        if self.pos.x < min.x {
            self.pos.x = min.x;
            if self.prev_pos.x < min.x {
                self.prev_pos.x = min.x;
            }
        }
        if self.pos.x > max.x {
            self.pos.x = max.x;
            if self.prev_pos.x > max.x {
                self.prev_pos.x = max.x;
            }
        }
        if self.pos.y < min.y {
            self.pos.y = min.y;
            if self.prev_pos.y < min.y {
                self.prev_pos.y = min.y;
            }
        }
        if self.pos.y > max.y {
            self.pos.y = max.y;
            if self.prev_pos.y > max.y {
                self.prev_pos.y = max.y;
            }
        }
    }

    /// Pin both axes at the current position.
    pub fn pin(&mut self) {
        self.pin_x = Some(self.pos.x);
        self.pin_y = Some(self.pos.y);
    }

    /// Teleport to `pos` with zero velocity and pin there.
    pub fn pin_at(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
        self.pin_x = Some(pos.x);
        self.pin_y = Some(pos.y);
    }

    /// Pin or release the x axis alone.
    pub fn set_pin_x(&mut self, x: Option<F>) {
        self.pin_x = x;
    }

    /// Pin or release the y axis alone.
    pub fn set_pin_y(&mut self, y: Option<F>) {
        self.pin_y = y;
    }

    /// Release both axes. The point keeps its current velocity.
    pub fn unpin(&mut self) {
        self.pin_x = None;
        self.pin_y = None;
    }

    /// True when either axis is pinned.
    pub fn is_pinned(&self) -> bool {
        self.pin_x.is_some() || self.pin_y.is_some()
    }

    /// Displacement over the last step.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }
}
