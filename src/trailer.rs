//! A towed trailer: one pinned tow point dragging a free point on a rope.

use crate::body::Body;
use crate::float::Float;
use crate::link::{LinkConstraint, LinkOutcome};
use crate::point::PointMass;
use crate::vec::Vec2;

const TOW: usize = 0;
const TRAIL: usize = 1;

/// Quadratic curve used to draw a sagging rope.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RopeCurve<F: Float> {
    pub start: Vec2<F>,
    pub control: Vec2<F>,
    pub end: Vec2<F>,
}

/// Two point masses joined by a stretch-only rope.
///
/// The tow point follows whatever drives it (usually the player, via
/// [`tow_to`](Self::tow_to)); only the trail point is simulated.
#[derive(Clone, Debug)]
pub struct TowTrailer<F: Float> {
    points: [PointMass<F>; 2],
    rope: LinkConstraint<F>,
}

impl<F: Float> TowTrailer<F> {
    /// Rope length is the starting distance between the two points.
    pub fn new(tow: Vec2<F>, trail: Vec2<F>) -> Self {
        Self::with_rope_length(tow, trail, tow.distance(trail))
    }

    /// Explicit rope length. A non-positive length means "measure it": the rope
    /// rests at the starting distance and tears at 1.5x that.
    pub fn with_rope_length(tow: Vec2<F>, trail: Vec2<F>, rope_length: F) -> Self {
        let points = [PointMass::new(tow), PointMass::new(trail)];
        let rope = LinkConstraint::from_points(TOW, TRAIL, rope_length, &points)
            .with_stiffness(F::one())
            // Far enough that gameplay never snaps the rope by accident.
            .with_tear_distance(rope_length * F::from_f64(100.0))
            .rope();
        TowTrailer { points, rope }
    }

    /// Integrate the trail point. The tow point is positioned externally.
    pub fn update(&mut self, dt: F) {
        self.points[TRAIL].update(dt);
    }

    /// Add `gravity` as a downward force on the trail point only.
    pub fn apply_gravity(&mut self, gravity: F) {
        self.points[TRAIL].add_force(Vec2::new(F::zero(), gravity));
    }

    /// One relaxation pass over the rope.
    pub fn solve_constraints(&mut self) -> LinkOutcome {
        self.rope.solve(&mut self.points)
    }

    /// Clamp the trail point. The tow point mirrors the player and stays in bounds.
    pub fn constrain_to_box(&mut self, min: Vec2<F>, max: Vec2<F>) {
        self.points[TRAIL].constrain_to_box(min, max);
    }

    /// Push the tow point along a compass heading: 0 = up, 90 = east,
    /// 180 = down, 270 = west.
    pub fn pull(&mut self, direction_degrees: F, force: F) {
        let radians = direction_degrees.to_radians();
        let push = Vec2::new(radians.sin() * force, -(radians.cos() * force));
        self.points[TOW].add_force(push);
    }

    /// Move the tow point to `pos` and pin it there.
    pub fn tow_to(&mut self, pos: Vec2<F>) {
        self.points[TOW].pin_at(pos);
    }

    pub fn tow_point(&self) -> &PointMass<F> { &self.points[TOW] }
    /// The tow point is never integrated, so setting its pins alone does not move
    /// it. Use [`tow_to`](Self::tow_to) to reposition it.
    pub fn tow_point_mut(&mut self) -> &mut PointMass<F> { &mut self.points[TOW] }
    pub fn trail_point(&self) -> &PointMass<F> { &self.points[TRAIL] }
    pub fn trail_point_mut(&mut self) -> &mut PointMass<F> { &mut self.points[TRAIL] }
    pub fn rope(&self) -> &LinkConstraint<F> { &self.rope }

    pub fn is_rope_torn(&self) -> bool {
        self.rope.is_torn()
    }

    /// Angle in radians of the vector from the trail point to the tow point.
    pub fn heading(&self) -> F {
        (self.points[TOW].pos - self.points[TRAIL].pos).angle()
    }

    /// Curve from the tow point to the trail point, running on `inset` past the
    /// trail point (so it ends under the trailer sprite) and sagging by `sag`
    /// at the middle.
    pub fn rope_curve(&self, inset: F, sag: F) -> RopeCurve<F> {
        let start = self.points[TOW].pos;
        let end = self.points[TRAIL].pos - Vec2::from_angle(self.heading(), inset);
        let mid = start.midpoint(end);
        RopeCurve {
            start,
            control: Vec2::new(mid.x, mid.y + sag),
            end,
        }
    }
}

impl<F: Float> Body<F> for TowTrailer<F> {
    fn apply_gravity(&mut self, gravity: F) {
        TowTrailer::apply_gravity(self, gravity);
    }

    fn update(&mut self, dt: F) {
        TowTrailer::update(self, dt);
    }

    fn solve_constraints(&mut self) -> usize {
        match TowTrailer::solve_constraints(self) {
            LinkOutcome::Tore => 1,
            _ => 0,
        }
    }

    fn constrain_to_box(&mut self, min: Vec2<F>, max: Vec2<F>) {
        TowTrailer::constrain_to_box(self, min, max);
    }
}
