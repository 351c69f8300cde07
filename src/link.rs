//! Tearable distance constraints between two point masses.

use crate::float::Float;
use crate::point::PointMass;

/// What a single [`LinkConstraint::solve`] pass did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The link was already torn; nothing happened.
    Broken,
    /// The endpoints separated past the tear distance during this pass.
    Tore,
    /// The endpoints coincide, so there is no direction to correct along.
    Degenerate,
    /// A rope shorter than its rest length; ropes only resist stretching.
    Slack,
    /// Positions were moved toward the rest length.
    Corrected,
}

/// Distance constraint between two points of a body, relaxed one pass at a time.
///
/// Endpoints are indices into the point slice handed to [`solve`](Self::solve).
/// A pinned endpoint takes none of the correction. Once torn, a link stays torn.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    stiffness: F,
    tear_distance: F,
    rigid: bool,
    torn: bool,
}

impl<F: Float> LinkConstraint<F> {
    /// Rigid link with the given rest length, stiffness 0.95 and a tear distance
    /// of 1.5x the rest length.
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        LinkConstraint {
            a,
            b,
            rest_length,
            stiffness: F::from_f64(0.95),
            tear_distance: rest_length * F::from_f64(1.5),
            rigid: true,
            torn: false,
        }
    }

    /// Rigid link resting at `rest_length`, or at the current distance between
    /// `a` and `b` when `rest_length` is not positive.
    pub fn from_points(a: usize, b: usize, rest_length: F, points: &[PointMass<F>]) -> Self {
        let rest_length = if rest_length > F::zero() {
            rest_length
        } else {
            points[a].pos.distance(points[b].pos)
        };
        Self::new(a, b, rest_length)
    }

    /// Rigid link resting at the current distance between `a` and `b`.
    pub fn between(a: usize, b: usize, points: &[PointMass<F>]) -> Self {
        Self::from_points(a, b, F::zero(), points)
    }

    /// Set the fraction of the error corrected per pass (1.0 = all of it).
    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the separation past which the link tears. A non-positive value
    /// keeps the default of 1.5x the rest length.
    pub fn with_tear_distance(mut self, tear_distance: F) -> Self {
        self.tear_distance = if tear_distance > F::zero() {
            tear_distance
        } else {
            self.rest_length * F::from_f64(1.5)
        };
        self
    }

    /// Switch to rope mode: correct stretching, ignore compression.
    pub fn rope(mut self) -> Self {
        self.rigid = false;
        self
    }

    /// One relaxation pass.
    pub fn solve(&mut self, points: &mut [PointMass<F>]) -> LinkOutcome {
        if self.torn {
            return LinkOutcome::Broken;
        }

        let diff = points[self.a].pos - points[self.b].pos;
        let dist = diff.length();

        if dist > self.tear_distance {
            self.torn = true;
            return LinkOutcome::Tore;
        }
        if dist == F::zero() {
            return LinkOutcome::Degenerate;
        }
        if !self.rigid && dist < self.rest_length {
            return LinkOutcome::Slack;
        }

        let correction = self.stiffness * (self.rest_length - dist) / dist;
        let offset = diff.scale(correction);

        let (a_share, b_share) = if points[self.a].is_pinned() {
            (F::zero(), F::one())
        } else if points[self.b].is_pinned() {
            (F::one(), F::zero())
        } else {
            (F::half(), F::half())
        };

        points[self.a].pos += offset.scale(a_share);
        points[self.b].pos -= offset.scale(b_share);
        LinkOutcome::Corrected
    }

    /// Current distance between the endpoints.
    pub fn current_length(&self, points: &[PointMass<F>]) -> F {
        points[self.a].pos.distance(points[self.b].pos)
    }

    /// Whether the link has torn. Never resets.
    pub fn is_torn(&self) -> bool { self.torn }
    /// Rigid links resist compression too; ropes only resist stretching.
    pub fn is_rigid(&self) -> bool { self.rigid }
    /// Target separation of the endpoints.
    pub fn rest_length(&self) -> F { self.rest_length }
    /// Fraction of the error corrected per pass.
    pub fn stiffness(&self) -> F { self.stiffness }
    /// Separation past which the link tears.
    pub fn tear_distance(&self) -> F { self.tear_distance }
}
