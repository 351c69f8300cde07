//! The trait the engine steps bodies through.

use crate::float::Float;
use crate::vec::Vec2;

/// A simulated body made of point masses and links.
///
/// [`VerletEngine`](crate::VerletEngine) calls these in a fixed order every physics
/// step: `apply_gravity`, `update`, then `solve_constraints` once per relaxation
/// pass, then `constrain_to_box`.
pub trait Body<F: Float> {
    /// Add the downward gravity acceleration to the free points.
    fn apply_gravity(&mut self, gravity: F);

    /// Integrate the free points by `dt`.
    fn update(&mut self, dt: F);

    /// One relaxation pass over every link. Returns how many links tore during it.
    fn solve_constraints(&mut self) -> usize;

    /// Clamp the free points into `[min, max]`.
    fn constrain_to_box(&mut self, min: Vec2<F>, max: Vec2<F>);
}
