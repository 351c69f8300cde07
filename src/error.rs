//! Error types for engine setup and body lookup.

use core::fmt;

/// Errors reported when configuring an engine or addressing its bodies.
///
/// Numeric degeneracies during stepping (coincident points, torn links) are not
/// errors; the solver absorbs them.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// World width and height must be positive and finite.
    InvalidWorldSize,
    /// Fixed timestep must be positive and finite.
    InvalidTimestep,
    /// At least one relaxation pass per step is required.
    InvalidIterations,
    /// A catch-up cap, when set, must allow at least one step.
    InvalidStepCap,
    /// Body handle does not belong to this engine.
    BodyOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidWorldSize => write!(f, "world width and height must be positive and finite"),
            PhysicsError::InvalidTimestep => write!(f, "timestep must be positive and finite"),
            PhysicsError::InvalidIterations => write!(f, "constraint iterations must be at least 1"),
            PhysicsError::InvalidStepCap => write!(f, "max steps per update must be at least 1"),
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
