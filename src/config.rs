//! Engine configuration.

use crate::error::PhysicsError;
use crate::float::Float;

/// Configuration for a [`VerletEngine`](crate::VerletEngine).
///
/// # Builder Pattern
/// ```
/// use hitch::config::EngineConfig;
///
/// let config: EngineConfig<f32> = EngineConfig::new(288.0, 400.0)
///     .with_gravity(450.0)
///     .with_timestep(1.0 / 60.0)
///     .with_iterations(4)
///     .with_max_steps_per_update(Some(30));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig<F: Float> {
    /// World box is `[0, 0]..[width, height]`.
    pub width: F,
    pub height: F,
    /// Downward (+y) acceleration added to free points every step. Default: 0.3.
    pub gravity: F,
    /// Fixed physics step in seconds. Default: 0.016.
    pub timestep: F,
    /// Relaxation passes per step. Default: 3.
    pub constraint_iterations: usize,
    /// Most steps a single update may run; `None` is uncapped. Default: 60.
    pub max_steps_per_update: Option<usize>,
}

impl<F: Float> EngineConfig<F> {
    pub const DEFAULT_ITERATIONS: usize = 3;
    pub const DEFAULT_MAX_STEPS: usize = 60;

    /// Default values for a world of the given size.
    pub fn new(width: F, height: F) -> Self {
        EngineConfig {
            width,
            height,
            gravity: F::from_f64(0.3),
            timestep: F::from_f64(0.016),
            constraint_iterations: Self::DEFAULT_ITERATIONS,
            max_steps_per_update: Some(Self::DEFAULT_MAX_STEPS),
        }
    }

    /// Set the downward acceleration applied to free points.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the fixed step length in seconds.
    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    /// Set the number of relaxation passes per step.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    /// Set the catch-up cap. `None` runs every owed step.
    pub fn with_max_steps_per_update(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps_per_update = max_steps;
        self
    }

    /// Check that the world, timestep, iteration count and cap are usable.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let positive = |v: F| v.is_finite() && v > F::zero();
        if !positive(self.width) || !positive(self.height) {
            return Err(PhysicsError::InvalidWorldSize);
        }
        if !positive(self.timestep) {
            return Err(PhysicsError::InvalidTimestep);
        }
        if self.constraint_iterations == 0 {
            return Err(PhysicsError::InvalidIterations);
        }
        if self.max_steps_per_update == Some(0) {
            return Err(PhysicsError::InvalidStepCap);
        }
        Ok(())
    }
}

impl<F: Float> Default for EngineConfig<F> {
    /// A 288x400 world, the size of the game canvas.
    fn default() -> Self {
        Self::new(F::from_f64(288.0), F::from_f64(400.0))
    }
}
