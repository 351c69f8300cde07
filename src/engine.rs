//! Fixed-timestep Verlet engine.

use crate::body::Body;
use crate::config::EngineConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::trailer::TowTrailer;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Handle to a body owned by a [`VerletEngine`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// Steps a set of bodies in fixed increments inside a world box.
///
/// Elapsed time passed to [`update`](Self::update) is accumulated and consumed
/// in whole steps of `config.timestep`, so results do not depend on how the
/// caller slices real time into frames.
pub struct VerletEngine<F: Float, B: Body<F> = TowTrailer<F>> {
    config: EngineConfig<F>,
    bodies: AllocVec<B>,
    leftover: F,
}

impl<F: Float, B: Body<F>> VerletEngine<F, B> {
    /// Engine with default timestep, iteration count and catch-up cap.
    pub fn new(width: F, height: F, gravity: F) -> Self {
        VerletEngine {
            config: EngineConfig::new(width, height).with_gravity(gravity),
            bodies: AllocVec::new(),
            leftover: F::zero(),
        }
    }

    /// Engine from a validated configuration.
    pub fn from_config(config: EngineConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(VerletEngine {
            config,
            bodies: AllocVec::new(),
            leftover: F::zero(),
        })
    }

    /// Register a body. Bodies are never removed.
    pub fn add_body(&mut self, body: B) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(body);
        log::debug!("registered body {} ({} total)", handle.0, self.bodies.len());
        handle
    }

    /// Advance by `dt` seconds of real time. Returns the number of steps run.
    pub fn update(&mut self, dt: F) -> usize {
        self.update_observed(dt, &mut NoOpStepObserver)
    }

    /// [`update`](Self::update), reporting progress to `observer`.
    ///
    /// A non-finite `dt` is ignored. When the catch-up cap applies, the surplus
    /// time is discarded and less than one step is carried over.
    pub fn update_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) -> usize {
        if !dt.is_finite() {
            log::warn!("ignoring non-finite frame time {}", dt);
            return 0;
        }

        let timestep = self.config.timestep;
        self.leftover = self.leftover + dt;
        let mut steps = (self.leftover / timestep).floor().to_usize();
        self.leftover = self.leftover - F::from_usize(steps) * timestep;

        if let Some(cap) = self.config.max_steps_per_update {
            if steps > cap {
                let dropped = steps - cap;
                log::warn!("physics fell behind: running {} steps, dropping {}", cap, dropped);
                observer.on_steps_dropped(dropped);
                steps = cap;
                if !(self.leftover >= F::zero() && self.leftover < timestep) {
                    self.leftover = F::zero();
                }
            }
        }

        log::trace!("update dt={} steps={} leftover={}", dt, steps, self.leftover);
        for _ in 0..steps {
            self.step(observer);
        }
        steps
    }

    fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let gravity = self.config.gravity;
        let timestep = self.config.timestep;
        for body in self.bodies.iter_mut() {
            body.apply_gravity(gravity);
            body.update(timestep);
        }
        observer.on_integrate();

        for i in 0..self.config.constraint_iterations {
            for (index, body) in self.bodies.iter_mut().enumerate() {
                let torn = body.solve_constraints();
                if torn > 0 {
                    log::debug!("body {}: {} link(s) torn", index, torn);
                    observer.on_link_torn(BodyHandle(index), torn);
                }
            }
            observer.on_constraint_iteration(i);
        }

        let min = Vec2::zero();
        let max = Vec2::new(self.config.width, self.config.height);
        for body in self.bodies.iter_mut() {
            body.constrain_to_box(min, max);
        }
        observer.on_step_complete();
    }

    /// The body behind `handle`, if it was issued by this engine.
    pub fn body(&self, handle: BodyHandle) -> Option<&B> {
        self.bodies.get(handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut B> {
        self.bodies.get_mut(handle.0)
    }

    /// Like [`body_mut`](Self::body_mut), with the miss reported as an error.
    pub fn try_body_mut(&mut self, handle: BodyHandle) -> Result<&mut B, PhysicsError> {
        let count = self.bodies.len();
        self.bodies
            .get_mut(handle.0)
            .ok_or(PhysicsError::BodyOutOfBounds { index: handle.0, count })
    }

    pub fn bodies(&self) -> &[B] { &self.bodies }
    pub fn body_count(&self) -> usize { self.bodies.len() }
    pub fn config(&self) -> &EngineConfig<F> { &self.config }

    /// Seconds accumulated but not yet consumed by a whole step.
    pub fn leftover_time(&self) -> F { self.leftover }
}
