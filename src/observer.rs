//! Step observer trait for monitoring engine progress.

use crate::engine::BodyHandle;

/// Trait for observing physics steps.
///
/// Implement this to monitor the engine (debug overlays, profiling, reacting to
/// a snapped rope). All methods default to no-ops.
pub trait StepObserver {
    /// Called after every body has had gravity applied and been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over all bodies.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when one or more links of `body` tore during a relaxation pass.
    fn on_link_torn(&mut self, _body: BodyHandle, _links: usize) {}

    /// Called when a physics step is fully complete.
    fn on_step_complete(&mut self) {}

    /// Called when an update exceeded the catch-up cap and `steps` whole steps
    /// were discarded.
    fn on_steps_dropped(&mut self, _steps: usize) {}
}

/// An observer that ignores everything.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
