//! Two-point Verlet rope physics for towed objects in games.
//!
//! `hitch` simulates a trailer dragged behind a moving object on a rope: the
//! tow point is pinned to whatever the game moves (the player), the trail point
//! swings freely under gravity and drag, and a stretch-only link keeps them
//! together. Built for arcade games that want a sleigh, cart or kite that reacts
//! to the player's motion without a full physics engine.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Per-axis pinning**: Points follow external control on x, y or both
//! - **Link constraints**: Rigid or rope mode, iterative relaxation, permanent tearing
//! - **Fixed timestep**: Accumulator decouples physics from frame rate, with a catch-up cap
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use hitch::{TowTrailer, Vec2, VerletEngine};
//!
//! let mut engine: VerletEngine<f32> = VerletEngine::new(288.0, 400.0, 450.0);
//! let sleigh = engine.add_body(TowTrailer::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 100.0)));
//!
//! // Once per frame: pin the tow point on the player, then step.
//! let trailer = engine.body_mut(sleigh).unwrap();
//! trailer.tow_to(Vec2::new(100.0, 120.0));
//! trailer.trail_point_mut().add_force(Vec2::new(-3900.0, -234.0));
//! engine.update(0.016);
//!
//! let trail = engine.body(sleigh).unwrap().trail_point().pos;
//! assert!(trail.x < 100.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod link;
pub mod body;
pub mod trailer;
pub mod engine;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::PointMass;
pub use link::{LinkConstraint, LinkOutcome};
pub use body::Body;
pub use trailer::{RopeCurve, TowTrailer};
pub use engine::{BodyHandle, VerletEngine};
pub use config::EngineConfig;
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::PhysicsError;
