//! Claimsight Animation Engine
//!
//! Time-based visual transitions for the dashboard, decoupled from any
//! particular rendering surface.
//!
//! # Features
//!
//! - **Count-Up Interpolator**: integer counters that climb from 0 to an
//!   exact target over a fixed duration
//! - **Tweens**: scalar transitions with easing, start delay, and
//!   infinite looping
//! - **Particle Fields**: fixed-size decorative fields with injectable
//!   randomness and loop-forever phase animation
//! - **Entrance Choreography**: staggered fade/slide entrances for
//!   cards and list rows
//! - **Scheduler**: a single-threaded cooperative registry ticked by
//!   the host loop; wrapper types deregister their animation on drop

pub mod counter;
pub mod easing;
pub mod particles;
pub mod scheduler;
pub mod stagger;
pub mod tween;

pub use counter::{CountUp, COUNT_STEPS, COUNT_TICK_MS};
pub use easing::Easing;
pub use particles::{Particle, ParticleField, ParticleFieldConfig, ParticleState};
pub use scheduler::{
    AnimatedCount, AnimatedTween, AnimationScheduler, CounterId, SchedulerHandle, TweenId,
};
pub use stagger::{
    Choreographer, Entrance, EntrancePhase, EntranceSpec, StaggerConfig, StaggerDirection,
};
pub use tween::Tween;
