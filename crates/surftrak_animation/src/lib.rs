//! SurfTrak Animation System
//!
//! Timelines, sequences, springs and derived styles, advanced on an explicit
//! frame clock.
//!
//! # Features
//!
//! - **Timelines**: duration + easing transitions with repeat, delay and ping-pong
//! - **Sequences**: timelines chained back to back, repeatable as a whole
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Retargetable**: restarting a value in flight continues from where it is
//! - **Projection**: pure functions from animated values to style properties
//! - **Scheduler**: slot-based registry that advances everything once per frame

pub mod animated;
pub mod easing;
pub mod projector;
pub mod scheduler;
pub mod sequence;
pub mod spring;
pub mod timeline;
pub mod values;

pub use animated::{Advance, AnimatedValue, Driver, Step};
pub use easing::Easing;
pub use projector::{interpolate, interpolate_color, StyleProps};
pub use scheduler::{
    Animatable, Animated, AnimatedSlot, AnimationScheduler, FrameCallback, FrameValues,
    Projection, ProjectionId, ProjectorFn, SchedulerHandle, TickReport, ValueId,
};
pub use sequence::{SequenceRun, SequenceSpec};
pub use spring::{Spring, SpringConfig};
pub use timeline::{Repeat, TimelineRun, TimelineSpec};
pub use values::{Interpolate, Ramp, RampStop};
