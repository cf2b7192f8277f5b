//! Frame scheduler
//!
//! Owns every animated value and projection registered by the mounted
//! components and advances them once per frame. Components never hold the
//! scheduler itself, only a [`SchedulerHandle`] (a weak reference) wrapped in
//! [`Animated`] and [`Projection`] values that unregister on drop:
//!
//! - `Animated<T>` - one animated scalar or color
//! - `Projection` - a derived style recomputed from a set of values
//!
//! A frame runs in two phases. All values advance first; only then are the
//! projections whose inputs moved recomputed and their frame callbacks run.

use crate::animated::{Advance, AnimatedValue};
use crate::projector::StyleProps;
use crate::sequence::SequenceSpec;
use crate::spring::SpringConfig;
use crate::timeline::TimelineSpec;
use crate::values::Interpolate;
use rustc_hash::FxHashSet;
use serde::Serialize;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use surftrak_core::Color;

new_key_type! {
    /// Handle to a registered animated value
    pub struct ValueId;
    /// Handle to a registered projection
    pub struct ProjectionId;
}

/// Storage for one registered value
pub enum AnimatedSlot {
    Scalar(AnimatedValue<f32>),
    Color(AnimatedValue<Color>),
}

impl AnimatedSlot {
    fn advance(&mut self, dt_ms: f32) -> Advance {
        match self {
            AnimatedSlot::Scalar(v) => v.advance(dt_ms),
            AnimatedSlot::Color(v) => v.advance(dt_ms),
        }
    }

    fn is_animating(&self) -> bool {
        match self {
            AnimatedSlot::Scalar(v) => v.is_animating(),
            AnimatedSlot::Color(v) => v.is_animating(),
        }
    }
}

/// Value types the scheduler can store
pub trait Animatable: Interpolate {
    fn into_slot(value: AnimatedValue<Self>) -> AnimatedSlot;
    fn from_slot(slot: &AnimatedSlot) -> Option<&AnimatedValue<Self>>;
    fn from_slot_mut(slot: &mut AnimatedSlot) -> Option<&mut AnimatedValue<Self>>;
}

impl Animatable for f32 {
    fn into_slot(value: AnimatedValue<Self>) -> AnimatedSlot {
        AnimatedSlot::Scalar(value)
    }

    fn from_slot(slot: &AnimatedSlot) -> Option<&AnimatedValue<Self>> {
        match slot {
            AnimatedSlot::Scalar(v) => Some(v),
            _ => None,
        }
    }

    fn from_slot_mut(slot: &mut AnimatedSlot) -> Option<&mut AnimatedValue<Self>> {
        match slot {
            AnimatedSlot::Scalar(v) => Some(v),
            _ => None,
        }
    }
}

impl Animatable for Color {
    fn into_slot(value: AnimatedValue<Self>) -> AnimatedSlot {
        AnimatedSlot::Color(value)
    }

    fn from_slot(slot: &AnimatedSlot) -> Option<&AnimatedValue<Self>> {
        match slot {
            AnimatedSlot::Color(v) => Some(v),
            _ => None,
        }
    }

    fn from_slot_mut(slot: &mut AnimatedSlot) -> Option<&mut AnimatedValue<Self>> {
        match slot {
            AnimatedSlot::Color(v) => Some(v),
            _ => None,
        }
    }
}

/// Read-only view of this frame's values, handed to projectors
pub struct FrameValues<'a> {
    values: &'a SlotMap<ValueId, AnimatedSlot>,
}

impl FrameValues<'_> {
    pub fn get<T: Animatable>(&self, id: ValueId) -> Option<T> {
        self.values.get(id).and_then(T::from_slot).map(|v| v.get())
    }

    /// Scalar value, or `fallback` when the value is gone
    pub fn scalar(&self, id: ValueId, fallback: f32) -> f32 {
        self.get::<f32>(id).unwrap_or(fallback)
    }

    pub fn color(&self, id: ValueId) -> Option<Color> {
        self.get::<Color>(id)
    }
}

/// Boxed projector function
pub type ProjectorFn = Box<dyn Fn(&FrameValues<'_>) -> StyleProps + Send>;

/// Boxed per-frame style callback
pub type FrameCallback = Box<dyn FnMut(&StyleProps) + Send>;

struct ProjectionSlot {
    inputs: SmallVec<[ValueId; 4]>,
    projector: ProjectorFn,
    latest: StyleProps,
    callbacks: Vec<FrameCallback>,
}

/// Summary of one scheduler frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Frame counter after this frame
    pub frame: u64,
    /// Values that moved
    pub changed: usize,
    /// Runs that finished
    pub completed: usize,
    /// Projections recomputed
    pub projected: usize,
    /// Values still animating after this frame
    pub active: usize,
}

/// Internal state of the scheduler
struct SchedulerInner {
    values: SlotMap<ValueId, AnimatedSlot>,
    projections: SlotMap<ProjectionId, ProjectionSlot>,
    frame: u64,
    target_fps: u32,
}

fn lock(inner: &Mutex<SchedulerInner>) -> MutexGuard<'_, SchedulerInner> {
    // A panicking frame callback must not wedge every later frame
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The scheduler that advances all registered values
///
/// Held by the app shell; components receive a [`SchedulerHandle`].
///
/// ```rust
/// use surftrak_animation::{Animated, AnimationScheduler, TimelineSpec};
///
/// let scheduler = AnimationScheduler::new();
/// let opacity = Animated::new(scheduler.handle(), 0.0_f32);
/// opacity.start_timeline(TimelineSpec::new(1.0, 200.0));
///
/// scheduler.advance(100.0);
/// assert!((opacity.get() - 0.5).abs() < 1e-4);
/// ```
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                values: SlotMap::with_key(),
                projections: SlotMap::with_key(),
                frame: 0,
                target_fps: 60,
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn set_target_fps(&self, fps: u32) {
        lock(&self.inner).target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        lock(&self.inner).target_fps
    }

    /// Nominal frame length at the target rate
    pub fn frame_interval_ms(&self) -> f32 {
        1000.0 / self.target_fps() as f32
    }

    /// Advance every value by `dt_ms`, then refresh projections
    ///
    /// Frame callbacks run while the scheduler is locked and must not call
    /// back into it.
    pub fn advance(&self, dt_ms: f32) -> TickReport {
        let mut guard = lock(&self.inner);
        let inner = &mut *guard;
        inner.frame += 1;

        let mut report = TickReport {
            frame: inner.frame,
            ..TickReport::default()
        };

        let mut moved: FxHashSet<ValueId> = FxHashSet::default();
        for (id, slot) in inner.values.iter_mut() {
            let step = slot.advance(dt_ms);
            if step.changed {
                moved.insert(id);
            }
            if step.completed {
                report.completed += 1;
            }
            if slot.is_animating() {
                report.active += 1;
            }
        }
        report.changed = moved.len();

        let frame = FrameValues {
            values: &inner.values,
        };
        for (_, projection) in inner.projections.iter_mut() {
            if projection.inputs.iter().any(|id| moved.contains(id)) {
                projection.latest = (projection.projector)(&frame);
                report.projected += 1;
            }
            for callback in projection.callbacks.iter_mut() {
                callback(&projection.latest);
            }
        }

        if report.completed > 0 {
            tracing::debug!(
                frame = report.frame,
                completed = report.completed,
                active = report.active,
                "animation runs finished"
            );
        }
        report
    }

    /// Check if any value is still animating
    pub fn has_active_animations(&self) -> bool {
        lock(&self.inner)
            .values
            .iter()
            .any(|(_, slot)| slot.is_animating())
    }

    pub fn value_count(&self) -> usize {
        lock(&self.inner).values.len()
    }

    pub fn projection_count(&self) -> usize {
        lock(&self.inner).projections.len()
    }

    pub fn frame(&self) -> u64 {
        lock(&self.inner).frame
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// It won't keep the scheduler alive; once the scheduler is dropped every
/// operation is a no-op returning `None`/`false`.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Values
    // =========================================================================

    /// Register a value and return its ID
    pub fn register<T: Animatable>(&self, value: AnimatedValue<T>) -> Option<ValueId> {
        let inner = self.inner.upgrade()?;
        let id = lock(&inner).values.insert(T::into_slot(value));
        Some(id)
    }

    /// Run `f` against a registered value
    pub fn with_value<T, F, R>(&self, id: ValueId, f: F) -> Option<R>
    where
        T: Animatable,
        F: FnOnce(&mut AnimatedValue<T>) -> R,
    {
        self.inner.upgrade().and_then(|inner| {
            let mut guard = lock(&inner);
            guard.values.get_mut(id).and_then(T::from_slot_mut).map(f)
        })
    }

    pub fn get<T: Animatable>(&self, id: ValueId) -> Option<T> {
        self.inner.upgrade().and_then(|inner| {
            let guard = lock(&inner);
            guard.values.get(id).and_then(T::from_slot).map(|v| v.get())
        })
    }

    pub fn remove(&self, id: ValueId) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).values.remove(id);
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Register a projection over `inputs`
    ///
    /// The projector runs once immediately so the style is valid before the
    /// first frame.
    pub fn add_projection<F>(&self, inputs: &[ValueId], projector: F) -> Option<ProjectionId>
    where
        F: Fn(&FrameValues<'_>) -> StyleProps + Send + 'static,
    {
        self.inner.upgrade().map(|inner| {
            let mut guard = lock(&inner);
            let latest = projector(&FrameValues {
                values: &guard.values,
            });
            guard.projections.insert(ProjectionSlot {
                inputs: inputs.iter().copied().collect(),
                projector: Box::new(projector),
                latest,
                callbacks: Vec::new(),
            })
        })
    }

    /// Latest style produced by a projection
    pub fn projection_style(&self, id: ProjectionId) -> Option<StyleProps> {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).projections.get(id).map(|p| p.latest.clone()))
    }

    /// Subscribe to a projection; `callback` runs once per frame
    pub fn add_callback<F>(&self, id: ProjectionId, callback: F) -> bool
    where
        F: FnMut(&StyleProps) + Send + 'static,
    {
        self.inner
            .upgrade()
            .and_then(|inner| {
                lock(&inner)
                    .projections
                    .get_mut(id)
                    .map(|p| p.callbacks.push(Box::new(callback)))
            })
            .is_some()
    }

    pub fn remove_projection(&self, id: ProjectionId) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).projections.remove(id);
        }
    }
}

// ============================================================================
// Animated
// ============================================================================

/// An animated value registered with the scheduler
///
/// Unregisters itself when dropped, which stops whatever run it had.
pub struct Animated<T: Animatable> {
    handle: SchedulerHandle,
    id: Option<ValueId>,
    /// Returned once the scheduler is gone
    fallback: T,
}

impl<T: Animatable> Animated<T> {
    pub fn new(handle: SchedulerHandle, initial: T) -> Self {
        let id = handle.register(AnimatedValue::new(initial));
        Self {
            handle,
            id,
            fallback: initial,
        }
    }

    /// Scheduler key, for wiring projections
    pub fn id(&self) -> Option<ValueId> {
        self.id
    }

    fn with<R>(&self, f: impl FnOnce(&mut AnimatedValue<T>) -> R) -> Option<R> {
        self.id.and_then(|id| self.handle.with_value(id, f))
    }

    pub fn get(&self) -> T {
        self.with(|v| v.get()).unwrap_or(self.fallback)
    }

    pub fn target(&self) -> T {
        self.with(|v| v.target()).unwrap_or(self.fallback)
    }

    pub fn is_animating(&self) -> bool {
        self.with(|v| v.is_animating()).unwrap_or(false)
    }

    pub fn start_timeline(&self, spec: TimelineSpec<T>) {
        self.with(|v| v.start_timeline(spec));
    }

    pub fn start_sequence(&self, spec: SequenceSpec<T>) {
        self.with(|v| v.start_sequence(spec));
    }

    pub fn set_immediate(&self, value: T) {
        self.with(|v| v.set_immediate(value));
    }

    pub fn cancel(&self) {
        self.with(|v| v.cancel());
    }

    /// Returns `true` once after each finished run
    pub fn take_completed(&self) -> bool {
        self.with(|v| v.take_completed()).unwrap_or(false)
    }
}

impl Animated<f32> {
    pub fn start_spring(&self, target: f32, config: SpringConfig) {
        self.with(|v| v.start_spring(target, config));
    }
}

impl<T: Animatable> Drop for Animated<T> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.remove(id);
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

/// A registered projection; unregisters itself and its callbacks on drop
pub struct Projection {
    handle: SchedulerHandle,
    id: Option<ProjectionId>,
}

impl Projection {
    pub fn new<F>(handle: SchedulerHandle, inputs: &[ValueId], projector: F) -> Self
    where
        F: Fn(&FrameValues<'_>) -> StyleProps + Send + 'static,
    {
        let id = handle.add_projection(inputs, projector);
        Self { handle, id }
    }

    pub fn id(&self) -> Option<ProjectionId> {
        self.id
    }

    /// Latest projected style (empty once the scheduler is gone)
    pub fn style(&self) -> StyleProps {
        self.id
            .and_then(|id| self.handle.projection_style(id))
            .unwrap_or_default()
    }

    /// Run `callback` with the latest style on every frame
    pub fn on_frame<F>(&self, callback: F) -> bool
    where
        F: FnMut(&StyleProps) + Send + 'static,
    {
        self.id
            .map(|id| self.handle.add_callback(id, callback))
            .unwrap_or(false)
    }
}

impl Drop for Projection {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.remove_projection(id);
        }
    }
}
