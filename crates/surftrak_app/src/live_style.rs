//! Frame subscriptions for projected styles
//!
//! A [`LiveStyle`] owns a [`Projection`] and a per-frame callback that
//! copies each frame's style into a slot the render pass reads. Dropping it
//! drops the projection, which unsubscribes the callback.

use std::sync::{Arc, Mutex, PoisonError};

use smallvec::SmallVec;
use surftrak_animation::{FrameValues, Projection, SchedulerHandle, StyleProps, ValueId};

pub struct LiveStyle {
    _projection: Projection,
    latest: Arc<Mutex<StyleProps>>,
}

impl LiveStyle {
    pub fn new<F>(handle: SchedulerHandle, inputs: &[ValueId], projector: F) -> Self
    where
        F: Fn(&FrameValues<'_>) -> StyleProps + Send + 'static,
    {
        let projection = Projection::new(handle, inputs, projector);
        let latest = Arc::new(Mutex::new(projection.style()));

        let slot = Arc::clone(&latest);
        if !projection.on_frame(move |style| {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = style.clone();
        }) {
            tracing::warn!("scheduler gone; style will not update");
        }

        Self {
            _projection: projection,
            latest,
        }
    }

    /// Style delivered by the most recent frame
    pub fn get(&self) -> StyleProps {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Scheduler keys of the values a projector reads
///
/// Values created after the scheduler was dropped have no key and are
/// skipped.
pub fn value_ids(ids: impl IntoIterator<Item = Option<ValueId>>) -> SmallVec<[ValueId; 4]> {
    ids.into_iter().flatten().collect()
}

/// Read a scalar input that may never have been registered
pub fn scalar(values: &FrameValues<'_>, id: Option<ValueId>, fallback: f32) -> f32 {
    id.map_or(fallback, |id| values.scalar(id, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use surftrak_animation::{Animated, AnimationScheduler, TimelineSpec};

    #[test]
    fn test_style_follows_frames() {
        let scheduler = AnimationScheduler::new();
        let opacity = Animated::new(scheduler.handle(), 0.0_f32);
        let id = opacity.id().unwrap();
        let live = LiveStyle::new(scheduler.handle(), &[id], move |v| {
            StyleProps::new().opacity(v.scalar(id, 0.0))
        });
        assert_eq!(live.get().opacity, Some(0.0));

        opacity.start_timeline(TimelineSpec::new(1.0, 100.0));
        scheduler.advance(50.0);
        assert!((live.get().opacity.unwrap() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let scheduler = AnimationScheduler::new();
        let value = Animated::new(scheduler.handle(), 0.0_f32);
        let id = value.id().unwrap();
        let live = LiveStyle::new(scheduler.handle(), &[id], |_| StyleProps::new());
        assert_eq!(scheduler.projection_count(), 1);
        drop(live);
        assert_eq!(scheduler.projection_count(), 0);
    }

    #[test]
    fn test_value_ids_skip_dead_values() {
        let scheduler = AnimationScheduler::new();
        let live = Animated::new(scheduler.handle(), 0.0_f32);
        let orphan = AnimationScheduler::new().handle();
        let dead = Animated::new(orphan, 1.0_f32);
        assert_eq!(value_ids([live.id(), dead.id()]).len(), 1);
    }
}
