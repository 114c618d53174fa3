//! Animation scheduler
//!
//! A single-threaded cooperative registry of active animations, ticked
//! by the host's event/animation loop. Animations register implicitly
//! when created through wrapper types:
//! - `AnimatedCount` - count-up integer interpolators
//! - `AnimatedTween` - eased scalar transitions
//!
//! Wrappers deregister their animation on drop, and retargeting a
//! counter removes the previous run before starting the new one, so no
//! orphaned animation can ever write to discarded state.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

use crate::counter::CountUp;
use crate::tween::Tween;

new_key_type! {
    /// Handle to a registered count-up interpolator
    pub struct CounterId;
    /// Handle to a registered tween
    pub struct TweenId;
}

struct SchedulerInner {
    counters: SlotMap<CounterId, CountUp>,
    tweens: SlotMap<TweenId, Tween>,
}

/// The animation scheduler that ticks all active animations
///
/// Held by the host; components receive a `SchedulerHandle` and never
/// own the registry themselves. There is no background thread: the
/// host loop calls `tick(dt_ms)` and all progress happens inside it.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                counters: SlotMap::with_key(),
                tweens: SlotMap::with_key(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick all animations
    ///
    /// Returns true if any animation is still active (needs another tick).
    /// Finished animations are not removed here; they live until their
    /// wrapper drops, so a finished counter keeps reporting its final
    /// value.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();

        for (_, counter) in inner.counters.iter_mut() {
            counter.tick(dt_ms);
        }
        for (_, tween) in inner.tweens.iter_mut() {
            tween.tick(dt_ms);
        }

        inner.counters.iter().any(|(_, c)| !c.is_finished())
            || inner.tweens.iter().any(|(_, t)| t.is_playing())
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.counters.iter().any(|(_, c)| !c.is_finished())
            || inner.tweens.iter().any(|(_, t)| t.is_playing())
    }

    pub fn counter_count(&self) -> usize {
        self.inner.lock().unwrap().counters.len()
    }

    pub fn tween_count(&self) -> usize {
        self.inner.lock().unwrap().tweens.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that register animations. It won't keep the
/// scheduler alive; every operation no-ops safely once the scheduler
/// has been dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Counter operations
    // =========================================================================

    /// Register a counter and return its ID
    pub fn register_counter(&self, counter: CountUp) -> Option<CounterId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().counters.insert(counter))
    }

    /// Get a counter's current display value
    pub fn counter_value(&self, id: CounterId) -> Option<u64> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().counters.get(id).map(|c| c.value()))
    }

    /// Check if a counter has reached its target
    ///
    /// A missing counter is considered finished (nothing is animating).
    pub fn is_counter_finished(&self, id: CounterId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .counters
                    .get(id)
                    .map(|c| c.is_finished())
            })
            .unwrap_or(true)
    }

    /// Remove a counter
    pub fn remove_counter(&self, id: CounterId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().counters.remove(id);
        }
    }

    // =========================================================================
    // Tween operations
    // =========================================================================

    /// Register a tween and return its ID
    pub fn register_tween(&self, tween: Tween) -> Option<TweenId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().tweens.insert(tween))
    }

    /// Get a tween's current eased value
    pub fn tween_value(&self, id: TweenId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().tweens.get(id).map(|t| t.value()))
    }

    /// Get a tween's raw progress (0.0 to 1.0)
    pub fn tween_progress(&self, id: TweenId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().tweens.get(id).map(|t| t.progress()))
    }

    /// Check if a tween is still playing
    pub fn is_tween_playing(&self, id: TweenId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .tweens
                    .get(id)
                    .map(|t| t.is_playing())
            })
            .unwrap_or(false)
    }

    /// Start (or restart) a tween from the beginning
    pub fn start_tween(&self, id: TweenId) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(tween) = inner.lock().unwrap().tweens.get_mut(id) {
                tween.start();
            }
        }
    }

    /// Remove a tween
    pub fn remove_tween(&self, id: TweenId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().tweens.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Count
// ============================================================================

/// A count-up display value that automatically registers with the
/// scheduler
///
/// The displayed integer climbs from 0 to the target; changing the
/// target cancels the in-flight run and starts a fresh one from zero,
/// so two runs can never interleave. Dropping the wrapper deregisters
/// the counter.
pub struct AnimatedCount {
    handle: SchedulerHandle,
    counter_id: Option<CounterId>,
    target: u64,
}

impl AnimatedCount {
    /// Create a counter animating toward `target`
    ///
    /// A zero target registers nothing; the value is 0 immediately.
    pub fn new(handle: SchedulerHandle, target: u64) -> Self {
        let counter_id = if target > 0 {
            handle.register_counter(CountUp::new(target))
        } else {
            None
        };
        Self {
            handle,
            counter_id,
            target,
        }
    }

    /// Change the target, restarting the animation from zero
    ///
    /// The previous run is removed from the scheduler before the new
    /// one registers; an unchanged target is a no-op.
    pub fn set_target(&mut self, target: u64) {
        if target == self.target {
            return;
        }
        if let Some(id) = self.counter_id.take() {
            self.handle.remove_counter(id);
        }
        self.target = target;
        if target > 0 {
            self.counter_id = self.handle.register_counter(CountUp::new(target));
        }
    }

    /// Get the current display value
    pub fn get(&self) -> u64 {
        match self.counter_id {
            // If the scheduler is gone, settle on the target
            Some(id) => self.handle.counter_value(id).unwrap_or(self.target),
            None => 0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Check if the counter has settled on its target
    pub fn is_finished(&self) -> bool {
        match self.counter_id {
            Some(id) => self.handle.is_counter_finished(id),
            None => true,
        }
    }
}

impl Drop for AnimatedCount {
    fn drop(&mut self) {
        if let Some(id) = self.counter_id {
            self.handle.remove_counter(id);
        }
    }
}

// ============================================================================
// Animated Tween
// ============================================================================

/// A tween that automatically registers with the scheduler
///
/// Registered and started on construction; deregistered on drop.
pub struct AnimatedTween {
    handle: SchedulerHandle,
    tween_id: Option<TweenId>,
    resting: f32,
}

impl AnimatedTween {
    /// Register `tween` and start it immediately
    pub fn new(handle: SchedulerHandle, mut tween: Tween) -> Self {
        tween.start();
        let resting = tween.value();
        let tween_id = handle.register_tween(tween);
        Self {
            handle,
            tween_id,
            resting,
        }
    }

    /// Get the current eased value
    pub fn get(&self) -> f32 {
        match self.tween_id {
            Some(id) => self.handle.tween_value(id).unwrap_or(self.resting),
            None => self.resting,
        }
    }

    /// Get raw progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        match self.tween_id {
            Some(id) => self.handle.tween_progress(id).unwrap_or(1.0),
            None => 1.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        match self.tween_id {
            Some(id) => self.handle.is_tween_playing(id),
            None => false,
        }
    }

    /// Restart from the beginning
    pub fn restart(&self) {
        if let Some(id) = self.tween_id {
            self.handle.start_tween(id);
        }
    }
}

impl Drop for AnimatedTween {
    fn drop(&mut self) {
        if let Some(id) = self.tween_id {
            self.handle.remove_tween(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::COUNT_TICK_MS;
    use crate::easing::Easing;

    #[test]
    fn test_scheduler_tick() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let count = AnimatedCount::new(handle, 100);
        assert_eq!(count.get(), 0);

        assert!(scheduler.tick(COUNT_TICK_MS));
        assert!(count.get() > 0);
    }

    #[test]
    fn test_animated_count_settles_exactly() {
        let scheduler = AnimationScheduler::new();
        let count = AnimatedCount::new(scheduler.handle(), 256);

        let mut prev = 0;
        for _ in 0..60 {
            scheduler.tick(COUNT_TICK_MS);
            let v = count.get();
            assert!(v >= prev);
            assert!(v <= 256);
            prev = v;
        }
        assert!(count.is_finished());
        assert_eq!(count.get(), 256);
    }

    #[test]
    fn test_retarget_cancels_previous_run() {
        let scheduler = AnimationScheduler::new();
        let mut count = AnimatedCount::new(scheduler.handle(), 50);

        // Run partway toward 50
        for _ in 0..10 {
            scheduler.tick(COUNT_TICK_MS);
        }
        assert!(count.get() > 0);

        // Retarget mid-flight; the old counter must be gone
        count.set_target(80);
        assert_eq!(scheduler.counter_count(), 1);
        assert_eq!(count.get(), 0);

        for _ in 0..60 {
            scheduler.tick(COUNT_TICK_MS);
        }
        assert_eq!(count.get(), 80);
    }

    #[test]
    fn test_set_same_target_is_noop() {
        let scheduler = AnimationScheduler::new();
        let mut count = AnimatedCount::new(scheduler.handle(), 50);

        for _ in 0..10 {
            scheduler.tick(COUNT_TICK_MS);
        }
        let mid = count.get();
        count.set_target(50);
        assert_eq!(count.get(), mid);
    }

    #[test]
    fn test_zero_target_registers_nothing() {
        let scheduler = AnimationScheduler::new();
        let count = AnimatedCount::new(scheduler.handle(), 0);

        assert_eq!(scheduler.counter_count(), 0);
        assert_eq!(count.get(), 0);
        assert!(count.is_finished());
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_drop_deregisters() {
        let scheduler = AnimationScheduler::new();
        {
            let _count = AnimatedCount::new(scheduler.handle(), 100);
            let _tween = AnimatedTween::new(
                scheduler.handle(),
                Tween::new(0.0, 1.0, 500.0).easing(Easing::EaseOut),
            );
            assert_eq!(scheduler.counter_count(), 1);
            assert_eq!(scheduler.tween_count(), 1);
        }
        assert_eq!(scheduler.counter_count(), 0);
        assert_eq!(scheduler.tween_count(), 0);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle.register_counter(CountUp::new(10)).is_none());

        // Wrappers built against a dead scheduler still answer sanely
        let count = AnimatedCount::new(handle, 10);
        assert_eq!(count.get(), 10);
    }

    #[test]
    fn test_animated_tween_completes() {
        let scheduler = AnimationScheduler::new();
        let tween = AnimatedTween::new(
            scheduler.handle(),
            Tween::new(0.0, 100.0, 1500.0).easing(Easing::EaseOut),
        );

        assert!(tween.is_playing());
        scheduler.tick(1500.0);
        assert!(!tween.is_playing());
        assert!((tween.get() - 100.0).abs() < 1e-4);
    }
}
