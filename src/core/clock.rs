//! Monotonic time source for action gating.
//!
//! The simulation itself is frame-stepped and never reads time. Only the
//! mallet cooldown compares timestamps, read once per action attempt.

use std::cell::Cell;
use std::rc::Rc;

/// Seconds since an arbitrary fixed origin. Must never go backwards.
pub trait Clock {
    fn now_secs(&self) -> f64;
}

#[derive(Clone, Copy)]
pub struct MonotonicClock {
    #[cfg(target_arch = "wasm32")]
    origin_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            MonotonicClock { origin_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            MonotonicClock { origin: std::time::Instant::now() }
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_secs(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            // Date::now can step backwards on wall-clock adjustments.
            ((js_sys::Date::now() - self.origin_ms) / 1000.0).max(0.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64()
        }
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep one
/// handle and give another to the world.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_secs: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_secs)) }
    }

    pub fn set(&self, secs: f64) {
        self.now.set(secs);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs.max(0.0));
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_reading() {
        let clock = ManualClock::new(1.0);
        let handle = clock.clone();
        handle.advance(0.25);
        assert_eq!(clock.now_secs(), 1.25);

        // Negative advances are ignored.
        handle.advance(-5.0);
        assert_eq!(clock.now_secs(), 1.25);
    }

    #[test]
    fn monotonic_clock_never_decreases() {
        let clock = MonotonicClock::new();
        let a = clock.now_secs();
        let b = clock.now_secs();
        assert!(b >= a);
    }
}
