//! Time management utilities

use std::time::{Duration, Instant};

/// Frame timer with an upper bound on the reported delta
///
/// Long stalls (window hidden, debugger break) would otherwise feed one huge
/// step into the physics and tunnel the player through the floor.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    delta_time: f32,
    max_delta: f32,
    fixed_delta: Option<f32>,
    frame_count: u64,
}

impl FrameClock {
    /// Create a new clock clamping deltas to `max_delta` seconds
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            max_delta,
            fixed_delta: None,
            frame_count: 0,
        }
    }

    /// Report a constant delta instead of measuring wall-clock time
    pub fn with_fixed_delta(mut self, fixed: Option<f32>) -> Self {
        self.fixed_delta = fixed;
        self
    }

    /// Advance one frame using the current wall-clock time
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance one frame as if the current time were `now`
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let measured = now.saturating_duration_since(self.last_frame).as_secs_f32();
        let raw = self.fixed_delta.unwrap_or(measured);
        self.delta_time = raw.clamp(0.0, self.max_delta);
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the clamped time of the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Rate limiter keyed on wall-clock timestamps
///
/// Triggering is allowed once strictly more than `interval` has passed
/// since the last accepted trigger.
#[derive(Debug, Clone)]
pub struct Cooldown {
    interval: Duration,
    last_trigger: Option<Instant>,
}

impl Cooldown {
    /// Create a cooldown that has never been triggered
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_trigger: None,
        }
    }

    /// Check whether a trigger at `now` would be accepted
    pub fn is_ready(&self, now: Instant) -> bool {
        self.last_trigger
            .map_or(true, |last| now.saturating_duration_since(last) > self.interval)
    }

    /// Try to trigger at `now`; records the timestamp on success
    pub fn try_trigger(&mut self, now: Instant) -> bool {
        if self.is_ready(now) {
            self.last_trigger = Some(now);
            true
        } else {
            false
        }
    }

    /// Minimum spacing between accepted triggers
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::new(0.1);
        clock.last_frame = start;
        let dt = clock.tick_at(start + Duration::from_secs(3));
        assert_eq!(dt, 0.1);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_fixed_delta_ignores_wall_clock() {
        let start = Instant::now();
        let mut clock = FrameClock::new(0.1).with_fixed_delta(Some(0.016));
        clock.last_frame = start;
        assert_eq!(clock.tick_at(start + Duration::from_secs(1)), 0.016);
    }

    #[test]
    fn test_cooldown_spacing() {
        let start = Instant::now();
        let mut cooldown = Cooldown::new(Duration::from_millis(500));
        assert!(cooldown.try_trigger(start));
        assert!(!cooldown.try_trigger(start + Duration::from_millis(200)));
        assert!(!cooldown.try_trigger(start + Duration::from_millis(500)));
        assert!(cooldown.try_trigger(start + Duration::from_millis(501)));
    }
}
