//! Time management utilities

use std::time::{Duration, Instant};

/// Frame delta counter
///
/// Measures the wall-clock time between the last reset and the latest
/// `analyse()` call, scaled by the real-time speed multiplier. The delta is
/// kept in `f64` seconds, which is what the movement integrator consumes.
#[derive(Debug, Clone)]
pub struct TimeStep {
    last: Instant,
    current: Instant,
    delta: f64,
    rt_speed: f64,
    frame_count: u64,
}

impl Default for TimeStep {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TimeStep {
    /// Create a new counter with the given real-time speed multiplier
    pub fn new(rt_speed: f64) -> Self {
        let now = Instant::now();
        Self {
            last: now,
            current: now,
            delta: 0.0,
            rt_speed,
            frame_count: 0,
        }
    }

    /// Sample the clock and recompute the delta since the last reset
    pub fn analyse(&mut self) -> f64 {
        self.current = Instant::now();
        let elapsed = self.current.duration_since(self.last);
        self.delta = elapsed.as_secs_f64() * self.rt_speed;
        self.delta
    }

    /// Re-base the counter on the last sampled time
    pub fn reset(&mut self) {
        self.last = self.current;
        self.frame_count += 1;
    }

    /// Delta computed by the last `analyse()` call, in scaled seconds
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Real-time speed multiplier
    pub fn rt_speed(&self) -> f64 {
        self.rt_speed
    }

    /// Change the real-time speed multiplier
    pub fn set_rt_speed(&mut self, rt_speed: f64) {
        self.rt_speed = rt_speed;
    }

    /// Number of resets so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Simple stopwatch for measuring elapsed time
#[derive(Debug, Default)]
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::default();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.elapsed += start.elapsed();
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        let running = self.start_time.map_or(Duration::ZERO, |start| start.elapsed());
        self.elapsed + running
    }

    /// Get the elapsed time in microseconds
    pub fn elapsed_micros(&self) -> u128 {
        self.elapsed().as_micros()
    }
}
