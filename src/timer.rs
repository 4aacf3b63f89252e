//! Stopwatch with running min/mean/max over repeated measurements.

use crate::error::TimerError;
use std::fmt;
use std::time::Instant;

/// Aggregate of every `start()`/`stop()` pair since the last reset, in
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min: {}, mean: {}, max: {}", self.min, self.mean, self.max)
    }
}

/// Start / split / stop timer.
///
/// ```
/// use cache_matmul::timer::Timer;
///
/// let mut timer = Timer::new();
/// timer.start().unwrap();
/// let lap = timer.split().unwrap();
/// let total = timer.stop().unwrap();
/// assert!(total >= lap);
/// assert_eq!(timer.samples(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Timer {
    started: Option<Instant>,
    min: f64,
    max: f64,
    sum: f64,
    count: u32,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            started: None,
            min: f64::MAX,
            max: 0.0,
            sum: 0.0,
            count: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Number of completed measurements since the last reset.
    pub fn samples(&self) -> u32 {
        self.count
    }

    /// Starts a measurement.
    ///
    /// Calling this on a running timer returns
    /// [`TimerError::AlreadyRunning`] and keeps the existing start instant,
    /// unlike a restart-and-throw stopwatch that would move it.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.started.is_some() {
            return Err(TimerError::AlreadyRunning);
        }
        self.started = Some(Instant::now());
        Ok(())
    }

    /// Milliseconds since `start()`, without stopping.
    pub fn split(&self) -> Result<f64, TimerError> {
        let t0 = self.started.ok_or(TimerError::NotRunning)?;
        Ok(t0.elapsed().as_secs_f64() * 1000.0)
    }

    /// Stops the timer, folds the measurement into the aggregates and
    /// returns it in milliseconds.
    pub fn stop(&mut self) -> Result<f64, TimerError> {
        let t0 = self.started.take().ok_or(TimerError::NotRunning)?;
        let dt_ms = t0.elapsed().as_secs_f64() * 1000.0;

        self.min = self.min.min(dt_ms);
        self.max = self.max.max(dt_ms);
        self.sum += dt_ms;
        self.count += 1;
        Ok(dt_ms)
    }

    pub fn stats(&self) -> Result<Stats, TimerError> {
        if self.count == 0 {
            return Err(TimerError::NoSamples);
        }
        Ok(Stats {
            min: self.min,
            mean: self.sum / f64::from(self.count),
            max: self.max,
        })
    }

    /// `min: <x>, mean: <y>, max: <z>`
    pub fn stats_string(&self) -> Result<String, TimerError> {
        self.stats().map(|s| s.to_string())
    }

    /// Clears the aggregates. Does not touch a running measurement.
    pub fn reset(&mut self) {
        self.min = f64::MAX;
        self.max = 0.0;
        self.sum = 0.0;
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misuse_is_reported() {
        let mut timer = Timer::new();
        assert_eq!(timer.split(), Err(TimerError::NotRunning));
        assert_eq!(timer.stop(), Err(TimerError::NotRunning));
        assert_eq!(timer.stats(), Err(TimerError::NoSamples));
        assert_eq!(timer.stats_string(), Err(TimerError::NoSamples));

        timer.start().unwrap();
        assert_eq!(timer.start(), Err(TimerError::AlreadyRunning));
        assert!(timer.is_running());
        timer.stop().unwrap();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_failed_restart_keeps_start_instant() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(timer.start(), Err(TimerError::AlreadyRunning));
        assert!(timer.split().unwrap() >= 5.0);
        assert!(timer.stop().unwrap() >= 5.0);
    }

    #[test]
    fn test_stats_aggregate() {
        let mut timer = Timer::new();
        let mut laps = Vec::new();
        for _ in 0..3 {
            timer.start().unwrap();
            std::thread::sleep(std::time::Duration::from_millis(1));
            laps.push(timer.stop().unwrap());
        }

        let stats = timer.stats().unwrap();
        let min = laps.iter().cloned().fold(f64::MAX, f64::min);
        let max = laps.iter().cloned().fold(0.0, f64::max);
        assert_eq!(stats.min, min);
        assert_eq!(stats.max, max);
        assert!((stats.mean - laps.iter().sum::<f64>() / 3.0).abs() < 1e-9);
        assert!(stats.min >= 1.0);
        assert!(timer.stats_string().unwrap().starts_with("min: "));
    }

    #[test]
    fn test_reset_keeps_running_measurement() {
        let mut timer = Timer::new();
        timer.start().unwrap();
        timer.stop().unwrap();
        timer.start().unwrap();
        timer.reset();

        assert_eq!(timer.samples(), 0);
        assert!(timer.is_running());
        timer.stop().unwrap();
        assert_eq!(timer.samples(), 1);
    }
}
