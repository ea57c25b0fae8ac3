// src/util/stopwatch.rs
use std::time::Instant;

/// Wall-clock instrumentation for the end-to-end run. Purely observational;
/// never affects control flow.
#[derive(Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Human-readable completion line with two-decimal seconds.
    pub fn summary(&self, what: &str) -> String {
        format!("{} finished in {:.2}s", what, self.elapsed_secs())
    }
}
