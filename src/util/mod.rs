// src/util/mod.rs
pub mod stopwatch;
pub mod testing;

pub use stopwatch::Stopwatch;
