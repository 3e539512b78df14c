//! Benchmark support crate for postroute.
//!
//! Provides seeded synthetic rural postman instances and parameter types for
//! the Criterion benchmarks: end-to-end solving, all-pairs shortest-path
//! trees, and perfect-matching heuristics.

pub mod error;
pub mod instance;
pub mod params;
