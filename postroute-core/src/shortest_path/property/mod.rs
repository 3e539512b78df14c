//! Property-based tests for the shortest-path engines.
//!
//! Cross-checks the single-source engines against the all-pairs engines on
//! generated digraphs, verifies that no arc can be relaxed further once an
//! engine finishes, and checks that construction is deterministic.

mod agreement;
mod strategies;
mod types;
