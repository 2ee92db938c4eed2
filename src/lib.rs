//! Blitzplan library.
//!
//! Finds the troop composition and attack order that conquer the most enemy
//! territories under a point budget, by exhaustive enumeration. Exposes the
//! board types, generators, evaluator, search and advice modules for the
//! binary, integration tests and benches.

pub mod advise;
pub mod board;
pub mod config;
pub mod enumerate;
pub mod eval;
pub mod planner;
pub mod prompt;
pub mod report;
pub mod scenario;
pub mod search;
