//! Campaign evaluation.
//!
//! Scores a troop composition against one attack order by the number of
//! territories it conquers before running out of strength.

pub mod battle;

pub use battle::{evaluate, EvaluationResult};
