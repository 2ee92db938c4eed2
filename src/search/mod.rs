//! Search and selection.
//!
//! Explores the full composition × attack-order space and picks the
//! campaign that conquers the most territories.

pub mod exhaustive;

pub use exhaustive::{
    best_result, search, search_parallel, SearchError, SearchLimits, SearchOutcome,
    PRACTICAL_TERRITORY_LIMIT,
};
