//! Candidate generation.
//!
//! Enumerates the two axes of the search space: troop compositions under
//! the point budget, and attack orders over the board's territories.

pub mod attack_order;
pub mod composition;

pub use attack_order::{
    attack_orders, base_sequence, permutation_count, permutations, AttackOrder, OrderBias,
    Permutations,
};
pub use composition::{compositions, Compositions};
