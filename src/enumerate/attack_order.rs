//! Attack-order enumeration.
//!
//! Produces every permutation of the board's territory ids. Permutations
//! are emitted in lexicographic order of *positions* in the base sequence,
//! so the base sequence decides which ordering comes first.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::{Board, TerritoryId};

/// How the base sequence is arranged before permuting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBias {
    /// Board insertion order.
    #[default]
    AsListed,
    /// Stable-sorted by ascending defense. Still yields all n! orderings;
    /// only the enumeration order changes.
    WeakFirst,
}

/// A sequence of territory ids to attack, each exactly once.
///
/// Backed by a shared slice: every evaluation result holds one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttackOrder(Arc<[TerritoryId]>);

impl AttackOrder {
    pub fn new(ids: Vec<TerritoryId>) -> Self {
        AttackOrder(ids.into())
    }

    pub fn ids(&self) -> &[TerritoryId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TerritoryId>> for AttackOrder {
    fn from(ids: Vec<TerritoryId>) -> Self {
        AttackOrder::new(ids)
    }
}

/// Returns the sequence that gets permuted for the given bias.
pub fn base_sequence(board: &Board, bias: OrderBias) -> Vec<TerritoryId> {
    match bias {
        OrderBias::AsListed => board.ids(),
        OrderBias::WeakFirst => {
            let mut sorted: Vec<_> = board.territories().iter().collect();
            // sort_by_key is stable: equal defenses keep insertion order.
            sorted.sort_by_key(|t| t.defense);
            sorted.into_iter().map(|t| t.id).collect()
        }
    }
}

/// Iterator over all permutations of a base sequence.
///
/// An empty base yields a single empty ordering.
pub struct Permutations {
    base: Vec<TerritoryId>,
    indices: Vec<usize>,
    done: bool,
}

impl Permutations {
    pub fn new(base: Vec<TerritoryId>) -> Self {
        let indices = (0..base.len()).collect();
        Permutations {
            base,
            indices,
            done: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = AttackOrder;

    fn next(&mut self) -> Option<AttackOrder> {
        if self.done {
            return None;
        }
        let order = self.indices.iter().map(|&i| self.base[i]).collect();
        if !advance_permutation(&mut self.indices) {
            self.done = true;
        }
        Some(AttackOrder::new(order))
    }
}

/// Steps an index vector to its lexicographic successor.
/// Returns false when `indices` was already the last permutation.
fn advance_permutation(indices: &mut [usize]) -> bool {
    let n = indices.len();
    if n < 2 {
        return false;
    }
    let Some(pivot) = (0..n - 1).rev().find(|&i| indices[i] < indices[i + 1]) else {
        return false;
    };
    let swap_with = (pivot + 1..n)
        .rev()
        .find(|&j| indices[j] > indices[pivot])
        .unwrap_or(pivot + 1);
    indices.swap(pivot, swap_with);
    indices[pivot + 1..].reverse();
    true
}

/// All permutations of `ids`, in position-lexicographic order.
pub fn permutations(ids: &[TerritoryId]) -> Vec<AttackOrder> {
    Permutations::new(ids.to_vec()).collect()
}

/// All attack orders for a board.
pub fn attack_orders(board: &Board, bias: OrderBias) -> Vec<AttackOrder> {
    Permutations::new(base_sequence(board, bias)).collect()
}

/// `n!`, or `None` if it overflows `u64`.
pub fn permutation_count(n: usize) -> Option<u64> {
    (2..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
