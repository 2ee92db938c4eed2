//! Sequential battle resolution.
//!
//! The army starts with the composition's total strength and attacks the
//! territories of an order one at a time. Each conquest costs exactly the
//! territory's defense; the first territory it cannot afford ends the
//! campaign.

use serde::{Deserialize, Serialize};

use crate::board::{Board, TroopComposition, TroopTable};
use crate::enumerate::AttackOrder;

/// Outcome of one (composition, order) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub composition: TroopComposition,
    pub order: AttackOrder,
    /// True if every territory in the order was conquered.
    pub success: bool,
    /// Territories conquered before the first failure.
    pub conquered: usize,
}

/// Evaluates a composition against an attack order.
///
/// A territory id that is not on the board cannot be attacked and ends the
/// campaign like an unaffordable defense.
pub fn evaluate(
    composition: TroopComposition,
    order: &AttackOrder,
    board: &Board,
    strengths: &TroopTable,
) -> EvaluationResult {
    let mut remaining = composition.total_strength(strengths);
    let mut conquered = 0;
    let mut success = true;

    for &id in order.ids() {
        match board.get(id) {
            Some(t) if remaining >= u64::from(t.defense) => {
                remaining -= u64::from(t.defense);
                conquered += 1;
            }
            _ => {
                success = false;
                break;
            }
        }
    }

    EvaluationResult {
        composition,
        order: order.clone(),
        success,
        conquered,
    }
}
