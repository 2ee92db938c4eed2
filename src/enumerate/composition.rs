//! Troop composition enumeration.
//!
//! Steps through every (infantry, cavalry, artillery) triple with at least
//! one unit of each kind that fits the budget. Each bound is whatever the
//! budget has left after the outer kinds are paid for, so no candidate is
//! ever generated and thrown away.

use crate::board::{TroopComposition, TroopTable};

/// Iterator over all valid compositions for a budget.
///
/// Order is infantry outer, cavalry middle, artillery inner. The search's
/// tie-break depends on it. Costs must be positive.
pub struct Compositions {
    budget: u64,
    costs: TroopTable,
    pending: Option<TroopComposition>,
}

impl Compositions {
    pub fn new(budget: u32, costs: &TroopTable) -> Self {
        debug_assert!(
            costs.infantry > 0 && costs.cavalry > 0 && costs.artillery > 0,
            "troop costs must be positive"
        );
        let mut iter = Compositions {
            budget: u64::from(budget),
            costs: *costs,
            pending: None,
        };
        iter.pending = iter.fitting(1, 1, 1);
        iter
    }

    fn fitting(&self, infantry: u32, cavalry: u32, artillery: u32) -> Option<TroopComposition> {
        let comp = TroopComposition::new(infantry, cavalry, artillery);
        (comp.total_cost(&self.costs) <= self.budget).then_some(comp)
    }

    /// Odometer step: bump artillery, else reset it and bump cavalry, else
    /// reset both and bump infantry.
    fn successor(&self, c: TroopComposition) -> Option<TroopComposition> {
        self.fitting(c.infantry, c.cavalry, c.artillery + 1)
            .or_else(|| self.fitting(c.infantry, c.cavalry + 1, 1))
            .or_else(|| self.fitting(c.infantry + 1, 1, 1))
    }
}

impl Iterator for Compositions {
    type Item = TroopComposition;

    fn next(&mut self) -> Option<TroopComposition> {
        let current = self.pending?;
        self.pending = self.successor(current);
        Some(current)
    }
}

/// All valid compositions for a budget, in `Compositions` order.
pub fn compositions(budget: u32, costs: &TroopTable) -> Vec<TroopComposition> {
    Compositions::new(budget, costs).collect()
}
