//! Troop kinds and compositions.
//!
//! A composition is a fixed triple of unit counts. Costs and strengths are
//! per-configuration values held in a `TroopTable`, indexed by `TroopKind`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TroopKind {
    Infantry,
    Cavalry,
    Artillery,
}

/// All troop kinds, in composition order.
pub const ALL_TROOP_KINDS: [TroopKind; 3] =
    [TroopKind::Infantry, TroopKind::Cavalry, TroopKind::Artillery];

impl TroopKind {
    /// Returns the lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            TroopKind::Infantry => "infantry",
            TroopKind::Cavalry => "cavalry",
            TroopKind::Artillery => "artillery",
        }
    }
}

impl fmt::Display for TroopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per troop kind: used for both point costs and combat strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TroopTable {
    pub infantry: u32,
    pub cavalry: u32,
    pub artillery: u32,
}

impl TroopTable {
    /// Point costs of the standard game.
    pub const DEFAULT_COSTS: TroopTable = TroopTable::new(1, 3, 5);

    /// Combat strengths of the standard game.
    pub const DEFAULT_STRENGTHS: TroopTable = TroopTable::new(1, 3, 5);

    pub const fn new(infantry: u32, cavalry: u32, artillery: u32) -> Self {
        TroopTable {
            infantry,
            cavalry,
            artillery,
        }
    }

    /// Returns the value for a troop kind.
    pub const fn get(&self, kind: TroopKind) -> u32 {
        match kind {
            TroopKind::Infantry => self.infantry,
            TroopKind::Cavalry => self.cavalry,
            TroopKind::Artillery => self.artillery,
        }
    }
}

/// Unit counts per troop kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TroopComposition {
    pub infantry: u32,
    pub cavalry: u32,
    pub artillery: u32,
}

impl TroopComposition {
    pub const fn new(infantry: u32, cavalry: u32, artillery: u32) -> Self {
        TroopComposition {
            infantry,
            cavalry,
            artillery,
        }
    }

    /// Returns the number of units of a kind.
    pub const fn count(&self, kind: TroopKind) -> u32 {
        match kind {
            TroopKind::Infantry => self.infantry,
            TroopKind::Cavalry => self.cavalry,
            TroopKind::Artillery => self.artillery,
        }
    }

    /// Sum of `count * table[kind]` over all kinds.
    fn weighted_sum(&self, table: &TroopTable) -> u64 {
        ALL_TROOP_KINDS
            .iter()
            .map(|&k| u64::from(self.count(k)) * u64::from(table.get(k)))
            .sum()
    }

    /// Total point cost of this composition.
    pub fn total_cost(&self, costs: &TroopTable) -> u64 {
        self.weighted_sum(costs)
    }

    /// Total combat strength of this composition.
    pub fn total_strength(&self, strengths: &TroopTable) -> u64 {
        self.weighted_sum(strengths)
    }

    /// True if every troop kind has at least one unit.
    pub const fn has_every_kind(&self) -> bool {
        self.infantry > 0 && self.cavalry > 0 && self.artillery > 0
    }
}

impl fmt::Display for TroopComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.infantry, self.cavalry, self.artillery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup_by_kind() {
        let t = TroopTable::new(2, 4, 7);
        assert_eq!(t.get(TroopKind::Infantry), 2);
        assert_eq!(t.get(TroopKind::Cavalry), 4);
        assert_eq!(t.get(TroopKind::Artillery), 7);
    }

    #[test]
    fn composition_totals() {
        let c = TroopComposition::new(2, 1, 3);
        assert_eq!(c.total_cost(&TroopTable::DEFAULT_COSTS), 2 + 3 + 15);
        assert_eq!(c.total_strength(&TroopTable::new(10, 1, 1)), 24);
    }

    #[test]
    fn every_kind_requires_nonzero_counts() {
        assert!(TroopComposition::new(1, 1, 1).has_every_kind());
        assert!(!TroopComposition::new(0, 1, 1).has_every_kind());
        assert!(!TroopComposition::new(1, 1, 0).has_every_kind());
    }

    #[test]
    fn composition_display() {
        assert_eq!(TroopComposition::new(3, 2, 1).to_string(), "(3, 2, 1)");
    }

    #[test]
    fn kind_serializes_lowercase() {
        let s = serde_json::to_string(&TroopKind::Artillery).unwrap();
        assert_eq!(s, "\"artillery\"");
    }
}
