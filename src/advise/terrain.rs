//! Terrain-based unit priorities.
//!
//! After the search, each territory of the winning order gets a suggested
//! lead unit: cavalry on open plains, infantry in the mountains, artillery
//! against fortresses. The suggested count is the composition's count of
//! that kind, unchanged.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Terrain, TerritoryId, TroopComposition, TroopKind};
use crate::enumerate::AttackOrder;

/// Suggested lead unit for one territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainPriority {
    pub territory: TerritoryId,
    pub terrain: Terrain,
    pub kind: TroopKind,
    pub units: u32,
}

/// One priority per territory, in attack order.
pub type TerrainAssignment = Vec<TerrainPriority>;

/// Maps a terrain to the unit kind that should lead the attack.
pub fn priority_kind(terrain: &Terrain) -> TroopKind {
    match terrain {
        Terrain::Plain => TroopKind::Cavalry,
        Terrain::Mountain => TroopKind::Infantry,
        Terrain::Fortress => TroopKind::Artillery,
        // Unrecognized terrain is fought like a plain.
        Terrain::Other(_) => TroopKind::Cavalry,
    }
}

/// Builds the terrain assignment for an order. Territories missing from the
/// board are treated as plains.
pub fn advise(order: &AttackOrder, composition: &TroopComposition, board: &Board) -> TerrainAssignment {
    order
        .ids()
        .iter()
        .map(|&id| {
            let terrain = board
                .get(id)
                .map(|t| t.terrain.clone())
                .unwrap_or_default();
            let kind = priority_kind(&terrain);
            TerrainPriority {
                territory: id,
                terrain,
                kind,
                units: composition.count(kind),
            }
        })
        .collect()
}
