//! Board representation and troop types.
//!
//! Contains the territories under attack and the unit kinds, tables and
//! compositions the planner enumerates.

pub mod territory;
pub mod troop;

pub use territory::{Board, BoardError, Terrain, Territory, TerritoryId};
pub use troop::{TroopComposition, TroopKind, TroopTable, ALL_TROOP_KINDS};
