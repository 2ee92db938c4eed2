//! Post-search advice.

pub mod terrain;

pub use terrain::{advise, priority_kind, TerrainAssignment, TerrainPriority};
