//! Enemy territories and the board that holds them.
//!
//! Territories form a flat list with no adjacency. Iteration follows
//! insertion order, which is the base sequence for attack-order generation.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a territory on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerritoryId(pub u32);

impl fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terrain of a territory.
///
/// Tags that match none of the known terrains are kept verbatim in
/// `Other` so they can be reported back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Terrain {
    #[default]
    Plain,
    Mountain,
    Fortress,
    Other(String),
}

impl Terrain {
    /// Parses a terrain tag. Accepts English and Spanish names, ignoring
    /// case and surrounding whitespace. An empty tag is `Plain`.
    pub fn parse(tag: &str) -> Terrain {
        let lower = tag.trim().to_lowercase();
        match lower.as_str() {
            "" | "plain" | "plains" | "plano" => Terrain::Plain,
            "mountain" | "mountains" | "montaña" | "montana" => Terrain::Mountain,
            "fortress" | "fortaleza" => Terrain::Fortress,
            _ => Terrain::Other(lower),
        }
    }

    /// Returns the canonical tag.
    pub fn tag(&self) -> &str {
        match self {
            Terrain::Plain => "plain",
            Terrain::Mountain => "mountain",
            Terrain::Fortress => "fortress",
            Terrain::Other(tag) => tag,
        }
    }
}

impl From<String> for Terrain {
    fn from(tag: String) -> Self {
        Terrain::parse(&tag)
    }
}

impl From<Terrain> for String {
    fn from(terrain: Terrain) -> Self {
        terrain.tag().to_string()
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An enemy territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub defense: u32,
    pub terrain: Terrain,
}

impl Territory {
    pub fn new(id: u32, defense: u32, terrain: Terrain) -> Self {
        Territory {
            id: TerritoryId(id),
            defense,
            terrain,
        }
    }
}

/// Errors that can occur while building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("duplicate territory id {0}")]
    DuplicateTerritory(TerritoryId),
}

/// The set of enemy territories for one planning run.
///
/// Keeps territories in insertion order with an id index for O(1) lookup.
/// Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    territories: Vec<Territory>,
    index: HashMap<TerritoryId, usize>,
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Builds a board from territories in insertion order.
    pub fn new(territories: Vec<Territory>) -> Result<Self, BoardError> {
        let mut index = HashMap::with_capacity(territories.len());
        for (i, t) in territories.iter().enumerate() {
            if index.insert(t.id, i).is_some() {
                return Err(BoardError::DuplicateTerritory(t.id));
            }
        }
        Ok(Board { territories, index })
    }

    /// Looks up a territory by id.
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.index.get(&id).map(|&i| &self.territories[i])
    }

    /// Territories in insertion order.
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Territory ids in insertion order.
    pub fn ids(&self) -> Vec<TerritoryId> {
        self.territories.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Sum of all defenses.
    pub fn total_defense(&self) -> u64 {
        self.territories.iter().map(|t| u64::from(t.defense)).sum()
    }
}
