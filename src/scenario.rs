//! Scenario files.
//!
//! A scenario is the raw, unvalidated description of one planning problem,
//! read from JSON or built in code. Numbers are signed so that negative
//! input reaches validation and is reported by name instead of failing in
//! the parser.
//!
//! ```json
//! {
//!   "budget": 20,
//!   "troop_costs": {"infantry": 1, "cavalry": 3, "artillery": 5},
//!   "troop_strengths": {"infantry": 1, "cavalry": 3, "artillery": 5},
//!   "territories": [{"id": 1, "defense": 10, "terrain": "plain"}]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Terrain, Territory, TerritoryId, TroopKind, TroopTable, ALL_TROOP_KINDS};
use crate::config::{to_u32, ConfigError, SearchConfig};

/// Budget of the standard game.
pub const DEFAULT_BUDGET: i64 = 20;

/// Per-kind values as read from a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTroopTable {
    pub infantry: i64,
    pub cavalry: i64,
    pub artillery: i64,
}

impl RawTroopTable {
    fn get(&self, kind: TroopKind) -> i64 {
        match kind {
            TroopKind::Infantry => self.infantry,
            TroopKind::Cavalry => self.cavalry,
            TroopKind::Artillery => self.artillery,
        }
    }

    fn default_costs() -> Self {
        TroopTable::DEFAULT_COSTS.into()
    }

    fn default_strengths() -> Self {
        TroopTable::DEFAULT_STRENGTHS.into()
    }
}

impl From<TroopTable> for RawTroopTable {
    fn from(t: TroopTable) -> Self {
        RawTroopTable {
            infantry: i64::from(t.infantry),
            cavalry: i64::from(t.cavalry),
            artillery: i64::from(t.artillery),
        }
    }
}

/// A territory as read from a scenario. Missing terrain means plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTerritory {
    pub id: u32,
    pub defense: i64,
    #[serde(default)]
    pub terrain: Terrain,
}

/// Unvalidated planning problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub budget: i64,
    #[serde(default = "RawTroopTable::default_costs")]
    pub troop_costs: RawTroopTable,
    #[serde(default = "RawTroopTable::default_strengths")]
    pub troop_strengths: RawTroopTable,
    #[serde(default)]
    pub territories: Vec<RawTerritory>,
}

impl ScenarioFile {
    /// Parses a scenario from JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses a scenario file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validates the scenario into a `SearchConfig`.
    pub fn validate(&self) -> Result<SearchConfig, ConfigError> {
        if self.budget < 0 {
            return Err(ConfigError::NegativeBudget(self.budget));
        }
        let budget = to_u32("budget", self.budget)?;

        let costs = table(&self.troop_costs, "cost", |kind, value| {
            ConfigError::NonPositiveCost { kind, value }
        })?;
        let strengths = table(&self.troop_strengths, "strength", |kind, value| {
            ConfigError::NonPositiveStrength { kind, value }
        })?;

        let mut territories = Vec::with_capacity(self.territories.len());
        for raw in &self.territories {
            if raw.defense < 0 {
                return Err(ConfigError::NegativeDefense {
                    id: TerritoryId(raw.id),
                    value: raw.defense,
                });
            }
            let defense = to_u32(&format!("territory {} defense", raw.id), raw.defense)?;
            territories.push(Territory::new(raw.id, defense, raw.terrain.clone()));
        }

        SearchConfig::new(budget, costs, strengths, Board::new(territories)?)
    }
}

/// Validates one per-kind table; `non_positive` builds the error for a
/// value that is zero or negative.
fn table(
    raw: &RawTroopTable,
    what: &str,
    non_positive: impl Fn(TroopKind, i64) -> ConfigError,
) -> Result<TroopTable, ConfigError> {
    let mut values = [0u32; 3];
    for (slot, kind) in values.iter_mut().zip(ALL_TROOP_KINDS) {
        let value = raw.get(kind);
        if value <= 0 {
            return Err(non_positive(kind, value));
        }
        *slot = to_u32(&format!("{kind} {what}"), value)?;
    }
    Ok(TroopTable::new(values[0], values[1], values[2]))
}

/// The standard three-territory scenario.
pub fn default_scenario() -> ScenarioFile {
    ScenarioFile {
        budget: DEFAULT_BUDGET,
        troop_costs: RawTroopTable::default_costs(),
        troop_strengths: RawTroopTable::default_strengths(),
        territories: vec![
            RawTerritory {
                id: 1,
                defense: 10,
                terrain: Terrain::Plain,
            },
            RawTerritory {
                id: 2,
                defense: 15,
                terrain: Terrain::Mountain,
            },
            RawTerritory {
                id: 3,
                defense: 12,
                terrain: Terrain::Fortress,
            },
        ],
    }
}

/// A scenario with `count` territories of random defense in
/// `0..=max_defense` and random known terrain, on the standard budget.
pub fn random_scenario(count: usize, max_defense: u32, rng: &mut impl Rng) -> ScenarioFile {
    const TERRAINS: [Terrain; 3] = [Terrain::Plain, Terrain::Mountain, Terrain::Fortress];
    let territories = (1..=count as u32)
        .map(|id| RawTerritory {
            id,
            defense: i64::from(rng.gen_range(0..=max_defense)),
            terrain: TERRAINS[rng.gen_range(0..TERRAINS.len())].clone(),
        })
        .collect();
    ScenarioFile {
        budget: DEFAULT_BUDGET,
        troop_costs: RawTroopTable::default_costs(),
        troop_strengths: RawTroopTable::default_strengths(),
        territories,
    }
}
