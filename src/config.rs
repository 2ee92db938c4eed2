//! Validated planner configuration.
//!
//! A `SearchConfig` is built once per run and passed by reference into
//! every core operation. It can only be obtained through validation, so the
//! enumeration and evaluation code never re-checks its inputs.

use crate::board::{Board, BoardError, TerritoryId, TroopKind, TroopTable, ALL_TROOP_KINDS};

/// Errors raised while validating or loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("budget must be non-negative, got {0}")]
    NegativeBudget(i64),

    #[error("{kind} cost must be positive, got {value}")]
    NonPositiveCost { kind: TroopKind, value: i64 },

    #[error("{kind} strength must be positive, got {value}")]
    NonPositiveStrength { kind: TroopKind, value: i64 },

    #[error("territory {id} has negative defense {value}")]
    NegativeDefense { id: TerritoryId, value: i64 },

    #[error("{field} value {value} is out of range")]
    OutOfRange { field: String, value: i64 },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable input to one planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    budget: u32,
    costs: TroopTable,
    strengths: TroopTable,
    board: Board,
}

impl SearchConfig {
    /// Validates and builds a configuration. Every cost and strength must be
    /// positive; the budget and defenses are unsigned and thus already valid.
    pub fn new(
        budget: u32,
        costs: TroopTable,
        strengths: TroopTable,
        board: Board,
    ) -> Result<Self, ConfigError> {
        for kind in ALL_TROOP_KINDS {
            if costs.get(kind) == 0 {
                return Err(ConfigError::NonPositiveCost { kind, value: 0 });
            }
            if strengths.get(kind) == 0 {
                return Err(ConfigError::NonPositiveStrength { kind, value: 0 });
            }
        }
        Ok(SearchConfig {
            budget,
            costs,
            strengths,
            board,
        })
    }

    /// Returns a copy with a different budget.
    pub fn with_budget(&self, budget: u32) -> Self {
        SearchConfig {
            budget,
            ..self.clone()
        }
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn costs(&self) -> &TroopTable {
        &self.costs
    }

    pub fn strengths(&self) -> &TroopTable {
        &self.strengths
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Converts a signed raw value to `u32`, reporting the field on failure.
pub(crate) fn to_u32(field: &str, value: i64) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::OutOfRange {
        field: field.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Terrain, Territory};

    fn board() -> Board {
        Board::new(vec![Territory::new(1, 5, Terrain::Plain)]).unwrap()
    }

    #[test]
    fn accepts_positive_tables() {
        let config = SearchConfig::new(
            20,
            TroopTable::DEFAULT_COSTS,
            TroopTable::DEFAULT_STRENGTHS,
            board(),
        )
        .unwrap();
        assert_eq!(config.budget(), 20);
        assert_eq!(config.board().len(), 1);
    }

    #[test]
    fn rejects_zero_cost() {
        let err = SearchConfig::new(
            20,
            TroopTable::new(1, 0, 5),
            TroopTable::DEFAULT_STRENGTHS,
            board(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositiveCost {
                kind: TroopKind::Cavalry,
                value: 0
            }
        ));
    }

    #[test]
    fn rejects_zero_strength() {
        let err = SearchConfig::new(
            20,
            TroopTable::DEFAULT_COSTS,
            TroopTable::new(1, 3, 0),
            board(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositiveStrength {
                kind: TroopKind::Artillery,
                ..
            }
        ));
    }

    #[test]
    fn with_budget_keeps_everything_else() {
        let config = SearchConfig::new(
            20,
            TroopTable::DEFAULT_COSTS,
            TroopTable::DEFAULT_STRENGTHS,
            board(),
        )
        .unwrap();
        let cheaper = config.with_budget(9);
        assert_eq!(cheaper.budget(), 9);
        assert_eq!(cheaper.board(), config.board());
        assert_eq!(cheaper.costs(), config.costs());
    }

    #[test]
    fn to_u32_rejects_negative_and_huge() {
        assert_eq!(to_u32("budget", 7).unwrap(), 7);
        assert!(matches!(
            to_u32("budget", -1),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(to_u32("budget", i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn error_messages_name_the_kind() {
        let err = ConfigError::NonPositiveCost {
            kind: TroopKind::Infantry,
            value: -2,
        };
        assert_eq!(err.to_string(), "infantry cost must be positive, got -2");
    }
}
