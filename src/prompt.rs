//! Interactive scenario entry.
//!
//! Asks for the budget, the unit strengths and each territory's defense and
//! terrain, one question per line. Costs keep their standard values. The
//! answers form a `ScenarioFile` that goes through normal validation.

use std::io::{BufRead, Write};

use crate::board::{Terrain, TroopTable, ALL_TROOP_KINDS};
use crate::scenario::{RawTerritory, RawTroopTable, ScenarioFile};

/// Errors during interactive entry.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input ended before the scenario was complete")]
    Eof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Line-oriented question/answer session.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Prompter { input, out }
    }

    /// Writes a question and returns the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.out, "{question}: ")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer parses as a whole number.
    fn ask_number(&mut self, question: &str) -> Result<i64, PromptError> {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.out, "'{answer}' is not a whole number, try again")?,
            }
        }
    }

    /// Asks until the answer is a non-negative count.
    fn ask_count(&mut self, question: &str) -> Result<u32, PromptError> {
        loop {
            let n = self.ask_number(question)?;
            match u32::try_from(n) {
                Ok(count) => return Ok(count),
                Err(_) => writeln!(self.out, "the count cannot be negative, try again")?,
            }
        }
    }

    /// Runs the full session.
    pub fn scenario(&mut self) -> Result<ScenarioFile, PromptError> {
        let budget = self.ask_number("Maximum points available")?;

        let mut strengths = [0i64; 3];
        for (slot, kind) in strengths.iter_mut().zip(ALL_TROOP_KINDS) {
            *slot = self.ask_number(&format!("Strength of {kind}"))?;
        }

        let count = self.ask_count("Number of enemy territories")?;
        let mut territories = Vec::new();
        for id in 1..=count {
            let defense = self.ask_number(&format!("Defense of territory {id}"))?;
            let tag = self.ask(&format!(
                "Terrain of territory {id} (plain/mountain/fortress)"
            ))?;
            territories.push(RawTerritory {
                id,
                defense,
                terrain: Terrain::parse(&tag),
            });
        }

        Ok(ScenarioFile {
            budget,
            troop_costs: TroopTable::DEFAULT_COSTS.into(),
            troop_strengths: RawTroopTable {
                infantry: strengths[0],
                cavalry: strengths[1],
                artillery: strengths[2],
            },
            territories,
        })
    }
}
