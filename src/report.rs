//! Search reports and their rendering.
//!
//! A `Report` bundles what a caller needs from one run: the search space,
//! every evaluation, the successful subset, the best campaign and its
//! terrain strategy. It renders as plain text or JSON.

use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;

use crate::advise::{advise, TerrainAssignment};
use crate::board::{Board, TroopComposition};
use crate::enumerate::AttackOrder;
use crate::eval::EvaluationResult;
use crate::search::SearchOutcome;

/// Outcome of one planning run, ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub territories: usize,
    pub compositions: Vec<TroopComposition>,
    pub orders: Vec<AttackOrder>,
    pub results: Vec<EvaluationResult>,
    pub successful: Vec<EvaluationResult>,
    pub best: Option<EvaluationResult>,
    /// Terrain priorities for the best order; empty without a best.
    pub strategy: TerrainAssignment,
    pub nodes: u64,
    pub complete: bool,
}

impl Report {
    /// Builds a report from a finished search over `board`.
    pub fn new(outcome: SearchOutcome, board: &Board) -> Self {
        let successful = outcome.successful().cloned().collect();
        let strategy = outcome
            .best
            .as_ref()
            .map(|b| advise(&b.order, &b.composition, board))
            .unwrap_or_default();
        Report {
            territories: board.len(),
            compositions: outcome.compositions,
            orders: outcome.orders,
            results: outcome.results,
            successful,
            best: outcome.best,
            strategy,
            nodes: outcome.nodes,
            complete: outcome.complete,
        }
    }
}

fn format_order(order: &AttackOrder) -> String {
    let ids: Vec<String> = order.ids().iter().map(|id| id.to_string()).collect();
    format!("[{}]", ids.join(", "))
}

fn format_result(r: &EvaluationResult) -> String {
    format!(
        "{} -> {} conquered {}{}",
        r.composition,
        format_order(&r.order),
        r.conquered,
        if r.success { "" } else { " (stopped)" }
    )
}

/// Writes `title (n): a, b, c ... and k more` on one line.
fn write_list<W: Write, T: Display>(
    out: &mut W,
    title: &str,
    items: impl ExactSizeIterator<Item = T>,
    limit: usize,
) -> io::Result<()> {
    let total = items.len();
    write!(out, "{title} ({total}):")?;
    if total == 0 {
        return writeln!(out, " none");
    }
    let shown: Vec<String> = items.take(limit).map(|i| i.to_string()).collect();
    write!(out, " {}", shown.join(", "))?;
    if total > shown.len() {
        write!(out, " ... and {} more", total - shown.len())?;
    }
    writeln!(out)
}

/// Renders a report as text. Lists longer than `limit` are truncated.
pub fn write_text<W: Write>(report: &Report, out: &mut W, limit: usize) -> io::Result<()> {
    write_list(out, "Troop compositions", report.compositions.iter(), limit)?;
    write_list(
        out,
        "Attack orders",
        report.orders.iter().map(format_order),
        limit,
    )?;
    writeln!(
        out,
        "Evaluated pairs: {}{}",
        report.nodes,
        if report.complete { "" } else { " (search stopped early)" }
    )?;
    write_list(
        out,
        "Successful campaigns",
        report.successful.iter().map(format_result),
        limit,
    )?;

    match &report.best {
        Some(best) => {
            writeln!(
                out,
                "Best campaign: composition {} order {} conquered {} of {}{}",
                best.composition,
                format_order(&best.order),
                best.conquered,
                report.territories,
                if best.success { "" } else { " (stopped)" }
            )?;
            writeln!(out, "Terrain strategy:")?;
            for p in &report.strategy {
                writeln!(
                    out,
                    "  territory {} ({}): lead with {} {}",
                    p.territory, p.terrain, p.units, p.kind
                )?;
            }
        }
        None if report.complete => {
            writeln!(out, "Best campaign: none (no composition fits the budget)")?
        }
        None => writeln!(out, "Best campaign: none (search stopped before any evaluation)")?,
    }
    out.flush()
}

/// Renders a report as a single JSON document.
pub fn write_json<W: Write>(report: &Report, out: &mut W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out).and_then(|()| out.flush()).map_err(serde_json::Error::io)
}
