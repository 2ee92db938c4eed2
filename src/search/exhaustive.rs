//! Exhaustive composition × order search.
//!
//! Evaluates every troop composition against every attack order,
//! composition-major and order-minor, keeping all results. The best result
//! is the first one with the highest conquest count in that enumeration
//! order.
//!
//! Cost is O(C × P!) for C compositions and P territories. Past roughly
//! eight territories a full run is impractical; callers can bound it with
//! `SearchLimits` or the stop flag. Both bound generation of the axes as
//! well as evaluation, so a stopped run never holds more of either axis
//! than it reached.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::board::TroopComposition;
use crate::config::SearchConfig;
use crate::enumerate::{base_sequence, permutation_count, AttackOrder, Compositions, OrderBias, Permutations};
use crate::eval::{evaluate, EvaluationResult};

/// Largest board searched without a size warning.
pub const PRACTICAL_TERRITORY_LIMIT: usize = 8;

/// Optional bounds on a search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Wall-clock budget for the whole run.
    pub movetime: Option<Duration>,
    /// Maximum number of evaluations.
    pub nodes: Option<u64>,
}

/// Errors from the parallel search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Everything a search run produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Compositions generated; a prefix of the full axis if the run was cut.
    pub compositions: Vec<TroopComposition>,
    /// Attack orders generated; a prefix of the full axis if the run was cut.
    pub orders: Vec<AttackOrder>,
    /// All evaluations, composition-major.
    pub results: Vec<EvaluationResult>,
    /// First result with the most conquests, if anything was evaluated.
    pub best: Option<EvaluationResult>,
    pub nodes: u64,
    /// False if a limit or the stop flag cut the run short.
    pub complete: bool,
}

impl SearchOutcome {
    /// Results that conquered their whole order.
    pub fn successful(&self) -> impl Iterator<Item = &EvaluationResult> {
        self.results.iter().filter(|r| r.success)
    }
}

/// Picks the first result with the maximum conquest count.
///
/// `Iterator::max_by_key` keeps the *last* maximum, so this scans by hand.
pub fn best_result(results: &[EvaluationResult]) -> Option<&EvaluationResult> {
    let mut best: Option<&EvaluationResult> = None;
    for r in results {
        if best.map_or(true, |b| r.conquered > b.conquered) {
            best = Some(r);
        }
    }
    best
}

/// Stop conditions shared by the sequential and parallel loops.
struct Halt<'a> {
    stop: &'a AtomicBool,
    deadline: Option<Instant>,
    node_limit: Option<u64>,
}

impl<'a> Halt<'a> {
    fn new(stop: &'a AtomicBool, limits: SearchLimits, start: Instant) -> Self {
        Halt {
            stop,
            deadline: limits.movetime.map(|d| start + d),
            node_limit: limits.nodes,
        }
    }

    fn node_limit_reached(&self, evaluated: u64) -> bool {
        self.node_limit.is_some_and(|n| evaluated >= n)
    }

    fn interrupted(&self) -> bool {
        self.stop.load(Ordering::Relaxed) || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Collects one axis of the search space.
///
/// No evaluation uses more than `node_limit` items of either axis, so
/// collection stops there; the stop flag and deadline are polled every 64
/// items. Returns false as the second value if the axis was cut short.
fn collect_axis<T>(items: impl Iterator<Item = T>, halt: &Halt<'_>) -> (Vec<T>, bool) {
    let mut out = Vec::new();
    for item in items {
        let n = out.len() as u64;
        if halt.node_limit_reached(n) || (n & 63 == 0 && halt.interrupted()) {
            return (out, false);
        }
        out.push(item);
    }
    (out, true)
}

/// Generates both axes and logs the size of the space. The flag is false
/// if either axis was cut short.
fn prepare(
    config: &SearchConfig,
    bias: OrderBias,
    halt: &Halt<'_>,
) -> (Vec<TroopComposition>, Vec<AttackOrder>, bool) {
    let territories = config.board().len();
    if territories > PRACTICAL_TERRITORY_LIMIT {
        warn!(
            territories,
            "{}! attack orders per composition; expect a very long search",
            territories
        );
    }

    let (comps, comps_whole) =
        collect_axis(Compositions::new(config.budget(), config.costs()), halt);
    let (orders, orders_whole) =
        collect_axis(Permutations::new(base_sequence(config.board(), bias)), halt);
    debug!(
        compositions = comps.len(),
        orders = orders.len(),
        orders_total = permutation_count(territories),
        whole = comps_whole && orders_whole,
        "search space"
    );
    (comps, orders, comps_whole && orders_whole)
}

/// Assembles the outcome and logs a summary line.
fn finish(
    compositions: Vec<TroopComposition>,
    orders: Vec<AttackOrder>,
    results: Vec<EvaluationResult>,
    complete: bool,
    start: Instant,
) -> SearchOutcome {
    let best = best_result(&results).cloned();
    let nodes = results.len() as u64;
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if !complete {
        warn!(nodes, elapsed_ms, "search stopped before covering every pair");
    }
    info!(
        nodes,
        elapsed_ms,
        best = best.as_ref().map(|b| b.conquered),
        complete,
        "search finished"
    );

    SearchOutcome {
        compositions,
        orders,
        results,
        best,
        nodes,
        complete,
    }
}

/// Runs the exhaustive search on the calling thread.
///
/// The stop flag and movetime are polled every 64 evaluations and every 64
/// generated candidates; the node limit is checked before each one.
pub fn search(
    config: &SearchConfig,
    bias: OrderBias,
    limits: SearchLimits,
    stop: &AtomicBool,
) -> SearchOutcome {
    let start = Instant::now();
    let halt = Halt::new(stop, limits, start);
    let (comps, orders, whole) = prepare(config, bias, &halt);

    let mut results = Vec::new();
    let mut nodes: u64 = 0;
    let mut complete = whole;

    'outer: for &comp in &comps {
        for order in &orders {
            if halt.node_limit_reached(nodes) || (nodes & 63 == 0 && halt.interrupted()) {
                complete = false;
                break 'outer;
            }
            results.push(evaluate(comp, order, config.board(), config.strengths()));
            nodes += 1;
        }
    }

    finish(comps, orders, results, complete, start)
}

/// Runs the search with one rayon task per composition.
///
/// Per-composition results are collected in composition order before the
/// reduction, so a complete run returns exactly what `search` returns. A
/// stopped run may leave gaps in the enumeration; the best is taken over
/// what was evaluated. `threads == 0` lets rayon pick.
pub fn search_parallel(
    config: &SearchConfig,
    bias: OrderBias,
    limits: SearchLimits,
    stop: &AtomicBool,
    threads: usize,
) -> Result<SearchOutcome, SearchError> {
    let start = Instant::now();
    let halt = Halt::new(stop, limits, start);
    let (comps, orders, whole) = prepare(config, bias, &halt);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;
    debug!(threads = pool.current_num_threads(), "parallel search");

    let claimed = AtomicU64::new(0);
    let truncated = AtomicBool::new(false);

    let chunks: Vec<Vec<EvaluationResult>> = pool.install(|| {
        comps
            .par_iter()
            .map(|&comp| {
                let mut out = Vec::with_capacity(orders.len());
                for (i, order) in orders.iter().enumerate() {
                    if truncated.load(Ordering::Relaxed) {
                        break;
                    }
                    let n = claimed.fetch_add(1, Ordering::Relaxed);
                    if halt.node_limit_reached(n) || (i & 63 == 0 && halt.interrupted()) {
                        truncated.store(true, Ordering::Relaxed);
                        break;
                    }
                    out.push(evaluate(comp, order, config.board(), config.strengths()));
                }
                out
            })
            .collect()
    });

    let results: Vec<EvaluationResult> = chunks.into_iter().flatten().collect();
    let complete = whole && !truncated.load(Ordering::Relaxed);
    Ok(finish(comps, orders, results, complete, start))
}
