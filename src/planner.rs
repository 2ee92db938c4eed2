//! Planner state management.
//!
//! Holds the current configuration and search options between runs. A new
//! configuration replaces the previous board and troop tables wholesale.
//! Uses the parallel search when more than one thread is requested and the
//! sequential search otherwise.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::config::SearchConfig;
use crate::enumerate::OrderBias;
use crate::report::Report;
use crate::search::{search, search_parallel, SearchError, SearchLimits};

/// Errors from a planning run.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("no configuration set")]
    NotConfigured,

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Holds the configuration and options for planning runs.
#[derive(Debug)]
pub struct Planner {
    config: Option<SearchConfig>,
    bias: OrderBias,
    limits: SearchLimits,
    threads: usize,
    stop: Arc<AtomicBool>,
}

impl Default for Planner {
    fn default() -> Self {
        Planner::new()
    }
}

impl Planner {
    /// Creates a planner with no configuration, listed-order bias, no
    /// limits and a single thread.
    pub fn new() -> Self {
        Planner {
            config: None,
            bias: OrderBias::default(),
            limits: SearchLimits::default(),
            threads: 1,
            stop: Arc::default(),
        }
    }

    /// Replaces the configuration.
    pub fn configure(&mut self, config: SearchConfig) {
        debug!(
            budget = config.budget(),
            territories = config.board().len(),
            "planner configured"
        );
        self.config = Some(config);
    }

    pub fn config(&self) -> Option<&SearchConfig> {
        self.config.as_ref()
    }

    pub fn set_bias(&mut self, bias: OrderBias) {
        self.bias = bias;
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// Sets the worker count. 0 lets rayon decide; 1 runs on the caller's
    /// thread.
    pub fn set_threads(&mut self, threads: usize) {
        self.threads = threads;
    }

    /// Handle that stops a running search when set to true.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Runs a search over the current configuration and builds a report.
    ///
    /// The stop flag is cleared before the run starts.
    pub fn run(&self) -> Result<Report, PlanError> {
        let config = self.config.as_ref().ok_or(PlanError::NotConfigured)?;
        self.stop.store(false, Ordering::Relaxed);

        let outcome = if self.threads == 1 {
            search(config, self.bias, self.limits, &self.stop)
        } else {
            search_parallel(config, self.bias, self.limits, &self.stop, self.threads)?
        };
        Ok(Report::new(outcome, config.board()))
    }
}
