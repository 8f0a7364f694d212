//! Simulation runner: steps a grid until the circuit goes idle.

use crate::grid::Grid;
use tracing::{debug, info, instrument};
use wireworld_core::{CellState, Result};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No electron head is left
    Idle,
    /// The generation limit was reached while current remained
    GenerationLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub stop_reason: StopReason,
}

pub struct Simulation {
    grid: Grid,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_current(&self) -> bool {
        self.grid.has_current()
    }

    /// Replace the current grid with the next generation
    pub fn advance(&mut self) {
        self.grid = self.grid.next();
        self.generation += 1;
    }

    /// Reason to stop now, or `None` while the run should go on
    pub fn stop_reason(&self, limit: Option<u64>) -> Option<StopReason> {
        if !self.grid.has_current() {
            Some(StopReason::Idle)
        } else if limit.is_some_and(|max| self.generation >= max) {
            Some(StopReason::GenerationLimit)
        } else {
            None
        }
    }

    /// Advance one generation, or return why the run has to stop instead
    pub fn try_advance(&mut self, limit: Option<u64>) -> Option<StopReason> {
        if let Some(reason) = self.stop_reason(limit) {
            return Some(reason);
        }
        self.advance();
        debug!(
            generation = self.generation,
            heads = self.grid.count(CellState::ElectronHead),
            "Advanced"
        );
        None
    }

    /// Close a run and log its summary
    pub fn finish(&self, stop_reason: StopReason) -> RunSummary {
        let summary = RunSummary {
            generations: self.generation,
            stop_reason,
        };
        info!(
            event = "run_summary",
            generations = summary.generations,
            stop_reason = ?summary.stop_reason,
            "Simulation finished"
        );
        summary
    }

    /// Advance until idle or until `limit` generations have run.
    ///
    /// `on_frame` sees the initial grid and then every new generation; an
    /// error from it aborts the run.
    #[instrument(skip(self, on_frame), fields(cells = self.grid.len()))]
    pub fn run<F>(&mut self, limit: Option<u64>, mut on_frame: F) -> Result<RunSummary>
    where
        F: FnMut(u64, &Grid) -> Result<()>,
    {
        info!("Starting simulation");
        on_frame(self.generation, &self.grid)?;

        let stop_reason = loop {
            if let Some(reason) = self.try_advance(limit) {
                break reason;
            }
            on_frame(self.generation, &self.grid)?;
        };

        Ok(self.finish(stop_reason))
    }
}
