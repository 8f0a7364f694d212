//! Sparse 2D grid and the synchronous WireWorld step.

use std::collections::HashMap;
use wireworld_core::{CellState, Error, Position, Result};

/// A sparse grid of cells.
///
/// Positions that were never stored read as [`CellState::Empty`]. The default
/// is applied by [`Grid::get`]; reading never inserts anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: HashMap<Position, CellState>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from a table of rows: row `x`, column `y`.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = CellState>,
    {
        rows.into_iter()
            .enumerate()
            .flat_map(|(x, row)| {
                row.into_iter()
                    .enumerate()
                    .map(move |(y, state)| (Position::new(x as i32, y as i32), state))
            })
            .collect()
    }

    /// Get the state at a position, `Empty` when absent
    pub fn get(&self, pos: Position) -> CellState {
        self.cells.get(&pos).copied().unwrap_or_default()
    }

    /// Number of explicitly stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Explicitly stored cells, in no particular order
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells.iter().map(|(pos, state)| (*pos, *state))
    }

    /// Number of stored cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.values().filter(|s| **s == state).count()
    }

    /// States of the Moore neighbors of `pos`, in fixed row-major order
    pub fn neighbors(&self, pos: Position) -> [CellState; 8] {
        pos.moore().map(|n| self.get(n))
    }

    /// Compute the next generation.
    ///
    /// Every stored cell is re-evaluated against this grid only, and the result
    /// goes into a fresh grid, so the update is synchronous. Positions that
    /// were never stored stay absent.
    pub fn next(&self) -> Grid {
        let cells = self
            .cells
            .iter()
            .map(|(pos, state)| (*pos, state.next_state(self.neighbors(*pos))))
            .collect();
        Grid { cells }
    }

    /// Maximal x and maximal y among stored positions
    pub fn bounding_box(&self) -> Result<(i32, i32)> {
        let max_x = self.cells.keys().map(|p| p.x).max();
        let max_y = self.cells.keys().map(|p| p.y).max();
        match (max_x, max_y) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => Err(Error::EmptyGrid),
        }
    }

    /// True iff any stored cell is an electron head
    pub fn has_current(&self) -> bool {
        self.cells.values().any(|s| s.is_head())
    }

    /// No heads and no tails: `next` returns an identical grid
    pub fn is_quiescent(&self) -> bool {
        self.cells
            .values()
            .all(|s| matches!(s, CellState::Empty | CellState::Conductor))
    }

    /// Every position of `[0, max_x] x [0, max_y]`, x-major, with its state.
    pub fn iter(&self) -> Result<impl Iterator<Item = (Position, CellState)> + '_> {
        let (max_x, max_y) = self.bounding_box()?;
        Ok((0..=max_x).flat_map(move |x| {
            (0..=max_y).map(move |y| {
                let pos = Position::new(x, y);
                (pos, self.get(pos))
            })
        }))
    }
}

impl FromIterator<(Position, CellState)> for Grid {
    fn from_iter<T: IntoIterator<Item = (Position, CellState)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
