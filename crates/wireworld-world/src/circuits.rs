//! Preset logic gate circuits.
//!
//! Each circuit feeds two pulse trains into a gate so that every input
//! combination reaches it once: first A alone, then B alone, then both. The
//! output wire ends at the rightmost cell of the drawing.

use crate::grid::Grid;
use crate::loader;
use std::path::Path;
use wireworld_core::{Error, Result};

const GATE_OR: &str = include_str!("../circuits/gate_or.txt");
const GATE_XOR: &str = include_str!("../circuits/gate_xor.txt");
const GATE_AND: &str = include_str!("../circuits/gate_and.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Or,
    Xor,
    And,
}

impl Preset {
    /// Playback order
    pub const ALL: [Preset; 3] = [Preset::Or, Preset::Xor, Preset::And];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Or => "or",
            Preset::Xor => "xor",
            Preset::And => "and",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::Or => "logical OR gate",
            Preset::Xor => "logical XOR gate",
            Preset::And => "logical AND gate",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Preset::Or => "gate_or.txt",
            Preset::Xor => "gate_xor.txt",
            Preset::And => "gate_and.txt",
        }
    }

    /// Bundled drawing of the circuit
    pub fn source(self) -> &'static str {
        match self {
            Preset::Or => GATE_OR,
            Preset::Xor => GATE_XOR,
            Preset::And => GATE_AND,
        }
    }

    /// Load from `dir` when given, otherwise from the bundled drawing
    pub fn load(self, dir: Option<&Path>) -> Result<Grid> {
        match dir {
            Some(dir) => loader::read(dir.join(self.file_name())),
            None => {
                let grid = loader::parse(self.source());
                if grid.is_empty() {
                    return Err(Error::load(self.file_name(), "no recognized cells"));
                }
                Ok(grid)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{Simulation, StopReason};
    use wireworld_core::{CellState, Position};

    fn output_cell(grid: &Grid) -> Position {
        grid.cells()
            .filter(|(_, state)| *state != CellState::Empty)
            .map(|(pos, _)| pos)
            .max_by_key(|pos| pos.y)
            .unwrap()
    }

    /// Generations at which the output cell holds a head, and the run length
    fn play(preset: Preset) -> (Vec<u64>, u64) {
        let grid = preset.load(None).unwrap();
        let out = output_cell(&grid);
        let mut pulses = Vec::new();
        let summary = Simulation::new(grid)
            .run(Some(1_000), |generation, grid| {
                if grid.get(out) == CellState::ElectronHead {
                    pulses.push(generation);
                }
                Ok(())
            })
            .unwrap();
        assert_eq!(summary.stop_reason, StopReason::Idle);
        (pulses, summary.generations)
    }

    #[test]
    fn test_presets_load() {
        for preset in Preset::ALL {
            let grid = preset.load(None).unwrap();
            assert!(grid.has_current(), "{} starts without current", preset.name());
            assert_eq!(grid.count(CellState::ElectronHead), 4);
            assert_eq!(grid.count(CellState::ElectronTail), 4);
        }
    }

    #[test]
    fn test_or_gate() {
        assert_eq!(play(Preset::Or), (vec![28, 48, 68], 69));
    }

    #[test]
    fn test_xor_gate() {
        assert_eq!(play(Preset::Xor), (vec![28, 48], 62));
    }

    #[test]
    fn test_and_gate() {
        assert_eq!(play(Preset::And), (vec![92], 93));
    }

    #[test]
    fn test_output_cells() {
        let or = Preset::Or.load(None).unwrap();
        assert_eq!(output_cell(&or), Position::new(4, 86));
        let and = Preset::And.load(None).unwrap();
        assert_eq!(output_cell(&and), Position::new(4, 109));
    }

    #[test]
    fn test_load_from_missing_dir() {
        let err = Preset::Xor.load(Some(Path::new("/nonexistent"))).unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }
}
