//! Reading circuits drawn as text.
//!
//! Each recognized character becomes one cell. Anything else, newlines
//! included, is skipped and does not take up a column, so a cell's `y` is its
//! index among the recognized characters of its line.

use crate::grid::Grid;
use std::path::Path;
use tracing::debug;
use wireworld_core::{CellState, Error, Position, Result};

const EMPTY_CHARS: &[char] = &[' ', '\u{a0}', '_'];
const CONDUCTOR_CHARS: &[char] = &['\u{2588}', '#', '@', '%'];
const HEAD_CHARS: &[char] = &['\u{2592}', '+', '?', ')', '>'];
const TAIL_CHARS: &[char] = &['\u{2588}', '-', '.', '(', '<'];

/// State drawn by `c`, if it is a recognized glyph.
///
/// Tails are matched before conductors, so the full block they share loads
/// as a tail.
pub fn state_for_char(c: char) -> Option<CellState> {
    if EMPTY_CHARS.contains(&c) {
        Some(CellState::Empty)
    } else if TAIL_CHARS.contains(&c) {
        Some(CellState::ElectronTail)
    } else if CONDUCTOR_CHARS.contains(&c) {
        Some(CellState::Conductor)
    } else if HEAD_CHARS.contains(&c) {
        Some(CellState::ElectronHead)
    } else {
        None
    }
}

/// Build a grid from lines of text; line `x`, recognized column `y`.
pub fn from_lines<I, S>(lines: I) -> Grid
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .flat_map(|(x, line)| {
            line.as_ref()
                .chars()
                .filter_map(state_for_char)
                .enumerate()
                .map(|(y, state)| (Position::new(x as i32, y as i32), state))
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn parse(text: &str) -> Grid {
    from_lines(text.lines())
}

/// Read a circuit file.
///
/// Fails if the file cannot be read or holds no recognized cell at all.
pub fn read(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| Error::load(origin.clone(), e))?;
    let grid = parse(&text);
    if grid.is_empty() {
        return Err(Error::load(origin, "no recognized cells"));
    }
    debug!("Loaded {} cells from {}", grid.len(), origin);
    Ok(grid)
}
