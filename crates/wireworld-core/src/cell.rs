//! Cell states and the WireWorld transition rule.

use std::fmt;

pub const EMPTY_GLYPH: char = ' ';
pub const CONDUCTOR_GLYPH: char = '\u{2588}';
pub const HEAD_GLYPH: char = '\u{2592}';
/// Tails are drawn as plain wire.
pub const TAIL_GLYPH: char = CONDUCTOR_GLYPH;

/// State of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Nothing, acts on nothing
    #[default]
    Empty,
    /// Wire that turns into a head when 1 or 2 neighbors are heads
    Conductor,
    ElectronHead,
    ElectronTail,
}

impl CellState {
    pub const ALL: [CellState; 4] = [
        CellState::Empty,
        CellState::Conductor,
        CellState::ElectronHead,
        CellState::ElectronTail,
    ];

    /// Glyph used when printing the grid
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => EMPTY_GLYPH,
            CellState::Conductor => CONDUCTOR_GLYPH,
            CellState::ElectronHead => HEAD_GLYPH,
            CellState::ElectronTail => TAIL_GLYPH,
        }
    }

    pub fn is_head(self) -> bool {
        self == CellState::ElectronHead
    }

    /// State of this cell in the next generation, given its neighbors.
    ///
    /// Only the number of electron heads among `neighbors` matters, so their
    /// order is irrelevant.
    pub fn next_state<I>(self, neighbors: I) -> CellState
    where
        I: IntoIterator<Item = CellState>,
    {
        match self {
            CellState::Empty => CellState::Empty,
            CellState::Conductor => {
                let heads = neighbors.into_iter().filter(|n| n.is_head()).count();
                if matches!(heads, 1 | 2) {
                    CellState::ElectronHead
                } else {
                    CellState::Conductor
                }
            }
            CellState::ElectronHead => CellState::ElectronTail,
            CellState::ElectronTail => CellState::Conductor,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
