//! Text rendering of a grid.

use crate::grid::Grid;
use wireworld_core::Result;

const RULE_CHAR: char = '\u{2014}';
const BORDER_CHAR: char = '|';

/// Draw the grid inside a border.
///
/// The output is a rule of `max_y + 2` dashes, one bordered line of glyphs
/// per x from 0, and a closing rule. Every line ends with a newline. Cells at
/// negative coordinates lie outside the drawn area.
pub fn render(grid: &Grid) -> Result<String> {
    let (_, max_y) = grid.bounding_box()?;
    let rule_len = usize::try_from(i64::from(max_y) + 2).unwrap_or(0);
    let rule: String = std::iter::repeat(RULE_CHAR).take(rule_len).collect();

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');

    let mut cells = grid.iter()?.peekable();
    while let Some((pos, state)) = cells.next() {
        if pos.y == 0 {
            out.push(BORDER_CHAR);
        }
        out.push(state.glyph());
        if cells.peek().map_or(true, |(next, _)| next.x != pos.x) {
            out.push(BORDER_CHAR);
            out.push('\n');
        }
    }

    out.push_str(&rule);
    out.push('\n');
    Ok(out)
}
