//! Text-frame rendering of a grid generation.

use crate::domain::Grid;

/// Render one generation as a text frame: `height` lines of `width`
/// glyphs, rows top to bottom, columns left to right, with a newline
/// after every row including the last.
pub fn render_frame(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut frame = String::with_capacity((width + 1) * height);
    for row in grid.cells().chunks(width) {
        frame.extend(row.iter().map(|cell| cell.glyph()));
        frame.push('\n');
    }
    frame
}
