use super::{Cell, Grid};

/// A named arrangement of live cells, stored as coordinates relative to
/// the pattern's top-left corner.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Stamp the pattern onto the grid with its top-left corner at (x, y)
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for &(dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive);
        }
    }
}

/// Classic Life patterns
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, a horizontal bar of three
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (1, 0), (2, 0)])
    }

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new("Block", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Glider - smallest spaceship, travels diagonally with period 4
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), block(), glider(), toad(), beacon()]
    }

    /// Look up a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
