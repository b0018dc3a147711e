use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid stores one generation of cells on a torus.
/// Reads wrap around the edges; writes address cells directly.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Set cell at position. Coordinates are not wrapped; wrapping
    /// applies to reads only.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Report whether the cell at (x, y) is alive, wrapping both
    /// coordinates toroidally. Negative inputs wrap like true modulo,
    /// so x = -1 addresses column width-1 and neighbor offsets can be
    /// passed unchecked.
    pub fn alive(&self, x: isize, y: isize) -> bool {
        let w = self.width as isize;
        let h = self.height as isize;
        let x = ((x % w) + w) % w;
        let y = ((y % h) + h) % h;
        self.cells[self.get_index(x as usize, y as usize)].is_alive()
    }

    /// Count live cells among the 8 wrap-around neighbors of (x, y)
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.alive(x as isize + dx, y as isize + dy))
            .count() as u8
    }

    /// State of the cell at (x, y) in the next generation.
    /// Purely a query; the grid is not mutated.
    pub fn next(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.live_neighbors(x, y))
    }

    /// Write the entire next generation into `next`, reading only
    /// `self`. `next` is overwritten wholesale and must have the same
    /// dimensions.
    pub fn evolve_into(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        for y in 0..self.height {
            for x in 0..self.width {
                next.set(x, y, self.next(x, y));
            }
        }
    }

    /// Parallel `evolve_into`: rows are partitioned across the rayon
    /// pool. Returns only once every row has been written.
    pub fn evolve_into_parallel(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        next.cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = self.next(x, y);
                }
            });
    }

    /// Seed the grid with a random soup: width*height/4 uniformly random
    /// coordinates are set alive (duplicates allowed, so the live count
    /// is roughly a quarter of the grid).
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for _ in 0..(self.width * self.height / 4) {
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            self.set(x, y, Cell::Alive);
        }
    }

    /// Cells in row-major order: `height` rows of `width`, top to bottom
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_wrap_on_x_axis() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 0, Cell::Alive);
        grid.set(0, 1, Cell::Alive);

        assert_eq!(grid.alive(-1, 0), grid.alive(3, 0));
        assert!(grid.alive(-1, 0));
        assert_eq!(grid.alive(4, 1), grid.alive(0, 1));
        assert!(grid.alive(4, 1));
    }

    #[test]
    fn test_wrap_on_y_axis() {
        let mut grid = Grid::new(4, 3);
        grid.set(1, 2, Cell::Alive);
        grid.set(2, 0, Cell::Alive);

        assert_eq!(grid.alive(1, -1), grid.alive(1, 2));
        assert!(grid.alive(1, -1));
        assert_eq!(grid.alive(2, 3), grid.alive(2, 0));
        assert!(grid.alive(2, 3));
    }

    #[test]
    fn test_neighbors_counted_across_edges() {
        // Neighbors of the corner cell live on the three opposite edges.
        let mut grid = Grid::new(5, 5);
        grid.set(4, 4, Cell::Alive);
        grid.set(4, 0, Cell::Alive);
        grid.set(0, 4, Cell::Alive);

        assert_eq!(grid.live_neighbors(0, 0), 3);
        assert_eq!(grid.next(0, 0), Cell::Alive);
    }

    #[test]
    fn test_birth_needs_exactly_three_neighbors() {
        let mut grid = Grid::new(6, 6);
        grid.set(1, 1, Cell::Alive);
        grid.set(2, 1, Cell::Alive);
        assert_eq!(grid.next(2, 2), Cell::Dead);

        grid.set(3, 1, Cell::Alive);
        assert_eq!(grid.next(2, 2), Cell::Alive);

        grid.set(1, 3, Cell::Alive);
        assert_eq!(grid.next(2, 2), Cell::Dead);
    }

    #[test]
    fn test_survival_needs_two_or_three_neighbors() {
        let mut grid = Grid::new(6, 6);
        grid.set(2, 2, Cell::Alive);
        grid.set(1, 2, Cell::Alive);
        assert_eq!(grid.next(2, 2), Cell::Dead);

        grid.set(3, 2, Cell::Alive);
        assert_eq!(grid.next(2, 2), Cell::Alive);

        grid.set(2, 1, Cell::Alive);
        assert_eq!(grid.next(2, 2), Cell::Alive);

        grid.set(2, 3, Cell::Alive);
        assert_eq!(grid.next(2, 2), Cell::Dead);
    }

    #[test]
    fn test_parallel_evolution_matches_serial() {
        let mut grid = Grid::new(32, 24);
        let mut rng = StdRng::seed_from_u64(42);
        grid.randomize(&mut rng);

        let mut serial = Grid::new(32, 24);
        let mut parallel = Grid::new(32, 24);
        grid.evolve_into(&mut serial);
        grid.evolve_into_parallel(&mut parallel);

        assert_eq!(serial.cells(), parallel.cells());
    }

    #[test]
    fn test_randomize_populates_roughly_a_quarter() {
        let mut grid = Grid::new(40, 15);
        let mut rng = StdRng::seed_from_u64(7);
        grid.randomize(&mut rng);

        let live = grid.cells().iter().filter(|c| c.is_alive()).count();
        // 150 placements with duplicates land somewhere below a quarter.
        assert!(live > 0);
        assert!(live <= 40 * 15 / 4);
    }
}
