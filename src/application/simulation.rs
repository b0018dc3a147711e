use crate::domain::Grid;
use crate::rendering;
use std::mem;
use thiserror::Error;

/// Returned when a simulation is constructed with a zero dimension.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("grid dimensions must be positive, got {width}x{height}")]
pub struct InvalidDimension {
    pub width: usize,
    pub height: usize,
}

/// Simulation orchestrates one running game.
/// It owns exactly two equally sized grids: `current`, the generation
/// being read and rendered, and `scratch`, which receives the next
/// generation. Advancing swaps their roles instead of copying cells, so
/// the same two allocations are reused for the simulation's lifetime.
#[derive(Debug)]
pub struct Simulation {
    current: Grid,
    scratch: Grid,
}

impl Simulation {
    /// Create a simulation with all cells dead.
    /// Both buffers are allocated up front and never resized.
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidDimension> {
        if width == 0 || height == 0 {
            return Err(InvalidDimension { width, height });
        }
        Ok(Self {
            current: Grid::new(width, height),
            scratch: Grid::new(width, height),
        })
    }

    /// Grid dimensions, shared by both buffers
    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    /// The generation currently being read and rendered
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Mutable access to the current generation, for seeding
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    /// Advance the game by one generation. The next state is computed
    /// entirely from `current` into `scratch`, then the two buffers
    /// exchange roles. Nothing is allocated and no cell data is copied.
    pub fn advance(&mut self) {
        self.current.evolve_into(&mut self.scratch);
        mem::swap(&mut self.current, &mut self.scratch);
    }

    /// `advance` through the row-parallel evolution path. The swap
    /// happens only after every worker has finished its rows.
    pub fn advance_parallel(&mut self) {
        self.current.evolve_into_parallel(&mut self.scratch);
        mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Render the current generation as a text frame
    pub fn render(&self) -> String {
        rendering::render_frame(&self.current)
    }
}
