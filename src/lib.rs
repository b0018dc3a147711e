// Domain layer - grid state and the Life rule
pub mod domain;

// Application layer - double-buffered generation stepping
pub mod application;

// Infrastructure layer - text frame output
pub mod rendering;

// Re-exports for convenience
pub use application::{InvalidDimension, Simulation};
pub use domain::{Cell, Grid, Pattern, presets};
