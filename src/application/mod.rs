mod simulation;

pub use simulation::{InvalidDimension, Simulation};
