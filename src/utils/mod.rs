//! Utility modules for grid_astar

pub mod obstacle_grid;
pub mod visualization;

pub use obstacle_grid::*;
pub use visualization::{GridVisualizer, colors};
