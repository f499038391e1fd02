//! grid_astar - A* shortest-path search over 2D obstacle grids
//!
//! This crate provides an A* planner for static rectangular grids with
//! blocked cells, 8-directional movement, and a unit step cost in every
//! direction.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{GridPath, GridPos};
pub use common::{GridPlanner, PlanningError, PlanningResult};
pub use path_planning::{AStarConfig, AStarPlanner};
pub use utils::ObstacleGrid;
