//! Common traits defining interfaces for grid planners

use crate::common::error::PlanningResult;
use crate::common::types::{GridPath, GridPos};
use crate::utils::ObstacleGrid;

/// Trait for grid-based path planning algorithms
pub trait GridPlanner {
    /// Plan a path on `grid` from `start` to `goal`.
    ///
    /// Returns `Ok(Some(path))` when a path exists, `Ok(None)` when the goal
    /// is unreachable, and an error when start or goal is not a usable cell.
    fn plan(
        &self,
        grid: &ObstacleGrid,
        start: GridPos,
        goal: GridPos,
    ) -> PlanningResult<Option<GridPath>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait compiles correctly
    struct DummyPlanner;

    impl GridPlanner for DummyPlanner {
        fn plan(
            &self,
            _grid: &ObstacleGrid,
            start: GridPos,
            _goal: GridPos,
        ) -> PlanningResult<Option<GridPath>> {
            Ok(Some(GridPath::from_cells(vec![start])))
        }
    }

    #[test]
    fn test_grid_planner_trait() {
        let planner = DummyPlanner;
        let grid = ObstacleGrid::open(3, 3).unwrap();
        let result = planner.plan(&grid, GridPos::new(0, 0), GridPos::new(2, 2));
        assert!(result.is_ok());
    }
}
