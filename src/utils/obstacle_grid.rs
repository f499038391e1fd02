// Obstacle grid definition for grid planners

use itertools::iproduct;
extern crate nalgebra as na;

use crate::common::{GridPos, PlanningError, PlanningResult};

/// Rectangular boolean obstacle field with fixed dimensions.
///
/// A cell is either traversable or blocked; dimensions never change after
/// construction. Coordinates are (row, column) with row 0 at the top.
#[derive(Debug, Clone)]
pub struct ObstacleGrid {
    cells: na::DMatrix<bool>,
}

impl ObstacleGrid {
    /// Create a grid of the given dimensions with every cell traversable
    pub fn open(rows: usize, cols: usize) -> PlanningResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(PlanningError::InvalidParameter(format!(
                "grid dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self {
            cells: na::DMatrix::from_element(rows, cols, false),
        })
    }

    /// Create a grid where `blocked(row, col)` marks obstacle cells
    pub fn from_fn<F>(rows: usize, cols: usize, blocked: F) -> PlanningResult<Self>
    where
        F: Fn(usize, usize) -> bool,
    {
        if rows == 0 || cols == 0 {
            return Err(PlanningError::InvalidParameter(format!(
                "grid dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self {
            cells: na::DMatrix::from_fn(rows, cols, blocked),
        })
    }

    /// Create a grid from an existing obstacle matrix (true = blocked)
    pub fn from_matrix(cells: na::DMatrix<bool>) -> PlanningResult<Self> {
        if cells.nrows() == 0 || cells.ncols() == 0 {
            return Err(PlanningError::InvalidParameter(format!(
                "grid dimensions must be positive, got {}x{}",
                cells.nrows(),
                cells.ncols()
            )));
        }
        Ok(Self { cells })
    }

    pub fn rows(&self) -> i32 {
        self.cells.nrows() as i32
    }

    pub fn cols(&self) -> i32 {
        self.cells.ncols() as i32
    }

    /// True iff (row, col) lies within the grid
    pub fn is_valid(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows() && col >= 0 && col < self.cols()
    }

    /// True iff the cell at (row, col) is blocked.
    ///
    /// The coordinate must be valid; callers check `is_valid` first.
    pub fn is_obstacle(&self, row: i32, col: i32) -> bool {
        debug_assert!(self.is_valid(row, col));
        self.cells[(row as usize, col as usize)]
    }

    /// Mark the cell at (row, col) as blocked
    pub fn set_obstacle(&mut self, row: i32, col: i32) -> PlanningResult<()> {
        self.set_cell(row, col, true)
    }

    /// Mark the cell at (row, col) as traversable
    pub fn clear_obstacle(&mut self, row: i32, col: i32) -> PlanningResult<()> {
        self.set_cell(row, col, false)
    }

    fn set_cell(&mut self, row: i32, col: i32, blocked: bool) -> PlanningResult<()> {
        if !self.is_valid(row, col) {
            return Err(PlanningError::OutOfBounds(format!(
                "cell ({}, {}) outside {}x{} grid",
                row,
                col,
                self.rows(),
                self.cols()
            )));
        }
        self.cells[(row as usize, col as usize)] = blocked;
        Ok(())
    }

    /// All blocked cells, in row-major order (used for plotting)
    pub fn obstacle_cells(&self) -> Vec<GridPos> {
        iproduct!(0..self.rows(), 0..self.cols())
            .filter(|&(r, c)| self.is_obstacle(r, c))
            .map(|(r, c)| GridPos::new(r, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid() {
        let grid = ObstacleGrid::open(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(!grid.is_obstacle(2, 3));
        assert!(grid.obstacle_cells().is_empty());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(ObstacleGrid::open(0, 4).is_err());
        assert!(ObstacleGrid::open(4, 0).is_err());
        assert!(ObstacleGrid::from_fn(0, 0, |_, _| false).is_err());
    }

    #[test]
    fn test_is_valid_bounds() {
        let grid = ObstacleGrid::open(5, 5).unwrap();
        assert!(grid.is_valid(0, 0));
        assert!(grid.is_valid(4, 4));
        assert!(!grid.is_valid(-1, 0));
        assert!(!grid.is_valid(0, -1));
        assert!(!grid.is_valid(5, 0));
        assert!(!grid.is_valid(0, 5));
    }

    #[test]
    fn test_set_and_clear_obstacle() {
        let mut grid = ObstacleGrid::open(3, 3).unwrap();
        grid.set_obstacle(1, 1).unwrap();
        assert!(grid.is_obstacle(1, 1));
        assert_eq!(grid.obstacle_cells(), vec![GridPos::new(1, 1)]);

        grid.clear_obstacle(1, 1).unwrap();
        assert!(!grid.is_obstacle(1, 1));
    }

    #[test]
    fn test_set_obstacle_out_of_bounds() {
        let mut grid = ObstacleGrid::open(3, 3).unwrap();
        assert!(matches!(
            grid.set_obstacle(3, 0),
            Err(PlanningError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_from_fn() {
        let grid = ObstacleGrid::from_fn(2, 2, |r, c| r == c).unwrap();
        assert!(grid.is_obstacle(0, 0));
        assert!(grid.is_obstacle(1, 1));
        assert!(!grid.is_obstacle(0, 1));
    }
}
