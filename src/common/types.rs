//! Common types used throughout grid_astar

/// Grid cell coordinate as (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell reached by moving `d_row` rows and `d_col` columns from here
    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Squared Euclidean distance to `other`, used as the h-cost
    pub fn distance_sq(&self, other: &GridPos) -> i64 {
        let dr = (self.row - other.row) as i64;
        let dc = (self.col - other.col) as i64;
        dr * dr + dc * dc
    }

    /// Chebyshev distance to `other`: the minimum number of 8-directional
    /// unit-cost steps between the two cells on an empty grid
    pub fn chebyshev(&self, other: &GridPos) -> i64 {
        let dr = (self.row - other.row).abs() as i64;
        let dc = (self.col - other.col).abs() as i64;
        dr.max(dc)
    }

    /// True iff `other` is one of the 8 cells surrounding this one
    pub fn is_neighbor8(&self, other: &GridPos) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr <= 1 && dc <= 1 && (dr != 0 || dc != 0)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from(tuple: (i32, i32)) -> Self {
        Self { row: tuple.0, col: tuple.1 }
    }
}

/// Path represented as an ordered sequence of grid cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    pub cells: Vec<GridPos>,
}

impl GridPath {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn from_cells(cells: Vec<GridPos>) -> Self {
        Self { cells }
    }

    pub fn push(&mut self, cell: GridPos) {
        self.cells.push(cell);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves along the path (one less than the cell count)
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<GridPos> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<GridPos> {
        self.cells.last().copied()
    }

    /// True iff every consecutive pair of cells is 8-adjacent
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_neighbor8(&w[1]))
    }

    /// Row coordinates as f64, for plotting
    pub fn row_coords(&self) -> Vec<f64> {
        self.cells.iter().map(|p| p.row as f64).collect()
    }

    /// Column coordinates as f64, for plotting
    pub fn col_coords(&self) -> Vec<f64> {
        self.cells.iter().map(|p| p.col as f64).collect()
    }
}

impl Default for GridPath {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_sq() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);
        assert_eq!(a.distance_sq(&b), 25);
        assert_eq!(b.distance_sq(&a), 25);
        assert_eq!(a.distance_sq(&a), 0);
    }

    #[test]
    fn test_chebyshev() {
        let a = GridPos::new(1, 1);
        let b = GridPos::new(7, 4);
        assert_eq!(a.chebyshev(&b), 6);
        assert_eq!(a.chebyshev(&a), 0);
    }

    #[test]
    fn test_is_neighbor8() {
        let center = GridPos::new(2, 2);
        assert!(center.is_neighbor8(&GridPos::new(1, 1)));
        assert!(center.is_neighbor8(&GridPos::new(2, 3)));
        assert!(!center.is_neighbor8(&center));
        assert!(!center.is_neighbor8(&GridPos::new(0, 2)));
    }

    #[test]
    fn test_path_contiguity() {
        let path = GridPath::from_cells(vec![
            GridPos::new(0, 0),
            GridPos::new(1, 1),
            GridPos::new(1, 2),
        ]);
        assert!(path.is_contiguous());
        assert_eq!(path.steps(), 2);
        assert_eq!(path.start(), Some(GridPos::new(0, 0)));
        assert_eq!(path.goal(), Some(GridPos::new(1, 2)));

        let broken = GridPath::from_cells(vec![GridPos::new(0, 0), GridPos::new(2, 2)]);
        assert!(!broken.is_contiguous());
    }

    #[test]
    fn test_empty_path() {
        let path = GridPath::new();
        assert!(path.is_empty());
        assert_eq!(path.steps(), 0);
        assert!(path.is_contiguous());
        assert_eq!(path.start(), None);
    }
}
