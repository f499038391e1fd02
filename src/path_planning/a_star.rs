//! A* path planning over a boolean obstacle grid
//!
//! Expands nodes in order of f = g + h, where g counts unit steps from the
//! start (diagonal moves cost the same as orthogonal ones) and h is the
//! squared Euclidean distance to the goal. The squared heuristic can
//! overestimate the true remaining cost, so paths are not guaranteed
//! optimal in the formal A* sense; the formula is kept as-is.
//!
//! The default configuration mirrors the classic textbook formulation: the
//! open list is an insertion-ordered vector scanned linearly for the
//! minimum f, and no record is kept of already-expanded cells, so the same
//! cell may be expanded repeatedly. On maps where the goal is unreachable,
//! that formulation only drains the open list when the start cell is fully
//! enclosed; enable [`AStarConfig::prune_revisits`] when no-path detection
//! must terminate on arbitrary maps.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::common::{GridPath, GridPlanner, GridPos, PlanningError, PlanningResult};
use crate::utils::ObstacleGrid;

/// Neighbor offsets for 8-connected expansion, in fixed scan order
const MOTIONS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Configuration for the A* planner
#[derive(Debug, Clone)]
pub struct AStarConfig {
    /// Track the best-known g-cost per cell and skip neighbors that cannot
    /// improve on it. Off by default: the classic formulation re-inserts
    /// neighbors unconditionally.
    pub prune_revisits: bool,
    /// Extract the open-list minimum through a binary heap instead of a
    /// linear scan. Selection order is identical: ties on f go to the
    /// earliest-inserted node.
    pub heap_open_list: bool,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            prune_revisits: false,
            heap_open_list: false,
        }
    }
}

/// One discovered cell during search.
///
/// Nodes live in an arena owned by a single `search` call; `parent` is an
/// arena index used for path reconstruction. Every node except the start
/// node has a parent.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub parent: Option<usize>,
    pub position: GridPos,
    pub g: i64,
    pub h: i64,
    pub f: i64,
}

impl SearchNode {
    /// Create a node with zeroed costs; the caller fills them in before
    /// the node enters the open list. The start node keeps g = h = f = 0.
    pub fn new(parent: Option<usize>, position: GridPos) -> Self {
        SearchNode {
            parent,
            position,
            g: 0,
            h: 0,
            f: 0,
        }
    }
}

/// Open-list entry for the heap variant
#[derive(Debug)]
struct OpenEntry {
    f: i64,
    index: usize,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.index == other.index
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; arena indices grow in
        // insertion order, so equal-f ties go to the earliest-inserted node
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* path planner over an [`ObstacleGrid`]
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner {
    config: AStarConfig,
}

impl AStarPlanner {
    pub fn new(config: AStarConfig) -> Self {
        AStarPlanner { config }
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Squared Euclidean distance used as the h-cost
    fn heuristic(a: GridPos, b: GridPos) -> i64 {
        a.distance_sq(&b)
    }

    /// Search for a path from `start` to `goal`.
    ///
    /// Returns `Ok(Some(path))` with the full cell sequence from start to
    /// goal inclusive, or `Ok(None)` when no path exists. Start and goal
    /// must lie within the grid and the start cell must be traversable;
    /// violations are reported as errors rather than searched from.
    pub fn search(
        &self,
        grid: &ObstacleGrid,
        start: GridPos,
        goal: GridPos,
    ) -> PlanningResult<Option<GridPath>> {
        Self::check_bounds(grid, start, "start")?;
        Self::check_bounds(grid, goal, "goal")?;
        if grid.is_obstacle(start.row, start.col) {
            return Err(PlanningError::BlockedCell(format!(
                "start ({}, {}) is an obstacle",
                start.row, start.col
            )));
        }
        if start == goal {
            return Ok(Some(GridPath::from_cells(vec![start])));
        }
        // A blocked goal is never dequeued, so no path to it can exist
        if grid.is_obstacle(goal.row, goal.col) {
            return Ok(None);
        }

        // Arena of all nodes created by this invocation; parent links are
        // arena indices, released together when the call returns
        let mut nodes: Vec<SearchNode> = vec![SearchNode::new(None, start)];

        let mut open: Vec<usize> = Vec::new();
        let mut heap: BinaryHeap<OpenEntry> = BinaryHeap::new();
        if self.config.heap_open_list {
            heap.push(OpenEntry { f: 0, index: 0 });
        } else {
            open.push(0);
        }

        let mut best_g: HashMap<GridPos, i64> = HashMap::new();
        if self.config.prune_revisits {
            best_g.insert(start, 0);
        }

        loop {
            let current = if self.config.heap_open_list {
                match heap.pop() {
                    Some(entry) => entry.index,
                    None => break,
                }
            } else {
                match Self::take_min(&mut open, &nodes) {
                    Some(index) => index,
                    None => break,
                }
            };

            if nodes[current].position == goal {
                return Ok(Some(Self::reconstruct(&nodes, current)));
            }

            let current_pos = nodes[current].position;
            let current_g = nodes[current].g;

            for &(d_row, d_col) in MOTIONS.iter() {
                let next = current_pos.offset(d_row, d_col);
                if !grid.is_valid(next.row, next.col) || grid.is_obstacle(next.row, next.col) {
                    continue;
                }

                let g = current_g + 1;
                if self.config.prune_revisits {
                    if let Some(&known) = best_g.get(&next) {
                        if known <= g {
                            continue;
                        }
                    }
                    best_g.insert(next, g);
                }

                let mut node = SearchNode::new(Some(current), next);
                node.g = g;
                node.h = Self::heuristic(next, goal);
                node.f = node.g + node.h;
                let f = node.f;

                nodes.push(node);
                let index = nodes.len() - 1;
                if self.config.heap_open_list {
                    heap.push(OpenEntry { f, index });
                } else {
                    open.push(index);
                }
            }
        }

        Ok(None)
    }

    fn check_bounds(grid: &ObstacleGrid, pos: GridPos, what: &str) -> PlanningResult<()> {
        if !grid.is_valid(pos.row, pos.col) {
            return Err(PlanningError::OutOfBounds(format!(
                "{} ({}, {}) outside {}x{} grid",
                what,
                pos.row,
                pos.col,
                grid.rows(),
                grid.cols()
            )));
        }
        Ok(())
    }

    /// Scan the open list for the minimum f; the strict comparison keeps
    /// the first minimum found, so ties go to the earliest-inserted node.
    /// The winner is removed with a stable shift.
    fn take_min(open: &mut Vec<usize>, nodes: &[SearchNode]) -> Option<usize> {
        if open.is_empty() {
            return None;
        }
        let mut min_at = 0;
        for i in 1..open.len() {
            if nodes[open[i]].f < nodes[open[min_at]].f {
                min_at = i;
            }
        }
        Some(open.remove(min_at))
    }

    /// Walk the parent chain from the goal node back to the start, then
    /// reverse into start-to-goal order
    fn reconstruct(nodes: &[SearchNode], goal_index: usize) -> GridPath {
        let mut cells = Vec::new();
        let mut current = Some(goal_index);
        while let Some(index) = current {
            cells.push(nodes[index].position);
            current = nodes[index].parent;
        }
        cells.reverse();
        GridPath::from_cells(cells)
    }
}

impl GridPlanner for AStarPlanner {
    fn plan(
        &self,
        grid: &ObstacleGrid,
        start: GridPos,
        goal: GridPos,
    ) -> PlanningResult<Option<GridPath>> {
        self.search(grid, start, goal)
    }
}
