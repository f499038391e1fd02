//! Visualization utilities for grid_astar
//!
//! Provides a small gnuplot wrapper for rendering a grid search result:
//! obstacle cells, start and goal markers, and the planned path. Columns
//! map to the X axis and rows to the Y axis, with the Y axis flipped so
//! row 0 renders at the top, matching the textual grid layout.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{GridPath, GridPos};
use crate::utils::ObstacleGrid;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";

    // Semantic colors
    pub const OBSTACLE: &str = BLACK;
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const PATH: &str = RED;
}

/// Renders one grid search result to a gnuplot figure
pub struct GridVisualizer {
    figure: Figure,
    title: String,
    rows: i32,
    cols: i32,
}

impl GridVisualizer {
    /// Create a visualizer sized to `grid`
    pub fn new(grid: &ObstacleGrid) -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Plot the blocked cells of `grid`
    pub fn plot_obstacles(&mut self, grid: &ObstacleGrid) -> &mut Self {
        let cells = grid.obstacle_cells();
        let x: Vec<f64> = cells.iter().map(|p| p.col as f64).collect();
        let y: Vec<f64> = cells.iter().map(|p| p.row as f64).collect();

        self.figure.axes2d().points(
            &x,
            &y,
            &[
                Caption("Obstacles"),
                Color(colors::OBSTACLE),
                PointSymbol('S'),
                PointSize(2.0),
            ],
        );
        self
    }

    /// Plot a path as a polyline over the grid
    pub fn plot_path(&mut self, path: &GridPath) -> &mut Self {
        self.figure.axes2d().lines(
            &path.col_coords(),
            &path.row_coords(),
            &[Caption("Path"), Color(colors::PATH), LineWidth(2.0)],
        );
        self
    }

    /// Plot the start marker
    pub fn plot_start(&mut self, pos: GridPos) -> &mut Self {
        self.plot_cell(pos, colors::START, "Start")
    }

    /// Plot the goal marker
    pub fn plot_goal(&mut self, pos: GridPos) -> &mut Self {
        self.plot_cell(pos, colors::GOAL, "Goal")
    }

    fn plot_cell(&mut self, pos: GridPos, color: &str, caption: &str) -> &mut Self {
        self.figure.axes2d().points(
            &[pos.col as f64],
            &[pos.row as f64],
            &[
                Caption(caption),
                Color(color),
                PointSymbol('O'),
                PointSize(1.5),
            ],
        );
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> Result<(), String> {
        self.apply_settings();
        self.figure.show().map_err(|e| e.to_string()).map(|_| ())
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> Result<(), String> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| e.to_string())
    }

    fn apply_settings(&mut self) {
        let rows = self.rows;
        let cols = self.cols;
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label("Column", &[]);
        axes.set_y_label("Row", &[]);
        axes.set_x_range(AutoOption::Fix(-1.0), AutoOption::Fix(cols as f64));
        // Flipped so row 0 is at the top
        axes.set_y_range(AutoOption::Fix(rows as f64), AutoOption::Fix(-1.0));
        axes.set_aspect_ratio(AutoOption::Fix(1.0));
    }
}
