use std::io::{self, Write};

use grid_astar::utils::GridVisualizer;
use grid_astar::{AStarPlanner, GridPos, ObstacleGrid, PlanningError, PlanningResult};

// Demo parameters
const SHOW_ANIMATION: bool = true;

// Example maze: 1 = obstacle
const MAZE: [[u8; 5]; 5] = [
    [0, 0, 0, 0, 1],
    [0, 1, 1, 0, 0],
    [0, 0, 1, 0, 1],
    [0, 1, 0, 0, 1],
    [0, 0, 0, 0, 0],
];

fn read_position(prompt: &str) -> PlanningResult<GridPos> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let mut parts = line.split_whitespace();
    let row = parse_coordinate(parts.next(), &line)?;
    let col = parse_coordinate(parts.next(), &line)?;
    Ok(GridPos::new(row, col))
}

fn parse_coordinate(part: Option<&str>, line: &str) -> PlanningResult<i32> {
    part.ok_or_else(|| {
        PlanningError::InvalidParameter(format!(
            "expected two integers \"row col\", got {:?}",
            line.trim()
        ))
    })?
    .parse::<i32>()
    .map_err(|_| {
        PlanningError::InvalidParameter(format!(
            "expected two integers \"row col\", got {:?}",
            line.trim()
        ))
    })
}

fn run() -> PlanningResult<()> {
    println!("A* path planning start!!");

    let grid = ObstacleGrid::from_fn(5, 5, |r, c| MAZE[r][c] == 1)?;

    let start = read_position("Enter the start position (row, column): ")?;
    let goal = read_position("Enter the end position (row, column): ")?;

    let planner = AStarPlanner::default();
    let path = planner.search(&grid, start, goal)?;

    match &path {
        Some(path) => {
            println!("Path:");
            for cell in &path.cells {
                println!("({}, {})", cell.row, cell.col);
            }
        }
        None => println!("No path found."),
    }

    if SHOW_ANIMATION {
        let mut vis = GridVisualizer::new(&grid);
        vis.set_title("A* Path Planning");
        vis.plot_obstacles(&grid);
        if let Some(path) = &path {
            vis.plot_path(path);
        }
        vis.plot_start(start);
        vis.plot_goal(goal);

        let img_path = "a_star_result.png";
        if let Err(e) = vis.save_png(img_path, 800, 600) {
            eprintln!("Failed to save image: {}", e);
        } else {
            println!("Plot saved to: {}", img_path);
        }
    }

    println!("A* path planning finish!!");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
