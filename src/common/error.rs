//! Error types for grid_astar

use std::fmt;

/// Main error type for planning operations
#[derive(Debug)]
pub enum PlanningError {
    /// Start or goal lies outside the grid
    OutOfBounds(String),
    /// Start placed on a blocked cell
    BlockedCell(String),
    /// Invalid parameter (grid construction, input parsing)
    InvalidParameter(String),
    /// I/O error
    IoError(std::io::Error),
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
            PlanningError::BlockedCell(msg) => write!(f, "Blocked cell: {}", msg),
            PlanningError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PlanningError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PlanningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanningError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlanningError {
    fn from(e: std::io::Error) -> Self {
        PlanningError::IoError(e)
    }
}

/// Result type alias for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlanningError::OutOfBounds("start (9, 9) outside 5x5 grid".to_string());
        assert_eq!(format!("{}", err), "Out of bounds: start (9, 9) outside 5x5 grid");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "stdin closed");
        let err: PlanningError = io_err.into();
        assert!(matches!(err, PlanningError::IoError(_)));
    }
}
