// error.rs - Error types for grid edits and configuration

use thiserror::Error;

/// Failures when building or editing a [`crate::grid::Grid`].
///
/// Reads never fail: a coordinate outside the grid is simply dead.
/// Writes outside the grid are rejected with [`GridError::OutOfBounds`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("a {0}x{0} grid has more cells than can be addressed")]
    TooLarge(usize),
    #[error("cell ({x}, {y}) lies outside a {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("no pattern named {0:?}")]
    UnknownPattern(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroSize,
    #[error("a {0}x{0} grid has more cells than can be addressed")]
    TooLarge(usize),
    #[error("display scale must be a positive finite number, got {0}")]
    InvalidScale(f32),
    #[error("tick interval must be longer than zero")]
    ZeroInterval,
}
