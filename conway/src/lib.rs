//! Conway's Game of Life: grid engine, seed patterns and a tick loop.
//!
//! - [`grid`] - the N×N board, neighbor counting and the life rule.
//! - [`patterns`] - named seed patterns (Gosper glider gun and friends).
//! - [`simulation`] - the state object that owns the current grid.
//! - [`runner`] - async fixed-interval loop publishing grid snapshots.
//! - [`render`] - drawing-surface trait and the per-frame paint routine.
//! - [`config`] - default sizes, rates and their validation.
//! - [`error`] - grid edit and configuration errors.

pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod runner;
pub mod simulation;

pub use config::Config;
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use render::{Color, Renderer};
pub use runner::{Command, SimulationHandle};
pub use simulation::{Simulation, Snapshot};
