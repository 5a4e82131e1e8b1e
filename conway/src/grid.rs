// grid.rs - Square boolean grid and the life rule

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::error::GridError;
use crate::patterns::Pattern;

// Relative positions of the 8 surrounding cells, centre excluded
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// An N×N board of cell states addressed by `(x, y)`.
///
/// Cells outside `[0, N)` are never alive. A grid is replaced wholesale
/// by [`Grid::step`]; nothing edits one while a generation is computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,   // row-major, index = y * size + x
}

impl Grid {
    /// All-dead grid of `size` cells per side.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let len = size.checked_mul(size).ok_or(GridError::TooLarge(size))?;
        Ok(Self { size, cells: vec![false; len] })
    }

    /// Grid where every cell is alive with probability `population`.
    ///
    /// One uniform draw in `[0, 1)` per cell; the cell lives when the draw
    /// is below `population`. So `0.0` gives an empty board and anything
    /// `>= 1.0` a full one. Values outside `[0, 1]` are not rejected.
    pub fn random<R: Rng + ?Sized>(size: usize, population: f64, rng: &mut R) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        for cell in grid.cells.iter_mut() {
            *cell = rng.random::<f64>() < population;
        }
        Ok(grid)
    }

    /// All-dead grid with `pattern` stamped at `(offset + dx, offset + dy)`.
    ///
    /// Placement is checked before anything is written: if any cell would
    /// land outside the grid the call fails with [`GridError::OutOfBounds`].
    pub fn with_pattern(size: usize, pattern: &Pattern, offset: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        grid.stamp(pattern, offset)?;
        Ok(grid)
    }

    /// Sets every cell of `pattern` alive at `offset`, or nothing at all.
    pub fn stamp(&mut self, pattern: &Pattern, offset: usize) -> Result<(), GridError> {
        let mut targets = Vec::with_capacity(pattern.cells.len());
        for &(dx, dy) in pattern.cells {
            // Saturated sums are always off the board
            let x = offset.saturating_add(dx);
            let y = offset.saturating_add(dy);
            if !self.contains(x, y) {
                return Err(GridError::OutOfBounds { x, y, size: self.size });
            }
            targets.push(self.index(x, y));
        }
        for i in targets {
            self.cells[i] = true;
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// State of `(x, y)`; positions off the board read as dead.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.contains(x, y) && self.cells[self.index(x, y)]
    }

    /// Writes one cell. Rejects positions off the board.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        if !self.contains(x, y) {
            return Err(GridError::OutOfBounds { x, y, size: self.size });
        }
        let i = self.index(x, y);
        self.cells[i] = alive;
        Ok(())
    }

    /// Number of live cells among the 8 around `(x, y)`, in `0..=8`.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for &(dx, dy) in &NEIGHBORS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            if self.is_alive(nx, ny) {
                count += 1;
            }
        }
        count
    }

    /// Next generation, computed entirely from `self`.
    pub fn step(&self) -> Grid {
        let mut cells = vec![false; self.cells.len()];
        for y in 0..self.size {
            for x in 0..self.size {
                let alive = self.cells[self.index(x, y)];
                cells[self.index(x, y)] = match (alive, self.live_neighbors(x, y)) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
            }
        }
        Grid { size: self.size, cells }
    }

    /// Count of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells as `(x, y)`, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| (i % self.size, i / self.size))
    }

    /// Hash of the cell states, used to spot repeating generations.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.size.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }
}
