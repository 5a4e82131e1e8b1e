// patterns.rs - Named seed patterns as relative (x, y) offsets

use crate::error::GridError;

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Width and height of the smallest box holding every cell.
    pub fn extent(&self) -> (usize, usize) {
        let w = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (w, h)
    }
}

/// Gosper glider gun, the default "generate" pattern.
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (1, 5), (1, 6), (2, 5), (2, 6), (11, 5),
        (11, 6), (11, 7), (12, 4), (12, 8), (13, 3),
        (13, 9), (14, 3), (14, 9), (15, 6), (16, 4),
        (16, 8), (17, 5), (17, 6), (17, 7), (18, 6),
        (21, 3), (21, 4), (21, 5), (22, 3), (22, 4),
        (22, 5), (23, 2), (23, 6), (25, 1), (25, 2),
        (25, 6), (25, 7), (35, 3), (35, 4), (36, 3), (36, 4),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    GOSPER_GLIDER_GUN,
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (2, 1), (2, 0), (1, 2), (0, 2)],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Result<&'static Pattern, GridError> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| GridError::UnknownPattern(name.to_string()))
}
