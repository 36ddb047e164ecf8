//! Index arithmetic for a `rows x cols x levels` lattice of cells.
//!
//! A cell is a single `usize` with `index = level * rows * cols + row * cols + col`. Walls are
//! unordered pairs of adjacent cells, identified by a canonical `WallKey`.

use crate::error::{ConfigError, Dimension};

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Dimensions of the dungeon lattice. Every dimension must be at least 1.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "GridDimensions")]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub levels: usize,
}

/// Unvalidated dimensions, as they arrive from a config file or a slider.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct GridDimensions {
    pub rows: f64,
    pub cols: f64,
    pub levels: f64,
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize, levels: usize) -> Result<Self, ConfigError> {
        let config = GridConfig { rows, cols, levels };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (dimension, value) in self.dimensions().iter() {
            if *value < 1 {
                return Err(ConfigError::DimensionTooSmall {
                    dimension: *dimension,
                    value: *value as f64,
                });
            }
        }
        self.checked_total_cells()
            .map(|_| ())
            .ok_or(ConfigError::TooManyCells {
                rows: self.rows,
                cols: self.cols,
                levels: self.levels,
            })
    }

    fn dimensions(&self) -> [(Dimension, usize); 3] {
        [
            (Dimension::Rows, self.rows),
            (Dimension::Cols, self.cols),
            (Dimension::Levels, self.levels),
        ]
    }

    fn checked_total_cells(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.cols)
            .and_then(|n| n.checked_mul(self.levels))
    }

    pub fn cells_per_level(&self) -> usize {
        self.rows * self.cols
    }

    pub fn total_cells(&self) -> usize {
        self.cells_per_level() * self.levels
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.level < self.levels && coord.row < self.rows && coord.col < self.cols
    }

    pub fn cell_index(&self, level: usize, row: usize, col: usize) -> usize {
        debug_assert!(self.contains(CellCoord { level, row, col }));

        level * self.cells_per_level() + row * self.cols + col
    }

    pub fn decode(&self, index: usize) -> CellCoord {
        debug_assert!(index < self.total_cells());

        let per_level = self.cells_per_level();
        let local = index % per_level;

        CellCoord {
            level: index / per_level,
            row: local / self.cols,
            col: local % self.cols,
        }
    }

    /// The cell one step from `index` in `direction`, if it stays inside the grid.
    pub fn step(&self, index: usize, direction: Direction) -> Option<usize> {
        let CellCoord { level, row, col } = self.decode(index);
        let (level, row, col) = match direction {
            Direction::North if row > 0 => (level, row - 1, col),
            Direction::South if row + 1 < self.rows => (level, row + 1, col),
            Direction::West if col > 0 => (level, row, col - 1),
            Direction::East if col + 1 < self.cols => (level, row, col + 1),
            Direction::Down if level > 0 => (level - 1, row, col),
            Direction::Up if level + 1 < self.levels => (level + 1, row, col),
            _ => return None,
        };

        Some(self.cell_index(level, row, col))
    }

    /// Adjacent cells in the order North, South, West, East, Down, Up. BFS visitation order (and
    /// therefore which cell becomes the boss room) depends on this order.
    pub fn neighbors(&self, index: usize) -> Neighbors {
        Neighbors {
            config: *self,
            index,
            directions: ALL_DIRECTIONS.iter(),
        }
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.rows, self.cols, self.levels)
    }
}

impl TryFrom<GridDimensions> for GridConfig {
    type Error = ConfigError;

    fn try_from(dims: GridDimensions) -> Result<Self, Self::Error> {
        let rows = integral_dimension(Dimension::Rows, dims.rows)?;
        let cols = integral_dimension(Dimension::Cols, dims.cols)?;
        let levels = integral_dimension(Dimension::Levels, dims.levels)?;

        GridConfig::new(rows, cols, levels)
    }
}

impl From<GridConfig> for GridDimensions {
    fn from(config: GridConfig) -> Self {
        GridDimensions {
            rows: config.rows as f64,
            cols: config.cols as f64,
            levels: config.levels as f64,
        }
    }
}

fn integral_dimension(dimension: Dimension, value: f64) -> Result<usize, ConfigError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ConfigError::NonIntegralDimension { dimension, value });
    }
    if value < 1.0 {
        return Err(ConfigError::DimensionTooSmall { dimension, value });
    }
    if value >= usize::MAX as f64 {
        return Err(ConfigError::DimensionTooLarge { dimension, value });
    }

    Ok(value as usize)
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CellCoord {
    pub level: usize,
    pub row: usize,
    pub col: usize,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    South,
    West,
    East,
    Down,
    Up,
}

/// Neighbor enumeration order.
pub static ALL_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
    Direction::Down,
    Direction::Up,
];

pub struct Neighbors {
    config: GridConfig,
    index: usize,
    directions: std::slice::Iter<'static, Direction>,
}

impl Iterator for Neighbors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        for d in &mut self.directions {
            if let Some(n) = self.config.step(self.index, *d) {
                return Some(n);
            }
        }

        None
    }
}

/// An unordered pair of adjacent cells, stored with the smaller index first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct WallKey(usize, usize);

impl WallKey {
    pub fn lo(&self) -> usize {
        self.0
    }

    pub fn hi(&self) -> usize {
        self.1
    }

    pub fn cells(&self) -> (usize, usize) {
        (self.0, self.1)
    }
}

impl fmt::Display for WallKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

pub fn wall_key(a: usize, b: usize) -> WallKey {
    if a > b {
        WallKey(b, a)
    } else {
        WallKey(a, b)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
