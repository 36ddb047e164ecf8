use std::fmt;
use thiserror::Error;

/// One of the three axes of a `GridConfig`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dimension {
    Rows,
    Cols,
    Levels,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Rows => "rows",
            Dimension::Cols => "cols",
            Dimension::Levels => "levels",
        };
        f.write_str(name)
    }
}

/// Rejections of a grid configuration. Raised before any generation work starts.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{dimension} must be >= 1 (got {value})")]
    DimensionTooSmall { dimension: Dimension, value: f64 },

    #[error("{dimension} must be an integer (got {value})")]
    NonIntegralDimension { dimension: Dimension, value: f64 },

    #[error("{dimension} is too large (got {value})")]
    DimensionTooLarge { dimension: Dimension, value: f64 },

    #[error("grid of {rows} x {cols} x {levels} cells is too large to index")]
    TooManyCells {
        rows: usize,
        cols: usize,
        levels: usize,
    },

    #[error("level {level} is out of range for a grid with {levels} levels")]
    LevelOutOfRange { level: usize, levels: usize },
}

/// Failures while loading or running a `DungeonSpec`.
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
