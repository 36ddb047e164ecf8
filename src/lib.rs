//! Procedural multi-level maze dungeons.
//!
//! A `rows x cols x levels` lattice of cells is carved into a perfect maze with randomized
//! Kruskal's algorithm, then every cell is labeled with a `RoomType` according to its distance
//! from the start cell.

pub mod error;
pub mod graph;
pub mod grid;
pub mod level;
pub mod map_types;
pub mod maze;
pub mod passage_set;
pub mod room;
pub mod sampling;
pub mod union_find;

pub use error::{ConfigError, Dimension, SpecError};
pub use grid::{wall_key, CellCoord, Direction, GridConfig, GridDimensions, WallKey};
pub use map_types::dungeon::{Dungeon, DungeonSpec};
pub use passage_set::PassageSet;
pub use room::{RoomAssignment, RoomType};
