//! What a consumer needs to draw one level of a dungeon: which walls stand and where the stairs
//! are. Nothing here knows about pixels.

use crate::{
    error::ConfigError,
    grid::{Direction, GridConfig},
    passage_set::PassageSet,
    room::{RoomAssignment, RoomType},
};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LevelCell {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub room_type: RoomType,
    /// A wall stands between this cell and the one to the south. False on the last row.
    pub wall_south: bool,
    /// A wall stands between this cell and the one to the east. False on the last column.
    pub wall_east: bool,
    pub stair_up: bool,
    pub stair_down: bool,
}

impl LevelCell {
    pub fn has_stairs(&self) -> bool {
        self.stair_up || self.stair_down
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LevelView {
    pub level: usize,
    pub rows: usize,
    pub cols: usize,
    /// Row-major.
    pub cells: Vec<LevelCell>,
}

impl LevelView {
    pub fn new(
        config: &GridConfig,
        passages: &PassageSet,
        rooms: &RoomAssignment,
        level: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if level >= config.levels {
            return Err(ConfigError::LevelOutOfRange {
                level,
                levels: config.levels,
            });
        }

        let is_open = |cell: usize, direction: Direction| {
            config
                .step(cell, direction)
                .map_or(false, |n| passages.contains(cell, n))
        };
        let is_walled = |cell: usize, direction: Direction| {
            config
                .step(cell, direction)
                .map_or(false, |n| !passages.contains(cell, n))
        };

        let mut cells = Vec::with_capacity(config.cells_per_level());
        for row in 0..config.rows {
            for col in 0..config.cols {
                let index = config.cell_index(level, row, col);
                cells.push(LevelCell {
                    index,
                    row,
                    col,
                    room_type: rooms.get(index).unwrap_or(RoomType::Combat),
                    wall_south: is_walled(index, Direction::South),
                    wall_east: is_walled(index, Direction::East),
                    stair_up: is_open(index, Direction::Up),
                    stair_down: is_open(index, Direction::Down),
                });
            }
        }

        Ok(LevelView {
            level,
            rows: config.rows,
            cols: config.cols,
            cells,
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&LevelCell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn stairs(&self) -> impl Iterator<Item = &LevelCell> {
        self.cells.iter().filter(|c| c.has_stairs())
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::generate, room::assign, sampling::seeded_rng};

    #[test]
    fn test_walls_and_stairs_follow_passages() {
        // Level 0 is a U-bend 0 - 2 - 3 - 1, a stair joins 1 and 5, and on level 1 cells 6 and 7
        // hang below 4 - 5.
        let config = GridConfig::new(2, 2, 2).unwrap();
        let passages: PassageSet = vec![(0, 2), (2, 3), (1, 5), (4, 5), (4, 6), (5, 7), (3, 1)]
            .into_iter()
            .collect();
        let rooms = assign(&config, &passages, &mut seeded_rng(0)).unwrap();

        let ground = LevelView::new(&config, &passages, &rooms, 0).unwrap();
        let c0 = ground.cell(0, 0).unwrap();
        assert!(!c0.wall_south);
        assert!(c0.wall_east);
        assert_eq!(c0.room_type, RoomType::Safe);
        let c1 = ground.cell(0, 1).unwrap();
        assert!(c1.stair_up && !c1.stair_down);
        assert!(!c1.wall_east);
        assert_eq!(ground.stairs().map(|c| c.index).collect::<Vec<_>>(), vec![1]);

        let upper = LevelView::new(&config, &passages, &rooms, 1).unwrap();
        let c5 = upper.cell(0, 1).unwrap();
        assert_eq!(c5.index, 5);
        assert!(c5.stair_down && !c5.stair_up);
        let c6 = upper.cell(1, 0).unwrap();
        assert!(!c6.wall_south);
        assert!(c6.wall_east);
    }

    #[test]
    fn test_rejects_missing_level() {
        let config = GridConfig::new(3, 3, 2).unwrap();
        let mut rng = seeded_rng(1);
        let passages = generate(&config, &mut rng).unwrap();
        let rooms = assign(&config, &passages, &mut rng).unwrap();

        assert_eq!(
            LevelView::new(&config, &passages, &rooms, 2),
            Err(ConfigError::LevelOutOfRange {
                level: 2,
                levels: 2
            })
        );
        assert_eq!(
            LevelView::new(&config, &passages, &rooms, 1)
                .unwrap()
                .cells
                .len(),
            9
        );
    }

    #[test]
    fn test_rejects_invalid_grid() {
        let config = GridConfig::new(2, 2, 1).unwrap();
        let passages: PassageSet = vec![(0, 1), (1, 3), (3, 2)].into_iter().collect();
        let rooms = assign(&config, &passages, &mut seeded_rng(0)).unwrap();
        let broken = GridConfig { cols: 0, ..config };

        assert!(matches!(
            LevelView::new(&broken, &passages, &rooms, 0),
            Err(ConfigError::DimensionTooSmall { .. })
        ));
    }
}
