use crate::{
    error::{ConfigError, SpecError},
    graph::{is_perfect_maze, longest_path_in_tree, passage_graph},
    grid::GridConfig,
    level::LevelView,
    maze,
    passage_set::PassageSet,
    room::{self, DistanceMap, RoomAssignment, RoomType},
    sampling::{entropy_rng, seeded_rng},
};

use rand::{rngs::SmallRng, Rng};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

/// Everything needed to build a dungeon. Usually loaded from a RON file:
///
/// ```ron
/// (
///     grid: (rows: 4, cols: 4, levels: 3),
///     seed: Some(1234),
/// )
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DungeonSpec {
    pub grid: GridConfig,
    /// Without a seed every call to `generate` produces a different dungeon.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DungeonSpec {
    fn default() -> Self {
        DungeonSpec {
            grid: GridConfig {
                rows: 4,
                cols: 4,
                levels: 3,
            },
            seed: None,
        }
    }
}

impl DungeonSpec {
    pub fn from_ron_str(text: &str) -> Result<Self, SpecError> {
        Ok(ron::de::from_str(text)?)
    }

    pub fn to_ron_string(&self) -> Result<String, SpecError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Parses a spec and generates its dungeon in one go.
    pub fn load_and_generate(text: &str) -> Result<Dungeon, SpecError> {
        let spec = Self::from_ron_str(text)?;

        Ok(spec.generate()?)
    }

    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        }
    }

    pub fn generate(&self) -> Result<Dungeon, ConfigError> {
        self.generate_with_rng(&mut self.rng())
    }

    /// The same `rng` drives the maze shuffle and then the special room shuffle.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Dungeon, ConfigError> {
        log::debug!("Generating {} dungeon", self.grid);

        let passages = maze::generate(&self.grid, rng)?;
        log::debug!("Carved {} passages", passages.len());

        let distances = room::bfs_distances(&self.grid, &passages)?;
        log::debug!(
            "Boss at cell {}, {} steps from the start",
            distances.farthest_cell(),
            distances.max_distance()
        );
        log::debug!("Distance stats = {:?}", distances.stats());

        let rooms = room::assign_with_distances(&self.grid, &distances, rng)?;
        for special in [RoomType::Shop, RoomType::Loot, RoomType::Forge].iter() {
            log::debug!("{} rooms at {:?}", special, rooms.cells_of(*special));
        }

        Ok(Dungeon {
            config: self.grid,
            passages,
            rooms,
        })
    }
}

/// A generated dungeon: the maze and the room type of every cell.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Dungeon {
    pub config: GridConfig,
    pub passages: PassageSet,
    pub rooms: RoomAssignment,
}

impl Dungeon {
    pub fn distances(&self) -> Result<DistanceMap, ConfigError> {
        room::bfs_distances(&self.config, &self.passages)
    }

    pub fn is_perfect_maze(&self) -> bool {
        is_perfect_maze(&passage_graph(&self.config, &self.passages))
    }

    /// Cells along a longest path through the maze.
    pub fn diameter(&self) -> Vec<usize> {
        longest_path_in_tree(&passage_graph(&self.config, &self.passages))
    }

    pub fn level(&self, level: usize) -> Result<LevelView, ConfigError> {
        LevelView::new(&self.config, &self.passages, &self.rooms, level)
    }

    pub fn to_ron_string(&self) -> Result<String, SpecError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
