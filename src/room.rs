use crate::{error::ConfigError, grid::GridConfig, passage_set::PassageSet, sampling::shuffle};

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use stats::OnlineStats;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RoomType {
    Safe,
    Combat,
    Loot,
    Shop,
    Boss,
    Forge,
}

pub const ALL_ROOM_TYPES: [RoomType; 6] = [
    RoomType::Safe,
    RoomType::Combat,
    RoomType::Loot,
    RoomType::Shop,
    RoomType::Boss,
    RoomType::Forge,
];

pub const START_CELL: usize = 0;

/// Handed out to mid-distance cells, in this order.
const SPECIAL_ROOMS: [RoomType; 3] = [RoomType::Shop, RoomType::Loot, RoomType::Forge];

impl RoomType {
    pub fn label(self) -> &'static str {
        match self {
            RoomType::Safe => "Safe",
            RoomType::Combat => "Combat",
            RoomType::Loot => "Loot",
            RoomType::Shop => "Shop",
            RoomType::Boss => "Boss",
            RoomType::Forge => "Forge",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RoomType::Safe => "Starting room",
            RoomType::Combat => "Enemy encounter",
            RoomType::Loot => "Treasure room",
            RoomType::Shop => "Buy items",
            RoomType::Boss => "Boss fight",
            RoomType::Forge => "Upgrade gear",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Passage-hop distance of every cell from the start cell.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    distances: Vec<Option<usize>>,
    farthest_cell: usize,
    max_distance: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub max: usize,
}

impl DistanceMap {
    /// `None` for cells the start cell cannot reach.
    pub fn get(&self, cell: usize) -> Option<usize> {
        self.distances.get(cell).cloned().flatten()
    }

    /// The first cell the traversal reached at the maximum distance.
    pub fn farthest_cell(&self) -> usize {
        self.farthest_cell
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Number of cells covered, reached or not.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    pub fn stats(&self) -> DistanceSummary {
        let stats: OnlineStats = self.distances.iter().filter_map(|d| *d).collect();

        DistanceSummary {
            mean: stats.mean(),
            std_dev: stats.stddev(),
            max: self.max_distance,
        }
    }
}

/// Breadth-first distances from `START_CELL` through open walls only.
///
/// Neighbors are expanded in the grid's fixed direction order, so when several cells share the
/// maximum distance, the farthest cell is whichever of them the traversal reaches first.
pub fn bfs_distances(
    config: &GridConfig,
    passages: &PassageSet,
) -> Result<DistanceMap, ConfigError> {
    config.validate()?;

    let mut distances = vec![None; config.total_cells()];
    let mut farthest_cell = START_CELL;
    let mut max_distance = 0;

    distances[START_CELL] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back((START_CELL, 0));
    while let Some((cell, dist)) = queue.pop_front() {
        for n in config.neighbors(cell) {
            if distances[n].is_some() || !passages.contains(cell, n) {
                continue;
            }
            let n_dist = dist + 1;
            distances[n] = Some(n_dist);
            queue.push_back((n, n_dist));
            if n_dist > max_distance {
                max_distance = n_dist;
                farthest_cell = n;
            }
        }
    }

    Ok(DistanceMap {
        distances,
        farthest_cell,
        max_distance,
    })
}

/// A room type for every cell of the grid.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoomAssignment {
    rooms: Vec<RoomType>,
    boss_cell: Option<usize>,
}

impl RoomAssignment {
    pub fn get(&self, cell: usize) -> Option<RoomType> {
        self.rooms.get(cell).cloned()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// `(cell, room type)` in ascending cell order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, RoomType)> + '_ {
        self.rooms.iter().cloned().enumerate()
    }

    pub fn as_slice(&self) -> &[RoomType] {
        &self.rooms
    }

    pub fn count(&self, room_type: RoomType) -> usize {
        self.rooms.iter().filter(|r| **r == room_type).count()
    }

    pub fn cells_of(&self, room_type: RoomType) -> Vec<usize> {
        self.iter()
            .filter(|(_, r)| *r == room_type)
            .map(|(c, _)| c)
            .collect()
    }

    pub fn start_cell(&self) -> usize {
        START_CELL
    }

    /// `None` only for a single-cell grid, where the start cell is also the farthest cell.
    pub fn boss_cell(&self) -> Option<usize> {
        self.boss_cell
    }
}

/// Labels every cell: the start cell is `Safe`, the farthest cell is `Boss`, and up to three cells
/// strictly between distance 1 and the boss distance become `Shop`, `Loot` and `Forge`. Everything
/// else is `Combat`.
///
/// On a single-cell grid the start cell is also the farthest cell; it stays `Safe` and there is no
/// `Boss`, rather than the boss label overwriting the start.
///
/// `passages` must connect the whole grid (any maze from `maze::generate` does). Cells that cannot
/// be reached are left as `Combat`.
pub fn assign<R: Rng + ?Sized>(
    config: &GridConfig,
    passages: &PassageSet,
    rng: &mut R,
) -> Result<RoomAssignment, ConfigError> {
    let distances = bfs_distances(config, passages)?;

    assign_with_distances(config, &distances, rng)
}

/// Like `assign`, reusing distances already computed by `bfs_distances` for the same `config`.
pub fn assign_with_distances<R: Rng + ?Sized>(
    config: &GridConfig,
    distances: &DistanceMap,
    rng: &mut R,
) -> Result<RoomAssignment, ConfigError> {
    config.validate()?;
    debug_assert_eq!(
        distances.len(),
        config.total_cells(),
        "distances were computed for a different grid"
    );

    let mut rooms = vec![RoomType::Combat; config.total_cells()];

    let farthest = distances.farthest_cell();
    let boss_cell = if farthest == START_CELL {
        None
    } else {
        rooms[farthest] = RoomType::Boss;
        Some(farthest)
    };
    rooms[START_CELL] = RoomType::Safe;

    let max_distance = distances.max_distance();
    let mut eligible: Vec<usize> = (0..rooms.len())
        .filter(|&c| c != START_CELL && Some(c) != boss_cell)
        .filter(|&c| {
            distances
                .get(c)
                .map_or(false, |d| 1 < d && d < max_distance)
        })
        .collect();
    shuffle(&mut eligible, rng);

    for (cell, room_type) in eligible.iter().zip(SPECIAL_ROOMS.iter()) {
        log::trace!("{} room at cell {}", room_type, cell);
        rooms[*cell] = *room_type;
    }

    Ok(RoomAssignment { rooms, boss_cell })
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
