//! Randomized Kruskal's algorithm over the grid adjacency graph.

use crate::{
    error::ConfigError, grid::GridConfig, passage_set::PassageSet, sampling::shuffle,
    union_find::DisjointSet,
};

use rand::Rng;

/// Every pair of adjacent cells exactly once, as `(cell, south | east | up neighbor)`.
pub fn candidate_walls(config: &GridConfig) -> Vec<(usize, usize)> {
    let mut walls = Vec::with_capacity(3 * config.total_cells());
    for level in 0..config.levels {
        for row in 0..config.rows {
            for col in 0..config.cols {
                let cell = config.cell_index(level, row, col);
                if row + 1 < config.rows {
                    walls.push((cell, config.cell_index(level, row + 1, col)));
                }
                if col + 1 < config.cols {
                    walls.push((cell, config.cell_index(level, row, col + 1)));
                }
                if level + 1 < config.levels {
                    walls.push((cell, config.cell_index(level + 1, row, col)));
                }
            }
        }
    }

    walls
}

/// Carves a perfect maze: the returned passages form a spanning tree of the grid, so there is
/// exactly one path between any two cells.
pub fn generate<R: Rng + ?Sized>(
    config: &GridConfig,
    rng: &mut R,
) -> Result<PassageSet, ConfigError> {
    config.validate()?;

    let num_cells = config.total_cells();
    let mut walls = candidate_walls(config);
    shuffle(&mut walls, rng);
    log::trace!("Shuffled {} candidate walls", walls.len());

    let mut forest = DisjointSet::new(num_cells);
    let mut passages = PassageSet::with_capacity(num_cells - 1);
    for (a, b) in walls.into_iter() {
        // Removing a wall between two cells that are already connected would close a cycle.
        if forest.union(a, b) {
            passages.insert(a, b);
        }
    }
    debug_assert_eq!(forest.set_count(), 1);
    debug_assert_eq!(passages.len(), num_cells - 1);

    Ok(passages)
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
    use crate::{grid::Direction, sampling::seeded_rng};

    use fnv::FnvHashSet;
    use std::collections::VecDeque;

    const CONFIGS: [(usize, usize, usize); 5] =
        [(1, 1, 1), (2, 2, 1), (4, 4, 1), (3, 3, 2), (4, 4, 3)];

    fn reachable_from_start(config: &GridConfig, passages: &PassageSet) -> usize {
        let mut seen = vec![false; config.total_cells()];
        seen[0] = true;
        let mut queue = VecDeque::from(vec![0]);
        let mut count = 1;
        while let Some(cell) = queue.pop_front() {
            for n in config.neighbors(cell) {
                if !seen[n] && passages.contains(cell, n) {
                    seen[n] = true;
                    count += 1;
                    queue.push_back(n);
                }
            }
        }

        count
    }

    #[test]
    fn test_candidate_walls_are_unique_adjacent_pairs() {
        let config = GridConfig::new(3, 4, 2).unwrap();
        let walls = candidate_walls(&config);
        // (rows-1)*cols*levels + rows*(cols-1)*levels + rows*cols*(levels-1)
        assert_eq!(walls.len(), 2 * 4 * 2 + 3 * 3 * 2 + 3 * 4);

        let mut seen = FnvHashSet::default();
        for (a, b) in walls.iter() {
            assert_ne!(a, b);
            assert!(config.neighbors(*a).any(|n| n == *b));
            assert!(seen.insert(crate::grid::wall_key(*a, *b)));
        }
    }

    #[test]
    fn test_spanning_tree_size_and_connectivity() {
        let mut rng = seeded_rng(1);
        for &(rows, cols, levels) in CONFIGS.iter() {
            let config = GridConfig::new(rows, cols, levels).unwrap();
            let passages = generate(&config, &mut rng).unwrap();

            assert_eq!(passages.len(), config.total_cells() - 1, "{}", config);
            assert_eq!(reachable_from_start(&config, &passages), config.total_cells());
            for key in passages.iter() {
                assert!(key.lo() < key.hi());
            }
        }
    }

    #[test]
    fn test_two_level_maze_has_stairs() {
        let config = GridConfig::new(3, 3, 2).unwrap();
        let passages = generate(&config, &mut seeded_rng(99)).unwrap();

        assert_eq!(passages.len(), 17);
        let stairs = (0..config.cells_per_level())
            .filter(|&c| {
                config
                    .step(c, Direction::Up)
                    .map_or(false, |up| passages.contains(c, up))
            })
            .count();
        assert!(stairs >= 1);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let config = GridConfig::new(5, 5, 2).unwrap();
        let a = generate(&config, &mut seeded_rng(1234)).unwrap();
        let b = generate(&config, &mut seeded_rng(1234)).unwrap();

        assert_eq!(a.sorted_keys(), b.sorted_keys());
    }

    #[test]
    fn test_entropy_gives_variety() {
        let config = GridConfig::new(6, 6, 1).unwrap();
        let mut rng = rand::thread_rng();
        let distinct: FnvHashSet<_> = (0..10)
            .map(|_| generate(&config, &mut rng).unwrap().sorted_keys())
            .collect();

        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_invalid_config_fails_before_generating() {
        let config = GridConfig {
            rows: 3,
            cols: 0,
            levels: 1,
        };

        assert!(matches!(
            generate(&config, &mut seeded_rng(0)),
            Err(ConfigError::DimensionTooSmall { .. })
        ));
    }
}
