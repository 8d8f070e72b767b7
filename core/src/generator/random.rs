use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Deals `pair_count` distinct random colors, each on exactly two cells, in a uniformly shuffled order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &GameConfig, canvas: Canvas) -> Result<Board> {
        use rand::prelude::*;

        let pair_count = usize::from(config.pair_count());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut drawn = BTreeSet::new();
        let mut colors = Vec::with_capacity(pair_count * 2);
        while drawn.len() < pair_count {
            let color = Rgb::new(rng.random(), rng.random(), rng.random());
            if !drawn.insert(color) {
                log::debug!("color {} drawn twice, drawing again", color);
                continue;
            }
            colors.push(color);
            colors.push(color);
        }
        colors.shuffle(&mut rng);

        Board::from_colors(config.size, canvas, &colors)
            .inspect_err(|err| log::warn!("cannot deal a {:?} board: {}", config.size, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use chrono::TimeDelta;

    fn color_counts(board: &Board) -> BTreeMap<Rgb, usize> {
        let mut counts = BTreeMap::new();
        for (_, cell) in board.iter() {
            *counts.entry(cell.color).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn every_color_appears_exactly_twice() {
        let config = GameConfig::default();

        for seed in 0..64 {
            let board = RandomBoardGenerator::new(seed).generate(&config, Canvas::default()).unwrap();
            let counts = color_counts(&board);

            assert_eq!(counts.len(), 6, "seed {}", seed);
            assert!(counts.values().all(|&n| n == 2), "seed {}", seed);
        }
    }

    #[test]
    fn cells_tile_the_canvas_without_gaps() {
        let config = GameConfig::default();
        let canvas = Canvas::default();
        let board = RandomBoardGenerator::new(7).generate(&config, canvas).unwrap();

        assert_eq!(board.size(), (3, 4));
        assert_eq!(board.total_cells(), 12);

        let area: f64 = board.iter().map(|(_, cell)| cell.rect.area()).sum();
        assert_eq!(area, canvas.rect().area());

        for ((x, y), cell) in board.iter() {
            assert_eq!(cell.rect.x, f64::from(x) * 200.);
            assert_eq!(cell.rect.y, f64::from(y) * 100.);
            assert_eq!((cell.rect.w, cell.rect.h), (200., 100.));
            assert_eq!(board.hit_test(cell.rect.center()), Some((x, y)));
        }
    }

    #[test]
    fn fresh_cells_are_active_and_face_down() {
        let board = RandomBoardGenerator::new(3).generate(&GameConfig::default(), Canvas::default()).unwrap();

        assert!(board.iter().all(|(_, cell)| cell.active && !cell.revealed));
    }

    #[test]
    fn same_seed_deals_same_board() {
        let config = GameConfig::default();
        let a = RandomBoardGenerator::new(42).generate(&config, Canvas::default()).unwrap();
        let b = RandomBoardGenerator::new(42).generate(&config, Canvas::default()).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn odd_cell_count_is_an_error() {
        let config = GameConfig::new_unchecked((3, 3), TimeDelta::seconds(10), ComparePolicy::Pair);

        let result = RandomBoardGenerator::new(1).generate(&config, Canvas::default());

        assert_eq!(result, Err(GameError::OddCellCount));
    }
}
