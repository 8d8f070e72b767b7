#![no_std]

extern crate alloc;

use chrono::TimeDelta;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use clock::*;
pub use color::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use scene::*;
pub use tile::*;
pub use types::*;

mod clock;
mod color;
mod engine;
mod error;
mod generator;
mod scene;
mod tile;
mod types;

/// When the selection buffer is resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparePolicy {
    /// Compare the first two picks once a third cell has been clicked.
    #[default]
    ThirdClick,
    /// Compare as soon as two cells are face up.
    Pair,
}

impl ComparePolicy {
    /// Buffer length at which a comparison happens.
    pub const fn threshold(self) -> usize {
        match self {
            Self::ThirdClick => 3,
            Self::Pair => 2,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub size: Coord2,
    pub duration: TimeDelta,
    pub compare: ComparePolicy,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (3, 4);
    pub const DEFAULT_DURATION_SECS: i64 = 2 * 60;

    pub const fn new_unchecked(size: Coord2, duration: TimeDelta, compare: ComparePolicy) -> Self {
        Self {
            size,
            duration,
            compare,
        }
    }

    pub fn new(size: Coord2, duration: TimeDelta, compare: ComparePolicy) -> Result<Self> {
        validate_size(size)?;
        if duration <= TimeDelta::zero() {
            return Err(GameError::InvalidDuration);
        }
        Ok(Self::new_unchecked(size, duration, compare))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_SIZE,
            TimeDelta::seconds(Self::DEFAULT_DURATION_SECS),
            ComparePolicy::default(),
        )
    }
}

fn validate_size((columns, rows): Coord2) -> Result<()> {
    if columns == 0 || rows == 0 {
        return Err(GameError::InvalidSize);
    }
    if mult(columns, rows) % 2 != 0 {
        return Err(GameError::OddCellCount);
    }
    Ok(())
}

/// The grid of cells, indexed by `(column, row)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Lays `colors` out over `canvas`, column by column, top to bottom.
    pub fn from_colors(size: Coord2, canvas: Canvas, colors: &[Rgb]) -> Result<Self> {
        validate_size(size)?;
        let (columns, rows) = size;
        if colors.len() != usize::from(mult(columns, rows)) {
            return Err(GameError::ColorCountMismatch);
        }

        let cell_w = canvas.width / f64::from(columns);
        let cell_h = canvas.height / f64::from(rows);
        let rows = usize::from(rows);
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            let rect = Rect::new(x as f64 * cell_w, y as f64 * cell_h, cell_w, cell_h);
            Cell::new(rect, colors[x * rows + y])
        });

        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn cell_at(&self, coords: Coord2) -> &Cell {
        &self[coords]
    }

    /// Cells in hit-test order: column by column, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    /// First cell containing `point`, matched or not.
    pub fn hit_test(&self, point: Point) -> Option<Coord2> {
        self.iter()
            .find(|(_, cell)| cell.contains(point))
            .map(|(coords, _)| coords)
    }

    /// First cell still in play containing `point`.
    pub fn hit_test_active(&self, point: Point) -> Option<Coord2> {
        self.iter()
            .find(|(_, cell)| cell.active && cell.contains(point))
            .map(|(coords, _)| coords)
    }

    pub fn active_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.active).count() as CellCount
    }

    pub fn all_matched(&self) -> bool {
        self.cells.iter().all(|cell| !cell.active)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Ignored,
    Revealed(Coord2),
    Matched(Coord2, Coord2),
    Mismatched,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn palette(pairs: u8) -> Vec<Rgb> {
        (0..pairs)
            .flat_map(|i| [Rgb::new(i, i, i), Rgb::new(i, i, i)])
            .collect()
    }

    #[test]
    fn config_rejects_odd_and_empty_boards() {
        let duration = TimeDelta::seconds(10);

        assert_eq!(
            GameConfig::new((3, 3), duration, ComparePolicy::Pair),
            Err(GameError::OddCellCount)
        );
        assert_eq!(
            GameConfig::new((0, 4), duration, ComparePolicy::Pair),
            Err(GameError::InvalidSize)
        );
        assert_eq!(
            GameConfig::new((3, 4), TimeDelta::zero(), ComparePolicy::Pair),
            Err(GameError::InvalidDuration)
        );
        assert!(GameConfig::new((2, 1), duration, ComparePolicy::Pair).is_ok());
    }

    #[test]
    fn default_config_is_three_columns_four_rows_two_minutes() {
        let config = GameConfig::default();

        assert_eq!(config.size, (3, 4));
        assert_eq!(config.total_cells(), 12);
        assert_eq!(config.pair_count(), 6);
        assert_eq!(config.duration.num_milliseconds(), 120_000);
        assert_eq!(config.compare, ComparePolicy::ThirdClick);
    }

    #[test]
    fn from_colors_assigns_column_by_column() {
        let colors = palette(6);
        let board = Board::from_colors((3, 4), Canvas::default(), &colors).unwrap();

        assert_eq!(board.cell_at((0, 0)).color, colors[0]);
        assert_eq!(board.cell_at((0, 3)).color, colors[3]);
        assert_eq!(board.cell_at((1, 0)).color, colors[4]);
        assert_eq!(board.cell_at((2, 3)).color, colors[11]);
        assert_eq!(board.cell_at((1, 2)).rect, Rect::new(200., 200., 200., 100.));
    }

    #[test]
    fn from_colors_rejects_wrong_color_count() {
        let err = Board::from_colors((3, 4), Canvas::default(), &palette(5)).unwrap_err();
        assert_eq!(err, GameError::ColorCountMismatch);
    }

    #[test]
    fn hit_test_skips_matched_cells_only_when_asked() {
        let mut board = Board::from_colors((2, 1), Canvas::new(200., 100.), &palette(1)).unwrap();
        let inside_first = Point::new(50., 50.);

        board[(0, 0)].active = false;

        assert_eq!(board.hit_test(inside_first), Some((0, 0)));
        assert_eq!(board.hit_test_active(inside_first), None);
        assert_eq!(board.hit_test_active(Point::new(150., 50.)), Some((1, 0)));
        assert_eq!(board.hit_test(Point::new(100., 50.)), None);
    }

    #[test]
    fn board_serializes_to_json() {
        let board = Board::from_colors((2, 1), Canvas::new(200., 100.), &palette(1)).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(back, board);
    }
}
