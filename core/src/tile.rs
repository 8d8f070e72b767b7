use serde::{Deserialize, Serialize};

use crate::*;

/// One square of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub rect: Rect,
    pub color: Rgb,
    /// Still in play, cleared once the cell has been matched out.
    pub active: bool,
    /// Face up, waiting in the selection buffer or left showing.
    pub revealed: bool,
}

impl Cell {
    pub const fn new(rect: Rect, color: Rgb) -> Self {
        Self {
            rect,
            color,
            active: true,
            revealed: false,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// Fill used when the cell is drawn, face-down cells are blank.
    pub const fn fill(&self) -> Rgb {
        if self.revealed { self.color } else { Rgb::WHITE }
    }
}
