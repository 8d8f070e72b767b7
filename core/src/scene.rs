use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a host needs to paint one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub background: Rgb,
    pub cells: Vec<CellSprite>,
    pub overlay: Overlay,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellSprite {
    pub coords: Coord2,
    pub rect: Rect,
    pub fill: Rgb,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Overlay {
    /// Seconds left, drawn centered along the top edge.
    Countdown(u32),
    /// Full-canvas end screen.
    Banner(Banner),
}

impl Overlay {
    pub const COUNTDOWN_FONT_PX: u32 = 24;
    pub const COUNTDOWN_BASELINE_Y: f64 = 20.;

    pub fn text(&self) -> String {
        match self {
            Self::Countdown(secs) => format!("Time Remaining: {} seconds", secs),
            Self::Banner(banner) => banner.text().into(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    Continue,
    GameOver,
}

impl Banner {
    pub const FONT_PX: u32 = 48;

    pub const fn text(self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::GameOver => "Game Over",
        }
    }

    pub const fn fill(self) -> Rgb {
        match self {
            Self::Continue => Rgb::GREEN,
            Self::GameOver => Rgb::RED,
        }
    }
}

impl Scene {
    pub(crate) fn playing(canvas: Canvas, board: &Board, countdown_secs: u32) -> Self {
        let cells = board
            .iter()
            .filter(|(_, cell)| cell.active)
            .map(|(coords, cell)| CellSprite {
                coords,
                rect: cell.rect,
                fill: cell.fill(),
            })
            .collect();

        Self {
            canvas,
            background: Rgb::BLACK,
            cells,
            overlay: Overlay::Countdown(countdown_secs),
        }
    }

    pub(crate) fn banner(canvas: Canvas, banner: Banner) -> Self {
        Self {
            canvas,
            background: Rgb::BLACK,
            cells: Vec::new(),
            overlay: Overlay::Banner(banner),
        }
    }
}
