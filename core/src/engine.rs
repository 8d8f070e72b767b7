use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Cells flipped face up and not yet compared.
pub type Selection = SmallVec<[Coord2; 3]>;

/// The whole game: board, selection buffer, clock and status.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchEngine {
    config: GameConfig,
    canvas: Canvas,
    board: Board,
    selection: Selection,
    clock: GameClock,
    status: GameStatus,
}

impl MatchEngine {
    pub fn new(
        config: GameConfig,
        canvas: Canvas,
        generator: impl BoardGenerator,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let board = generator.generate(&config, canvas)?;
        Ok(Self::from_board(config, canvas, board, now))
    }

    pub fn from_board(config: GameConfig, canvas: Canvas, board: Board, now: DateTime<Utc>) -> Self {
        Self {
            clock: GameClock::start(now, config.duration),
            config,
            canvas,
            board,
            selection: Selection::new(),
            status: GameStatus::Playing,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &[Coord2] {
        &self.selection
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Deals a new board on the current canvas and restarts the clock.
    pub fn reset(&mut self, generator: impl BoardGenerator, now: DateTime<Utc>) -> Result<()> {
        let board = generator.generate(&self.config, self.canvas)?;
        self.restart(board, now);
        Ok(())
    }

    pub fn restart(&mut self, board: Board, now: DateTime<Utc>) {
        self.board = board;
        self.selection.clear();
        self.clock = GameClock::start(now, self.config.duration);
        self.status = GameStatus::Playing;
        log::debug!("game restarted with {} cells", self.board.total_cells());
    }

    /// Only the drawing surface changes, the cells keep their old geometry until the next reset.
    pub fn resize(&mut self, canvas: Canvas) {
        log::debug!(
            "canvas resized from {}x{} to {}x{}",
            self.canvas.width,
            self.canvas.height,
            canvas.width,
            canvas.height
        );
        self.canvas = canvas;
    }

    pub fn click(&mut self, point: Point) -> ClickOutcome {
        if !self.status.is_playing() {
            return ClickOutcome::Ignored;
        }

        let Some(coords) = self.board.hit_test_active(point) else {
            log::trace!("click at ({}, {}) hit nothing", point.x, point.y);
            return ClickOutcome::Ignored;
        };
        log::trace!("click at ({}, {}) revealed {:?}", point.x, point.y, coords);

        self.selection.push(coords);
        self.board[coords].revealed = true;

        if self.selection.len() < self.config.compare.threshold() {
            return ClickOutcome::Revealed(coords);
        }

        let (first, second) = (self.selection[0], self.selection[1]);
        let outcome = if self.board[first].color == self.board[second].color {
            self.board[first].active = false;
            self.board[second].active = false;
            log::debug!("matched {:?} and {:?}", first, second);
            ClickOutcome::Matched(first, second)
        } else {
            for &selected in &self.selection {
                self.board[selected].revealed = false;
            }
            log::debug!("mismatch, flipped back {:?}", self.selection);
            ClickOutcome::Mismatched
        };
        self.selection.clear();
        outcome
    }

    /// Per-frame step: applies end conditions, then describes what to draw.
    ///
    /// `pending_click` is the last click seen since the previous frame. It only matters once the game is lost:
    /// landing on any cell puts that cell back into play and resumes the game.
    pub fn frame(&mut self, now: DateTime<Utc>, pending_click: Option<Point>) -> Scene {
        match self.status {
            GameStatus::Playing => {
                if self.board.all_matched() {
                    self.end_game(GameStatus::Won);
                } else if self.clock.is_expired(now) {
                    self.end_game(GameStatus::Lost);
                }
            }
            GameStatus::Lost => {
                if let Some(coords) = pending_click.and_then(|point| self.board.hit_test(point)) {
                    self.board[coords].active = true;
                    self.status = GameStatus::Playing;
                    log::debug!("lost game resumed through {:?}", coords);
                }
            }
            GameStatus::Won => {}
        }

        self.scene(now)
    }

    pub fn scene(&self, now: DateTime<Utc>) -> Scene {
        match self.status {
            GameStatus::Playing => {
                Scene::playing(self.canvas, &self.board, self.clock.countdown_secs(now))
            }
            GameStatus::Won => Scene::banner(self.canvas, Banner::Continue),
            GameStatus::Lost => Scene::banner(self.canvas, Banner::GameOver),
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        log::debug!("game ended: {:?}", status);
        self.status = status;
    }
}
