use rand::Rng;

use crate::{
    common::{BoardError, Outcome},
    config::{GRID_HEIGHT, GRID_WIDTH, STANDARD_FLEET},
    grid::Grid,
    placement::{place_fleet, Placement},
    resolver,
};
use alloc::vec::Vec;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Core game logic for one side: our fleet and our view of the opponent's fleet.
///
/// Unlike the bare resolver, the engine rejects shots at cells that were already
/// shot and any shot after the game has a winner.
#[derive(Debug, Clone)]
pub struct GameEngine {
    own: Grid,
    enemy: Grid,
    status: GameStatus,
    shots_fired: usize,
}

impl GameEngine {
    /// Engine for the standard 10×10 grid, with no ships placed yet.
    pub fn new() -> Self {
        Self::with_size(GRID_WIDTH, GRID_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            own: Grid::new(width, height),
            enemy: Grid::new(width, height),
            status: GameStatus::InProgress,
            shots_fired: 0,
        }
    }

    /// Engine around an already populated grid of our own fleet.
    pub fn from_grid(own: Grid) -> Self {
        let enemy = Grid::new(own.width(), own.height());
        Self {
            own,
            enemy,
            status: GameStatus::InProgress,
            shots_fired: 0,
        }
    }

    /// Randomly place the standard fleet on our grid.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<Placement>, BoardError> {
        place_fleet(&mut self.own, &STANDARD_FLEET, rng)
    }

    /// Our own fleet.
    pub fn own_grid(&self) -> &Grid {
        &self.own
    }

    /// What we know about the opponent's fleet.
    pub fn enemy_grid(&self) -> &Grid {
        &self.enemy
    }

    fn ensure_in_progress(&self) -> Result<(), BoardError> {
        if self.status == GameStatus::InProgress {
            Ok(())
        } else {
            Err(BoardError::GameOver)
        }
    }

    /// Handle an opponent shot against our fleet.
    pub fn opponent_shot(&mut self, x: usize, y: usize) -> Result<Outcome, BoardError> {
        self.ensure_in_progress()?;
        if self.own.cell(x, y)?.is_targeted() {
            return Err(BoardError::AlreadyTargeted { x, y });
        }
        let outcome = resolver::fire(&mut self.own, x, y)?;
        if outcome.is_win() {
            self.status = GameStatus::Lost;
        }
        log::debug!("opponent shot ({}, {}): {}", x, y, outcome);
        Ok(outcome)
    }

    /// Record the outcome the opponent reported for our shot at `(x, y)`.
    pub fn record_shot(&mut self, x: usize, y: usize, outcome: Outcome) -> Result<(), BoardError> {
        self.ensure_in_progress()?;
        if !self.enemy.cell(x, y)?.is_empty() {
            return Err(BoardError::AlreadyTargeted { x, y });
        }
        resolver::apply(&mut self.enemy, x, y, outcome)?;
        self.shots_fired += 1;
        if outcome.is_win() {
            self.status = GameStatus::Won;
        }
        log::debug!("our shot ({}, {}): {}", x, y, outcome);
        Ok(())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of our shots recorded so far.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
