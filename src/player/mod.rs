//! Move sources for a session.
//!
//! - `CliPlayer`: a human at the console
//! - `RandomPlayer`: uniformly random untargeted cells

use rand::rngs::SmallRng;

use crate::common::Outcome;
use crate::grid::Grid;

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Choose the next cell to shoot at, given our fleet and our view of the opponent.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Grid,
        enemy: &Grid,
    ) -> anyhow::Result<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _outcome: Outcome) {}

    /// Inform the player of an opponent shot against its fleet.
    fn handle_opponent_shot(&mut self, _coord: (usize, usize), _outcome: Outcome) {}
}

pub mod cli;
pub use cli::CliPlayer;

pub mod random;
pub use random::RandomPlayer;
