use rand::rngs::SmallRng;
use rand::Rng;

use crate::grid::Grid;

use super::Player;

/// Player that shoots at a uniformly random cell it has not tried yet.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Grid,
        enemy: &Grid,
    ) -> anyhow::Result<(usize, usize)> {
        let open: Vec<(usize, usize)> = enemy
            .cells()
            .filter(|&(_, _, cell)| cell.is_empty())
            .map(|(x, y, _)| (x, y))
            .collect();
        if open.is_empty() {
            return Err(anyhow::anyhow!("No untargeted cells left"));
        }
        Ok(open[rng.random_range(0..open.len())])
    }
}
