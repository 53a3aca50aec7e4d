use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::common::Outcome;
use crate::console::{parse_command, render_fields};
use crate::grid::Grid;

use super::Player;

/// Interactive player reading moves such as `5 J` from stdin.
#[derive(Debug, Default)]
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Miss => "Miss.",
        Outcome::Damaged => "Hit!",
        Outcome::Destroyed => "Ship destroyed!",
        Outcome::Win => "Last ship destroyed!",
    }
}

impl Player for CliPlayer {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Grid,
        enemy: &Grid,
    ) -> anyhow::Result<(usize, usize)> {
        println!();
        print!("{}", render_fields(own, enemy));
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("Your move (row column, e.g. 5 J): ");
            io::stdout().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("Input closed"));
            }
            match parse_command(&line) {
                Ok((x, y)) if !enemy.in_bounds(x, y) => {
                    println!("That cell is outside the grid.");
                }
                Ok((x, y)) if enemy.get(x, y).is_some_and(|c| !c.is_empty()) => {
                    println!("You already shot there.");
                }
                Ok(coord) => return Ok(coord),
                Err(e) => println!("{}", e),
            }
        }
    }

    fn handle_shot_result(&mut self, _coord: (usize, usize), outcome: Outcome) {
        println!("{}", describe(outcome));
    }

    fn handle_opponent_shot(&mut self, coord: (usize, usize), outcome: Outcome) {
        let col = crate::console::COLUMN_LABELS
            .get(coord.0)
            .copied()
            .unwrap_or('?');
        println!("Opponent fired at {} {}: {}", coord.1 + 1, col, describe(outcome));
    }
}
