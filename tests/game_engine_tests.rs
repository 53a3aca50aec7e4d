use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{BoardError, Cell, CellFlag, GameEngine, GameStatus, Grid, Outcome, TOTAL_SHIP_CELLS};

fn two_ship_engine() -> GameEngine {
    let mut own = Grid::new(4, 4);
    own.place_ship(0, 0, 1, 0).unwrap();
    own.place_ship(3, 3, 3, 3).unwrap();
    GameEngine::from_grid(own)
}

#[test]
fn new_engine_is_in_progress() {
    let engine = GameEngine::new();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.shots_fired(), 0);
    assert_eq!(engine.own_grid().width(), 10);
    assert_eq!(engine.enemy_grid().height(), 10);
    assert_eq!(engine.own_grid().count(CellFlag::Ship), 0);
}

#[test]
fn place_fleet_fills_own_grid() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut engine = GameEngine::new();
    let placed = engine.place_fleet(&mut rng).unwrap();
    assert_eq!(placed.len(), 10);
    assert_eq!(engine.own_grid().count(CellFlag::Ship), TOTAL_SHIP_CELLS);
    assert!(engine.enemy_grid().cells().all(|(_, _, c)| c.is_empty()));
}

#[test]
fn losing_the_last_ship() {
    let mut engine = two_ship_engine();
    assert_eq!(engine.opponent_shot(2, 2).unwrap(), Outcome::Miss);
    assert_eq!(engine.opponent_shot(0, 0).unwrap(), Outcome::Damaged);
    assert_eq!(engine.opponent_shot(1, 0).unwrap(), Outcome::Destroyed);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.opponent_shot(3, 3).unwrap(), Outcome::Win);
    assert_eq!(engine.status(), GameStatus::Lost);
    assert_eq!(engine.opponent_shot(2, 3), Err(BoardError::GameOver));
}

#[test]
fn repeated_opponent_shot_is_rejected() {
    let mut engine = two_ship_engine();
    engine.opponent_shot(0, 0).unwrap();
    engine.opponent_shot(2, 1).unwrap();
    assert_eq!(
        engine.opponent_shot(0, 0),
        Err(BoardError::AlreadyTargeted { x: 0, y: 0 })
    );
    assert_eq!(
        engine.opponent_shot(2, 1),
        Err(BoardError::AlreadyTargeted { x: 2, y: 1 })
    );
    assert_eq!(engine.own_grid().get(0, 0), Some(Cell::Damaged));
}

#[test]
fn opponent_shot_out_of_bounds() {
    let mut engine = two_ship_engine();
    assert_eq!(
        engine.opponent_shot(4, 0),
        Err(BoardError::OutOfBounds { x: 4, y: 0 })
    );
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn recording_our_shots() {
    let mut engine = GameEngine::with_size(4, 4);
    engine.record_shot(0, 0, Outcome::Miss).unwrap();
    engine.record_shot(2, 2, Outcome::Damaged).unwrap();
    engine.record_shot(2, 3, Outcome::Destroyed).unwrap();
    assert_eq!(engine.shots_fired(), 3);
    assert_eq!(engine.enemy_grid().get(0, 0), Some(Cell::Miss));
    assert_eq!(engine.enemy_grid().get(2, 2), Some(Cell::Destroyed));
    assert_eq!(engine.enemy_grid().get(2, 3), Some(Cell::Destroyed));

    assert_eq!(
        engine.record_shot(2, 2, Outcome::Miss),
        Err(BoardError::AlreadyTargeted { x: 2, y: 2 })
    );
    assert_eq!(engine.shots_fired(), 3);

    engine.record_shot(0, 3, Outcome::Win).unwrap();
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(
        engine.record_shot(1, 1, Outcome::Miss),
        Err(BoardError::GameOver)
    );
}

#[test]
fn full_game_between_two_engines() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut defender = GameEngine::new();
    defender.place_fleet(&mut rng).unwrap();
    let mut attacker = GameEngine::new();

    'outer: for y in 0..10 {
        for x in 0..10 {
            let outcome = defender.opponent_shot(x, y).unwrap();
            attacker.record_shot(x, y, outcome).unwrap();
            if outcome.is_win() {
                break 'outer;
            }
        }
    }

    assert_eq!(defender.status(), GameStatus::Lost);
    assert_eq!(attacker.status(), GameStatus::Won);
    assert_eq!(
        attacker.enemy_grid().count(CellFlag::Destroyed),
        TOTAL_SHIP_CELLS
    );
}
