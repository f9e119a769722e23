use std::collections::HashSet;

use battleships::{
    BoardError, Cell, Coord, Difficulty, Direction, Game, GameError, GameStatus, Outcome, Side,
    FLEET_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};

fn ready_game(token: &str, seed: u64) -> Game {
    let mut game = Game::from_token(token, SmallRng::seed_from_u64(seed)).unwrap();
    game.place_ship(Coord::new(0, 0), Direction::Right).unwrap();
    game.place_ship(Coord::new(5, 5), Direction::Left).unwrap();
    game
}

fn computer_ship_cells(game: &Game) -> Vec<Coord> {
    Coord::all()
        .filter(|&c| matches!(game.computer_board().cell(c), Cell::Ship(_)))
        .collect()
}

#[test]
fn test_difficulty_tokens() {
    assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
    assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert_eq!(
        "medium".parse::<Difficulty>(),
        Err(GameError::InvalidDifficulty("medium".to_string()))
    );
    let err = Game::from_token("impossible", SmallRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(err, GameError::InvalidDifficulty("impossible".to_string()));
}

#[test]
fn test_new_game_places_computer_fleet() {
    for difficulty in [Difficulty::Easy, Difficulty::Hard] {
        let game = Game::new(difficulty, SmallRng::seed_from_u64(5)).unwrap();
        assert_eq!(game.difficulty(), difficulty);
        assert_eq!(game.computer_board().ships_placed(), FLEET_SIZE);
        assert_eq!(game.human_board().ships_placed(), 0);
        assert_eq!(game.status(), GameStatus::Setup);
    }
}

#[test]
fn test_no_firing_during_setup() {
    let mut game = Game::from_token("easy", SmallRng::seed_from_u64(2)).unwrap();
    game.place_ship(Coord::new(0, 0), Direction::Down).unwrap();
    assert_eq!(
        game.fire_human(Coord::new(0, 0)),
        Err(GameError::SetupIncomplete)
    );
    assert_eq!(game.fire_computer(), Err(GameError::SetupIncomplete));
    assert_eq!(game.human_shots(), 0);
}

#[test]
fn test_human_fleet_is_capped() {
    let mut game = ready_game("easy", 3);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(
        game.place_ship(Coord::new(2, 2), Direction::Down),
        Err(BoardError::FleetComplete)
    );
}

#[test]
fn test_human_placement_errors_are_recoverable() {
    let mut game = Game::from_token("hard", SmallRng::seed_from_u64(4)).unwrap();
    assert_eq!(
        game.place_ship(Coord::new(0, 5), Direction::Right),
        Err(BoardError::OutOfBounds)
    );
    game.place_ship(Coord::new(1, 1), Direction::Down).unwrap();
    assert_eq!(
        game.place_ship(Coord::new(2, 0), Direction::Right),
        Err(BoardError::Overlap)
    );
    assert_eq!(game.place_ship(Coord::new(2, 2), Direction::Right), Ok(2));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_duplicate_and_off_board_human_shots() {
    let mut game = ready_game("easy", 8);
    let first = game.fire_human(Coord::new(3, 3)).unwrap();
    assert_ne!(first, Outcome::Unchanged);
    let before = game.computer_board().clone();

    assert_eq!(
        game.fire_human(Coord::new(3, 3)),
        Err(GameError::AlreadyFired(Coord::new(3, 3)))
    );
    assert_eq!(
        game.fire_human(Coord::new(6, 0)),
        Err(GameError::OutOfBounds(Coord::new(6, 0)))
    );
    assert_eq!(game.computer_board(), &before);
    assert_eq!(game.human_shots(), 1);
}

#[test]
fn test_far_off_board_shot_error_formats() {
    let mut game = ready_game("easy", 8);
    let far = Coord::new(usize::MAX, 0);
    let err = game.fire_human(far).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds(far));
    assert_eq!(
        err.to_string(),
        format!("Position ({}, 0) is off the board", usize::MAX)
    );
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.human_shots(), 0);
}

#[test]
fn test_human_hits_do_not_identify_ships() {
    let mut game = ready_game("hard", 17);
    let target = computer_ship_cells(&game)[0];
    let Cell::Ship(id) = game.computer_board().cell(target) else {
        unreachable!()
    };
    assert_eq!(game.computer_board().ship_cells_remaining(id), 3);
    assert_eq!(game.fire_human(target), Ok(Outcome::Hit));
}

#[test]
fn test_human_wins_and_game_stops() {
    let mut game = ready_game("hard", 21);
    let targets = computer_ship_cells(&game);
    let (last, rest) = targets.split_last().unwrap();
    let mut sunk = 0;
    for &c in rest {
        match game.fire_human(c).unwrap() {
            Outcome::Hit => {}
            Outcome::ShipSunk(_) => sunk += 1,
            other => panic!("unexpected outcome {:?} at {}", other, c),
        }
    }
    assert_eq!(sunk, FLEET_SIZE - 1);
    assert_eq!(
        game.fire_human(*last),
        Ok(Outcome::GameOver { winner: Side::Human })
    );
    assert_eq!(game.status(), GameStatus::Finished(Side::Human));
    assert_eq!(
        game.fire_human(Coord::new(2, 3)),
        Err(GameError::GameOver(Side::Human))
    );
    assert_eq!(game.fire_computer(), Err(GameError::GameOver(Side::Human)));
}

#[test]
fn test_computer_wins_without_repeating_shots() {
    for token in ["easy", "hard"] {
        let mut game = ready_game(token, 13);
        let mut seen = HashSet::new();
        let winner = loop {
            let shot = game.fire_computer().unwrap();
            assert!(seen.insert(shot.coord), "{} repeated {}", token, shot.coord);
            if let Outcome::GameOver { winner } = shot.outcome {
                break winner;
            }
        };
        assert_eq!(winner, Side::Computer);
        assert!(game.human_board().is_defeated());
        assert_eq!(game.status(), GameStatus::Finished(Side::Computer));
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let play = |seed| {
        let mut game = ready_game("hard", seed);
        let cells: Vec<Cell> = Coord::all().map(|c| game.computer_board().cell(c)).collect();
        let shots: Vec<Coord> = (0..10).map(|_| game.fire_computer().unwrap().coord).collect();
        (cells, shots)
    };
    assert_eq!(play(99), play(99));
}
