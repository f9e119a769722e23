//! Match coordinator: one board per side, the computer's strategy and the
//! human's shot history.

use alloc::{boxed::Box, collections::BTreeSet, string::ToString};
use core::{fmt, str::FromStr};

use rand::{rngs::SmallRng, RngCore};

use crate::{
    board::Board,
    common::{BoardError, Coord, GameError, Outcome, ShipId, Side},
    config::FLEET_SIZE,
    ship::Direction,
    strategy::{HuntingStrategy, RandomStrategy, Shot, Strategy},
};

/// Computer opponent level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Build the strategy matching this level.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new()),
            Difficulty::Hard => Box::new(HuntingStrategy::new()),
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("easy") {
            Ok(Difficulty::Easy)
        } else if token.eq_ignore_ascii_case("hard") {
            Ok(Difficulty::Hard)
        } else {
            Err(GameError::InvalidDifficulty(token.to_string()))
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.pad("easy"),
            Difficulty::Hard => f.pad("hard"),
        }
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The human fleet is still being placed.
    Setup,
    InProgress,
    /// One fleet has been destroyed; carries the winner.
    Finished(Side),
}

/// A human vs. computer match.
///
/// Turn order is left to the caller; the coordinator only refuses to fire
/// before the human fleet is placed or after the match has been decided.
pub struct Game<R: RngCore = SmallRng> {
    difficulty: Difficulty,
    human_board: Board,
    computer_board: Board,
    strategy: Box<dyn Strategy>,
    human_fired: BTreeSet<Coord>,
    rng: R,
    winner: Option<Side>,
}

impl<R: RngCore> Game<R> {
    /// Start a match and let the strategy place the computer fleet.
    pub fn new(difficulty: Difficulty, mut rng: R) -> Result<Self, GameError> {
        let mut strategy = difficulty.strategy();
        let mut computer_board = Board::new(Side::Computer);
        strategy.place_ships(&mut rng, &mut computer_board)?;
        log::info!("new {} game using {} strategy", difficulty, strategy.name());
        Ok(Game {
            difficulty,
            human_board: Board::new(Side::Human),
            computer_board,
            strategy,
            human_fired: BTreeSet::new(),
            rng,
            winner: None,
        })
    }

    /// Parse a difficulty token and start a match with it.
    pub fn from_token(token: &str, rng: R) -> Result<Self, GameError> {
        let difficulty = token.parse()?;
        Self::new(difficulty, rng)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The human's own board.
    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    /// The computer's board, which the human is firing at.
    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Number of shots the human has taken.
    pub fn human_shots(&self) -> usize {
        self.human_fired.len()
    }

    pub fn has_human_fired(&self, coord: Coord) -> bool {
        self.human_fired.contains(&coord)
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) => GameStatus::Finished(winner),
            None if self.human_board.ships_placed() < FLEET_SIZE => GameStatus::Setup,
            None => GameStatus::InProgress,
        }
    }

    /// Place one ship of the human fleet.
    pub fn place_ship(&mut self, start: Coord, direction: Direction) -> Result<ShipId, BoardError> {
        if self.human_board.ships_placed() >= FLEET_SIZE {
            return Err(BoardError::FleetComplete);
        }
        self.human_board.place_ship(start, direction)
    }

    /// Place whatever remains of the human fleet at random.
    pub fn place_remaining_randomly(&mut self) -> Result<(), BoardError> {
        crate::strategy::place_fleet_randomly(&mut self.rng, &mut self.human_board)
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        match self.status() {
            GameStatus::Setup => Err(GameError::SetupIncomplete),
            GameStatus::Finished(winner) => Err(GameError::GameOver(winner)),
            GameStatus::InProgress => Ok(()),
        }
    }

    fn record(&mut self, outcome: Outcome) {
        if let Outcome::GameOver { winner } = outcome {
            self.winner = Some(winner);
        }
    }

    /// Human shot at the computer board.
    pub fn fire_human(&mut self, coord: Coord) -> Result<Outcome, GameError> {
        self.ensure_playable()?;
        if !coord.in_bounds() {
            return Err(GameError::OutOfBounds(coord));
        }
        if !self.human_fired.insert(coord) {
            return Err(GameError::AlreadyFired(coord));
        }
        let outcome = self.computer_board.fire(coord);
        log::debug!("human fired at {} -> {:?}", coord, outcome);
        self.record(outcome);
        Ok(outcome)
    }

    /// Let the strategy take the computer's shot at the human board.
    pub fn fire_computer(&mut self) -> Result<Shot, GameError> {
        self.ensure_playable()?;
        let shot = self.strategy.fire(&mut self.rng, &mut self.human_board)?;
        self.record(shot.outcome);
        Ok(shot)
    }
}

impl<R: RngCore> fmt::Debug for Game<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("difficulty", &self.difficulty)
            .field("status", &self.status())
            .field("strategy", &self.strategy.name())
            .field("human_shots", &self.human_fired.len())
            .finish()
    }
}
