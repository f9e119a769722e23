//! Computer opponent strategies
//!
//! A strategy places the computer fleet on its own board and chooses where
//! the computer fires on the opponent's board:
//! - RandomStrategy: memoryless random search ("easy")
//! - HuntingStrategy: random search until a hit, then sweep its neighbours ("hard")

use alloc::{collections::BTreeSet, vec::Vec};

use rand::{Rng, RngCore};

use crate::{
    board::Board,
    common::{BoardError, Coord, GameError, Outcome},
    config::{BOARD_SIZE, FLEET_SIZE, MAX_PLACEMENT_ATTEMPTS},
    ship::Direction,
};

mod hunting;
mod random;

pub use hunting::HuntingStrategy;
pub use random::RandomStrategy;

/// A single computer shot and how it resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub coord: Coord,
    pub outcome: Outcome,
}

/// Interface implemented by the computer opponents.
///
/// Randomness is always supplied by the caller so games can be replayed
/// from a seed.
pub trait Strategy: Send {
    /// Short human readable name.
    fn name(&self) -> &'static str;

    /// Place the whole computer fleet onto `own`.
    fn place_ships(&mut self, rng: &mut dyn RngCore, own: &mut Board) -> Result<(), BoardError> {
        place_fleet_randomly(rng, own)
    }

    /// Choose a target, fire at it on `target` and report the shot.
    fn fire(&mut self, rng: &mut dyn RngCore, target: &mut Board) -> Result<Shot, GameError>;

    /// Returns `true` if this strategy has already fired at `coord`.
    fn has_fired(&self, coord: Coord) -> bool;
}

/// Place ships at random starting cells and directions until the board
/// holds a full fleet. Each ship gets at most `MAX_PLACEMENT_ATTEMPTS` draws.
pub fn place_fleet_randomly<R: Rng + ?Sized>(rng: &mut R, board: &mut Board) -> Result<(), BoardError> {
    while board.ships_placed() < FLEET_SIZE {
        let mut attempts = 0;
        loop {
            if attempts == MAX_PLACEMENT_ATTEMPTS {
                log::warn!(
                    "{} board: gave up placing ship after {} attempts",
                    board.owner(),
                    attempts
                );
                return Err(BoardError::UnableToPlaceShip);
            }
            attempts += 1;
            let start = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let direction: Direction = rng.random();
            match board.place_ship(start, direction) {
                Ok(_) => break,
                Err(BoardError::OutOfBounds | BoardError::Overlap) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

/// Pick uniformly among the coordinates not in `fired`.
/// Returns `None` when every cell has been fired at.
pub fn random_unfired<R: Rng + ?Sized>(rng: &mut R, fired: &BTreeSet<Coord>) -> Option<Coord> {
    let open: Vec<Coord> = Coord::all().filter(|c| !fired.contains(c)).collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}
