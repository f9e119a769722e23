//! Common types for Battleships: coordinates, sides, shot outcomes and errors.

use alloc::string::String;
use core::fmt;

use crate::config::BOARD_SIZE;

/// Identifier of a placed ship. The first ship placed on a board is `1`.
pub type ShipId = u8;

/// A cell position on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` when the coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Cardinal neighbours clipped to the board, always in the order
    /// up, down, left, right.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
        .filter(Coord::in_bounds)
    }

    /// Every coordinate on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// Formats as the label players type: column letter then 1-based row, e.g. `C3`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (u8::try_from(self.col), self.row.checked_add(1)) {
            (Ok(c), Some(row)) if c < 26 => write!(f, "{}{}", (b'A' + c) as char, row),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// The two participants of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship that is still afloat. Which ship stays hidden until
    /// it sinks.
    Hit,
    /// Shot finished off the given ship; other ships remain.
    ShipSunk(ShipId),
    /// Shot sank the last ship on the board.
    GameOver { winner: Side },
    /// Cell had already been fired at; nothing changed.
    Unchanged,
}

impl Outcome {
    /// Returns `true` when the shot struck a ship segment.
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            Outcome::Hit | Outcome::ShipSunk(_) | Outcome::GameOver { .. }
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::GameOver { .. })
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Part of the ship would leave the grid.
    OutOfBounds,
    /// Ship would cover a cell that is already occupied.
    Overlap,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// Every ship of the fleet is already on the board.
    FleetComplete,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Ship is placed outside the board"),
            BoardError::Overlap => write!(f, "Ships overlap"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::FleetComplete => write!(f, "All ships have already been placed"),
        }
    }
}

/// Errors returned by the match coordinator and strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Invalid ship placement.
    Board(BoardError),
    /// Unrecognised difficulty token.
    InvalidDifficulty(String),
    /// Shot coordinate is not on the board.
    OutOfBounds(Coord),
    /// The human already fired at this coordinate.
    AlreadyFired(Coord),
    /// The human fleet has not been fully placed yet.
    SetupIncomplete,
    /// The match has ended; carries the winner.
    GameOver(Side),
    /// Every cell of the target board has already been fired at.
    NoTargetsLeft,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Invalid placement: {}", e),
            GameError::InvalidDifficulty(token) => {
                write!(f, "Invalid difficulty level '{}' (expected easy or hard)", token)
            }
            GameError::OutOfBounds(coord) => write!(f, "Position {} is off the board", coord),
            GameError::AlreadyFired(coord) => write!(f, "Position {} already fired at", coord),
            GameError::SetupIncomplete => write!(f, "Place all ships before firing"),
            GameError::GameOver(winner) => write!(f, "Game is over, {} won", winner),
            GameError::NoTargetsLeft => write!(f, "No unfired positions remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::ToString, vec::Vec};

    #[test]
    fn corner_has_two_neighbors() {
        let n: Vec<_> = Coord::new(0, 0).neighbors().collect();
        assert_eq!(n, [Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let n: Vec<_> = Coord::new(2, 3).neighbors().collect();
        assert_eq!(
            n,
            [
                Coord::new(1, 3),
                Coord::new(3, 3),
                Coord::new(2, 2),
                Coord::new(2, 4)
            ]
        );
    }

    #[test]
    fn far_corner_clips() {
        let last = BOARD_SIZE - 1;
        let n: Vec<_> = Coord::new(last, last).neighbors().collect();
        assert_eq!(n, [Coord::new(last - 1, last), Coord::new(last, last - 1)]);
    }

    #[test]
    fn label_format() {
        assert_eq!(Coord::new(2, 2).to_string(), "C3");
        assert_eq!(Coord::new(0, 5).to_string(), "F1");
        assert_eq!(Coord::new(usize::MAX, 0).to_string(), format!("({}, 0)", usize::MAX));
        assert_eq!(Coord::new(0, 26).to_string(), "(0, 26)");
    }
}
