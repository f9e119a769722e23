//! Ship directions and the cells a ship covers.

use core::{fmt, str::FromStr};

use rand::{
    distr::{Distribution, StandardUniform},
    Rng,
};

use crate::common::{BoardError, Coord};
use crate::config::{BOARD_SIZE, SHIP_LENGTH};

/// Direction a ship extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Towards decreasing row.
    Up,
    /// Towards increasing row.
    Down,
    /// Towards decreasing column.
    Left,
    /// Towards increasing column.
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column delta of one step in this direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}

/// Error parsing a direction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDirectionError;

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "direction must be one of up, down, left, right")
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let dir = if s.eq_ignore_ascii_case("up") || s.eq_ignore_ascii_case("u") {
            Direction::Up
        } else if s.eq_ignore_ascii_case("down") || s.eq_ignore_ascii_case("d") {
            Direction::Down
        } else if s.eq_ignore_ascii_case("left") || s.eq_ignore_ascii_case("l") {
            Direction::Left
        } else if s.eq_ignore_ascii_case("right") || s.eq_ignore_ascii_case("r") {
            Direction::Right
        } else {
            return Err(ParseDirectionError);
        };
        Ok(dir)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.pad(name)
    }
}

/// Compute the cells covered by a ship starting at `start` and extending
/// `SHIP_LENGTH - 1` steps in `direction`.
///
/// Fails with [`BoardError::OutOfBounds`] if any cell would leave the grid.
pub fn ship_cells(start: Coord, direction: Direction) -> Result<[Coord; SHIP_LENGTH], BoardError> {
    let (dr, dc) = direction.step();
    let mut cells = [start; SHIP_LENGTH];
    for (i, cell) in cells.iter_mut().enumerate() {
        let i = i as isize;
        let row = start.row as isize + dr * i;
        let col = start.col as isize + dc * i;
        if !(0..BOARD_SIZE as isize).contains(&row) || !(0..BOARD_SIZE as isize).contains(&col) {
            return Err(BoardError::OutOfBounds);
        }
        *cell = Coord::new(row as usize, col as usize);
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_extend_in_direction() {
        let cells = ship_cells(Coord::new(3, 3), Direction::Up).unwrap();
        assert_eq!(cells, [Coord::new(3, 3), Coord::new(2, 3), Coord::new(1, 3)]);
        let cells = ship_cells(Coord::new(0, 0), Direction::Right).unwrap();
        assert_eq!(cells, [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
    }

    #[test]
    fn cells_off_grid_are_rejected() {
        assert_eq!(
            ship_cells(Coord::new(1, 0), Direction::Up),
            Err(BoardError::OutOfBounds)
        );
        assert_eq!(
            ship_cells(Coord::new(0, BOARD_SIZE - 2), Direction::Right),
            Err(BoardError::OutOfBounds)
        );
        assert_eq!(
            ship_cells(Coord::new(BOARD_SIZE, 0), Direction::Down),
            Err(BoardError::OutOfBounds)
        );
    }

    #[test]
    fn parse_direction_words() {
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" down ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("r".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("north".parse::<Direction>(), Err(ParseDirectionError));
    }
}
