//! Board state: ship occupancy, shot resolution and sink detection.

use core::fmt;

use crate::common::{BoardError, Coord, Outcome, ShipId, Side};
use crate::config::BOARD_SIZE;
use crate::ship::{ship_cells, Direction};

/// Integer stored for a fired-and-missed cell; never a valid ship id.
pub const MISS_MARKER: i16 = 100;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water, not fired at.
    #[default]
    Empty,
    /// Segment of the given ship, not fired at.
    Ship(ShipId),
    /// Segment of the given ship that has been hit.
    Hit(ShipId),
    /// Open water that has been fired at.
    Miss,
}

impl Cell {
    /// Integer encoding of the cell: `0` empty, `k` ship `k`, `-k` hit on
    /// ship `k`, [`MISS_MARKER`] for a miss.
    pub fn code(self) -> i16 {
        match self {
            Cell::Empty => 0,
            Cell::Ship(id) => id as i16,
            Cell::Hit(id) => -(id as i16),
            Cell::Miss => MISS_MARKER,
        }
    }
}

/// What a viewer may see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Not fired at, and either empty or hidden from this viewer.
    Unknown,
    /// Own ship segment not yet hit.
    Ship(ShipId),
    Hit,
    Miss,
}

/// One side's 6x6 grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    owner: Side,
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    next_ship: ShipId,
    afloat: u8,
}

impl Board {
    /// Create an empty board belonging to `owner`.
    pub fn new(owner: Side) -> Self {
        Board {
            owner,
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            next_ship: 1,
            afloat: 0,
        }
    }

    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Raw state of the cell at `coord`. Panics if `coord` is off the board.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// The cell as a viewer sees it. With `reveal` unset, unfired ship
    /// segments are indistinguishable from open water.
    pub fn view(&self, coord: Coord, reveal: bool) -> CellView {
        match self.cell(coord) {
            Cell::Empty => CellView::Unknown,
            Cell::Ship(id) if reveal => CellView::Ship(id),
            Cell::Ship(_) => CellView::Unknown,
            Cell::Hit(_) => CellView::Hit,
            Cell::Miss => CellView::Miss,
        }
    }

    /// Number of ships placed so far.
    pub fn ships_placed(&self) -> usize {
        (self.next_ship - 1) as usize
    }

    /// Number of placed ships that are not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.afloat as usize
    }

    /// Returns `true` once at least one ship was placed and all are sunk.
    pub fn is_defeated(&self) -> bool {
        self.ships_placed() > 0 && self.afloat == 0
    }

    /// Count of unhit cells still held by ship `id`.
    pub fn ship_cells_remaining(&self, id: ShipId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Ship(id))
            .count()
    }

    /// Place the next ship starting at `start` and extending in `direction`.
    ///
    /// All cells are validated (bounds first, then overlap) before anything
    /// is written. Returns the id assigned to the new ship.
    pub fn place_ship(&mut self, start: Coord, direction: Direction) -> Result<ShipId, BoardError> {
        let coords = ship_cells(start, direction)?;
        if coords.iter().any(|&c| self.cell(c) != Cell::Empty) {
            return Err(BoardError::Overlap);
        }
        let id = self.next_ship;
        for c in coords {
            self.cells[c.row][c.col] = Cell::Ship(id);
        }
        self.next_ship += 1;
        self.afloat += 1;
        log::debug!("{} board: ship {} placed at {} {}", self.owner, id, start, direction);
        Ok(id)
    }

    /// Fire at `coord` and resolve the shot.
    ///
    /// `coord` must be on the board; an off-board coordinate panics.
    /// Firing at a cell that was already resolved changes nothing and
    /// returns [`Outcome::Unchanged`].
    pub fn fire(&mut self, coord: Coord) -> Outcome {
        let cell = &mut self.cells[coord.row][coord.col];
        match *cell {
            Cell::Empty => {
                *cell = Cell::Miss;
                Outcome::Miss
            }
            Cell::Ship(id) => {
                *cell = Cell::Hit(id);
                if self.ship_cells_remaining(id) > 0 {
                    return Outcome::Hit;
                }
                self.afloat -= 1;
                if self.afloat == 0 {
                    let winner = self.owner.opponent();
                    log::info!("{} fleet destroyed, {} wins", self.owner, winner);
                    Outcome::GameOver { winner }
                } else {
                    log::info!("{} ship {} sunk", self.owner, id);
                    Outcome::ShipSunk(id)
                }
            }
            Cell::Hit(_) | Cell::Miss => Outcome::Unchanged,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ owner: {:?}, next_ship: {}, afloat: {} }}",
            self.owner, self.next_ship, self.afloat
        )?;
        for row in &self.cells {
            for cell in row {
                write!(f, "{:>4}", cell.code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
