#![cfg(feature = "std")]

//! Text front end: coordinate parsing, board rendering and the interactive loop.

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::RngCore;

use crate::{
    board::{Board, CellView},
    common::{Coord, GameError, Outcome, Side},
    config::BOARD_SIZE,
    game::{Game, GameStatus},
    ship::Direction,
};

/// Parse a label such as `C3` (column letter, 1-based row) into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    let last_col = (b'A' + BOARD_SIZE as u8 - 1) as char;
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, BOARD_SIZE))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, BOARD_SIZE));
    }
    Ok(Coord::new(row - 1, col))
}

/// Parse a placement command such as `C3 left`.
pub fn parse_placement(input: &str) -> Result<(Coord, Direction), String> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next().ok_or("Expected a coordinate and a direction")?)?;
    let direction = parts
        .next()
        .ok_or("Missing direction (up, down, left or right)")?
        .parse::<Direction>()
        .map_err(|e| e.to_string())?;
    if parts.next().is_some() {
        return Err("Too many words - expected e.g. C3 left".to_string());
    }
    Ok((coord, direction))
}

/// A board laid out as a text grid, column letters across and row numbers down.
struct Grid<'a> {
    board: &'a Board,
    reveal: bool,
}

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   |")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {} |", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{:2} |", r + 1)?;
            for c in 0..BOARD_SIZE {
                let symbol = match self.board.view(Coord::new(r, c), self.reveal) {
                    CellView::Unknown => ' ',
                    CellView::Ship(id) => char::from_digit(id as u32, 36).unwrap_or('#'),
                    CellView::Hit => 'X',
                    CellView::Miss => '.',
                };
                write!(f, " {} |", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render `board` as a grid. With `reveal` set the owner's ship ids are
/// shown; otherwise only hits (`X`) and misses (`.`) are visible.
pub fn render_board(board: &Board, reveal: bool) -> String {
    Grid { board, reveal }.to_string()
}

/// Print `prompt` and read one line. `None` on end of input.
fn prompt_line<I: BufRead, O: Write>(input: &mut I, output: &mut O, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn place_ships<R: RngCore, I: BufRead, O: Write>(
    game: &mut Game<R>,
    input: &mut I,
    output: &mut O,
) -> io::Result<bool> {
    writeln!(output, "Place your ships (e.g. C3 left). Press enter for random placement.")?;
    while game.status() == GameStatus::Setup {
        write!(output, "{}", render_board(game.human_board(), true))?;
        let Some(line) = prompt_line(input, output, "where to place ship > ")? else {
            return Ok(false);
        };
        if line.is_empty() {
            if let Err(e) = game.place_remaining_randomly() {
                writeln!(output, "Problem with placing ships - {}", e)?;
            }
            continue;
        }
        match parse_placement(&line) {
            Ok((coord, direction)) => {
                if let Err(e) = game.place_ship(coord, direction) {
                    writeln!(output, "Problem with placing ships - {}", e)?;
                }
            }
            Err(e) => writeln!(output, "Problem with placing ships - {}", e)?,
        }
    }
    Ok(true)
}

fn announce_game_over<O: Write>(output: &mut O, winner: Side) -> io::Result<()> {
    writeln!(output, "All ships have been sunk! {} wins!", winner)?;
    writeln!(output, "Game over!")
}

/// Run a full match over the given input and output streams.
///
/// Returns the winner, or `None` if the input ended first.
pub fn run_interactive<R: RngCore, I: BufRead, O: Write>(
    game: &mut Game<R>,
    input: &mut I,
    output: &mut O,
) -> io::Result<Option<Side>> {
    if !place_ships(game, input, output)? {
        return Ok(None);
    }
    loop {
        writeln!(output, "My board")?;
        write!(output, "{}", render_board(game.human_board(), true))?;
        writeln!(output, "Targeting board")?;
        write!(output, "{}", render_board(game.computer_board(), false))?;

        let Some(line) = prompt_line(input, output, "fire> ")? else {
            return Ok(None);
        };
        let coord = match parse_coord(&line) {
            Ok(coord) => coord,
            Err(e) => {
                writeln!(output, "Invalid move - {}", e)?;
                continue;
            }
        };
        match game.fire_human(coord) {
            Ok(Outcome::GameOver { winner }) => {
                announce_game_over(output, winner)?;
                return Ok(Some(winner));
            }
            Ok(Outcome::ShipSunk(_)) => writeln!(output, "A ship was sunk!")?,
            Ok(Outcome::Hit) => writeln!(output, "Hit!")?,
            Ok(_) => writeln!(output, "Miss.")?,
            Err(e @ (GameError::AlreadyFired(_) | GameError::OutOfBounds(_))) => {
                writeln!(output, "{}", e)?;
                continue;
            }
            Err(e) => return Err(io::Error::other(e)),
        }

        let shot = game.fire_computer().map_err(io::Error::other)?;
        writeln!(output, "Computer fired at {}", shot.coord)?;
        match shot.outcome {
            Outcome::GameOver { winner } => {
                announce_game_over(output, winner)?;
                return Ok(Some(winner));
            }
            Outcome::ShipSunk(id) => writeln!(output, "The computer sank your ship {}!", id)?,
            _ => {}
        }
    }
}
