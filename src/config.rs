/// Width and height of every board.
pub const BOARD_SIZE: usize = 6;
/// Number of cells each ship occupies.
pub const SHIP_LENGTH: usize = 3;
/// Ships placed per side.
pub const FLEET_SIZE: usize = 2;

/// Total number of ship segments on a fully placed board.
pub const TOTAL_SHIP_CELLS: usize = FLEET_SIZE * SHIP_LENGTH;

/// Random placement gives up on a ship after this many rejected draws.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Environment variable holding the log level (`error`, `warn`, `info`, ...).
pub const LOG_ENV_VAR: &str = "BATTLESHIPS_LOG";
