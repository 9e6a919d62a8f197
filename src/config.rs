use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random candidates drawn by a single ship search before it gives up.
pub const SHIP_PLACEMENT_ATTEMPTS: usize = 1000;

/// How many times the fleet driver re-runs the search for one ship before
/// reporting `PlacementExhausted`.
pub const SHIP_SEARCH_RETRIES: usize = 100;

/// Whole-board regenerations attempted by `Game::setup`.
pub const BOARD_GENERATION_ATTEMPTS: usize = 10;
