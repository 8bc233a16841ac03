//! Application constants.

/// Event loop tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 250;

/// Pounds added or removed per price-bound keypress.
pub const PRICE_STEP: u32 = 25;

/// Rows assumed visible when keeping the grid cursor on screen.
pub const GRID_VIEWPORT_ROWS: usize = 20;
