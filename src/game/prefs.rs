use std::time::Duration;

use static_assertions::const_assert;

use crate::basic::GridDim;

pub const DEFAULT_BOARD_DIM: GridDim = GridDim { x: 40, y: 30 };

// a starting snake of 3 must fit in the interior
const_assert!(DEFAULT_BOARD_DIM.x > 6 && DEFAULT_BOARD_DIM.y > 4);

/// Tunables for a single run. Defaults match the windowed game, the
/// classic binary overrides what it needs.
#[derive(Copy, Clone, Debug)]
pub struct Prefs {
    /// Board size in cells, the outermost ring is wall.
    pub board_dim: GridDim,
    pub start_len: usize,

    pub start_interval: Duration,
    /// How much shorter each food makes the tick interval.
    pub speedup: Duration,
    pub min_interval: Duration,

    pub food_value: u32,
    pub special_food: bool,
    pub special_value: u32,
    /// Special food appears whenever the score reaches a multiple of this.
    pub special_milestone: u32,
    pub special_lifetime: Duration,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_dim: DEFAULT_BOARD_DIM,
            start_len: 3,

            start_interval: Duration::from_millis(200),
            speedup: Duration::from_millis(5),
            min_interval: Duration::from_millis(50),

            food_value: 1,
            special_food: true,
            special_value: 5,
            special_milestone: 10,
            special_lifetime: Duration::from_secs(5),
        }
    }
}

// builder
impl Prefs {
    pub fn board_dim(mut self, board_dim: GridDim) -> Self {
        self.board_dim = board_dim;
        self
    }

    pub fn start_len(mut self, start_len: usize) -> Self {
        self.start_len = start_len;
        self
    }

    pub fn special_food(mut self, special_food: bool) -> Self {
        self.special_food = special_food;
        self
    }
}
