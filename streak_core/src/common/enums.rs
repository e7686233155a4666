use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Direction of a day-over-day move or an open streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Up,
    Down,
    None,
}

impl Direction {
    /// A tie never counts as up, so anything not strictly greater is down
    pub fn of_move(prev: f64, close: f64) -> Self {
        if close > prev {
            Self::Up
        } else {
            Self::Down
        }
    }
}
