use serde::Serialize;

use crate::common::enums::Direction;

/// The still-open run at the end of a closing-price series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentStreak {
    pub length: usize,
    pub direction: Direction,
}

impl CurrentStreak {
    /// Walk backward from the last close, extending the run while each step
    /// keeps passing the same directional test as the final one.
    pub fn from_closes(closes: &[f64]) -> Self {
        let n = closes.len();
        if n < 2 {
            return Self {
                length: 0,
                direction: Direction::None,
            };
        }

        let direction = Direction::of_move(closes[n - 2], closes[n - 1]);
        let mut length = 1;

        for i in (1..=n - 2).rev() {
            if Direction::of_move(closes[i - 1], closes[i]) == direction {
                length += 1;
            } else {
                break;
            }
        }

        Self { length, direction }
    }
}
