use super::enums::Direction;

/// Revert streak direction
pub fn revert_direction(dir: Direction) -> Direction {
    match dir {
        Direction::Up => Direction::Down,
        Direction::Down => Direction::Up,
        Direction::None => Direction::None,
    }
}

/// Ratio of two counts as a percentage, 0.0 when the denominator is zero
pub fn safe_percent(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64 * 100.0
    }
}

/// Day-over-day change between two closes, in percent
pub fn percent_change(prev: f64, last: f64) -> f64 {
    (last - prev) / prev * 100.0
}
