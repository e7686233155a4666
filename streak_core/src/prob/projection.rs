use serde::Serialize;

use crate::common::enums::Direction;
use crate::common::func_util::revert_direction;
use crate::common::streak_exception::{ErrCode, StreakException};
use crate::prob::estimator::extension_probability;
use crate::streak::current_streak::CurrentStreak;
use crate::streak::streak_list::StreakList;

/// Complementary upside/downside percentages for one future observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomePair {
    pub upside: f64,
    pub downside: f64,
}

impl OutcomePair {
    fn from_upside(upside: f64) -> Self {
        Self {
            upside,
            downside: 100.0 - upside,
        }
    }

    fn from_downside(downside: f64) -> Self {
        Self {
            upside: 100.0 - downside,
            downside,
        }
    }
}

/// Next-close probabilities plus the day-after-next split conditioned on
/// each possible next close
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    pub next: OutcomePair,
    /// Day-after-next split if the next close moves up
    pub if_next_up: OutcomePair,
    /// Day-after-next split if the next close moves down
    pub if_next_down: OutcomePair,
}

impl Projection {
    /// Compose both steps from historical run lengths and the open streak.
    /// A series too short to have an open streak cannot be projected.
    pub fn compose(
        streaks: &StreakList,
        current: &CurrentStreak,
    ) -> Result<Self, StreakException> {
        let dir = current.direction;
        if dir == Direction::None {
            return Err(StreakException::new(
                "no open streak to project from".to_string(),
                ErrCode::ProjectionErr,
            ));
        }

        let same = streaks.runs(dir);
        let other = streaks.runs(revert_direction(dir));

        let extend = extension_probability(same, current.length);
        let next = match dir {
            Direction::Up => OutcomePair::from_upside(extend),
            _ => OutcomePair::from_downside(extend),
        };

        // One branch deepens the open run to length + 1, the other starts a
        // fresh length-1 run the opposite way
        let deeper = extension_probability(same, current.length + 1);
        let fresh = extension_probability(other, 1);

        let (if_next_up, if_next_down) = match dir {
            Direction::Up => (
                OutcomePair::from_upside(deeper),
                OutcomePair::from_downside(fresh),
            ),
            _ => (
                OutcomePair::from_upside(fresh),
                OutcomePair::from_downside(deeper),
            ),
        };

        Ok(Self {
            next,
            if_next_up,
            if_next_down,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_sums_to_100(pair: &OutcomePair) -> bool {
        (pair.upside + pair.downside - 100.0).abs() < 1e-9
    }

    #[test]
    fn test_rejects_missing_streak() {
        let streaks = StreakList::default();
        let current = CurrentStreak {
            length: 0,
            direction: Direction::None,
        };
        let err = Projection::compose(&streaks, &current).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ProjectionErr);
    }

    #[test]
    fn test_up_streak_projection() {
        let streaks = StreakList {
            up: vec![1, 1, 2, 3, 5],
            down: vec![1, 2],
        };
        let current = CurrentStreak {
            length: 2,
            direction: Direction::Up,
        };
        let proj = Projection::compose(&streaks, &current).unwrap();

        // 3 up runs reached 2, two of them went on
        assert!((proj.next.upside - 200.0 / 3.0).abs() < 1e-9);
        // If it extends to 3: runs 3 and 5 reached 3, only 5 went on
        assert_eq!(proj.if_next_up.upside, 50.0);
        // If it breaks: one of two down runs made it past day one
        assert_eq!(proj.if_next_down.downside, 50.0);

        for pair in [proj.next, proj.if_next_up, proj.if_next_down] {
            assert!(pair_sums_to_100(&pair));
        }
    }

    #[test]
    fn test_down_streak_projection() {
        let streaks = StreakList {
            up: vec![2, 2],
            down: vec![1, 3],
        };
        let current = CurrentStreak {
            length: 1,
            direction: Direction::Down,
        };
        let proj = Projection::compose(&streaks, &current).unwrap();

        assert_eq!(proj.next.downside, 50.0);
        assert_eq!(proj.next.upside, 50.0);
        // Break branch: every up run extended past day one
        assert_eq!(proj.if_next_up.upside, 100.0);
        // Extend branch: down at length 2, only the 3-run reached it and it went on
        assert_eq!(proj.if_next_down.downside, 100.0);
    }

    #[test]
    fn test_no_evidence_defaults_to_downside() {
        // A fresh instrument that has only ever gone up, now one day up
        let streaks = StreakList {
            up: vec![1],
            down: vec![],
        };
        let current = CurrentStreak {
            length: 1,
            direction: Direction::Up,
        };
        let proj = Projection::compose(&streaks, &current).unwrap();
        assert_eq!(proj.next.upside, 0.0);
        assert_eq!(proj.next.downside, 100.0);
        // Reversal branch has no down history either
        assert_eq!(proj.if_next_down.downside, 0.0);
        assert_eq!(proj.if_next_down.upside, 100.0);
    }
}
