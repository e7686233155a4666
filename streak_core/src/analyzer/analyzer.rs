use serde::Serialize;

use crate::common::enums::Direction;
use crate::common::func_util::percent_change;
use crate::common::streak_exception::{ErrCode, StreakException};
use crate::config::streak_config::{StreakConfig, MIN_CLOSES_FOR_PROJECTION};
use crate::prob::projection::Projection;
use crate::series::price_series::check_closes;
use crate::streak::current_streak::CurrentStreak;
use crate::streak::distribution::StreakDistribution;
use crate::streak::streak_list::StreakList;

/// Per-direction streak summary
#[derive(Debug, Clone, Serialize)]
pub struct StreakSummary {
    pub count: usize,
    pub longest: usize,
    pub average: f64,
    pub distribution: StreakDistribution,
}

/// Full analysis output for one instrument
#[derive(Debug, Clone, Serialize)]
pub struct StreakReport {
    pub observations: usize,
    pub last_close: f64,
    pub prev_close: f64,
    pub change_pct: f64,
    pub up: StreakSummary,
    pub down: StreakSummary,
    pub current: CurrentStreak,
    pub projection: Projection,
}

/// 分析器，负责 streak 统计、当前连续走势与两步概率预测
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: StreakConfig,
}

impl Analyzer {
    pub fn new(config: StreakConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, closes: &[f64]) -> Result<StreakReport, StreakException> {
        check_closes(closes)?;

        let required = self.config.min_observations.max(MIN_CLOSES_FOR_PROJECTION);
        if closes.len() < required {
            return Err(StreakException::new(
                format!("{} closes, need at least {}", closes.len(), required),
                ErrCode::InsufficientData,
            ));
        }

        let streaks = StreakList::from_closes(closes);
        let current = CurrentStreak::from_closes(closes);
        let projection = Projection::compose(&streaks, &current)?;

        let n = closes.len();
        Ok(StreakReport {
            observations: n,
            last_close: closes[n - 1],
            prev_close: closes[n - 2],
            change_pct: percent_change(closes[n - 2], closes[n - 1]),
            up: self.summarize(Direction::Up, &streaks),
            down: self.summarize(Direction::Down, &streaks),
            current,
            projection,
        })
    }

    fn summarize(&self, dir: Direction, streaks: &StreakList) -> StreakSummary {
        let runs = streaks.runs(dir);
        StreakSummary {
            count: streaks.count(dir),
            longest: streaks.longest(dir),
            average: streaks.average(dir),
            distribution: StreakDistribution::from_runs(runs)
                .truncated(self.config.distribution_limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        // Low floor so short hand-written series are accepted
        Analyzer::new(StreakConfig::new(2, 10).unwrap())
    }

    #[test]
    fn test_full_pipeline() {
        let closes = [10.0, 11.0, 12.0, 11.0, 10.0, 9.0, 10.0];
        let report = analyzer().analyze(&closes).unwrap();

        assert_eq!(report.observations, 7);
        assert_eq!(report.last_close, 10.0);
        assert_eq!(report.prev_close, 9.0);
        assert!((report.change_pct - 100.0 / 9.0).abs() < 1e-9);

        assert_eq!(report.up.count, 2);
        assert_eq!(report.up.longest, 2);
        assert_eq!(report.up.average, 1.5);
        assert_eq!(report.down.count, 1);
        assert_eq!(report.down.longest, 3);

        assert_eq!(report.current.length, 1);
        assert_eq!(report.current.direction, Direction::Up);

        // Up runs [2, 1], open run at 1: both reached 1, one went on
        assert_eq!(report.projection.next.upside, 50.0);
        assert_eq!(report.projection.next.downside, 50.0);
    }

    #[test]
    fn test_pairs_are_complementary() {
        let closes = [
            50.0, 51.0, 50.5, 50.5, 52.0, 53.0, 51.0, 52.0, 52.5, 51.5, 51.0, 53.0,
        ];
        let report = analyzer().analyze(&closes).unwrap();
        let proj = report.projection;
        for pair in [proj.next, proj.if_next_up, proj.if_next_down] {
            assert!((pair.upside + pair.downside - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_min_observations_policy() {
        let analyzer = Analyzer::default();
        let closes = [10.0, 11.0, 12.0];
        let err = analyzer.analyze(&closes).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InsufficientData);
        assert!(err.is_data_err());
    }

    #[test]
    fn test_single_close_is_rejected() {
        let err = analyzer().analyze(&[42.0]).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InsufficientData);
    }

    #[test]
    fn test_malformed_input_fails_fast() {
        let closes = [10.0, f64::NAN, 11.0, 12.0];
        let err = analyzer().analyze(&closes).unwrap_err();
        assert_eq!(err.errcode, ErrCode::PriceNotFinite);
    }

    #[test]
    fn test_report_serializes() {
        let closes = [10.0, 11.0, 12.0, 11.0, 10.0, 9.0, 10.0];
        let report = analyzer().analyze(&closes).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["current"]["direction"], "Up");
        assert_eq!(json["projection"]["next"]["upside"], 50.0);
    }
}
