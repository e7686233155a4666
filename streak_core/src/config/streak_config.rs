use crate::common::streak_exception::{ErrCode, StreakException};

/// Hard floor below which no current streak exists and nothing can be projected
pub const MIN_CLOSES_FOR_PROJECTION: usize = 2;

/// Streak analysis configuration
#[derive(Debug, Clone)]
pub struct StreakConfig {
    /// Minimum number of closes required before analysis runs
    pub min_observations: usize,

    /// Number of histogram rows kept per direction in the report
    pub distribution_limit: usize,
}

impl StreakConfig {
    pub fn new(
        min_observations: usize,
        distribution_limit: usize,
    ) -> Result<Self, StreakException> {
        if min_observations < MIN_CLOSES_FOR_PROJECTION {
            return Err(StreakException::new(
                format!(
                    "min_observations={} is below the projection floor of {}",
                    min_observations, MIN_CLOSES_FOR_PROJECTION
                ),
                ErrCode::ParaError,
            ));
        }

        Ok(Self {
            min_observations,
            distribution_limit,
        })
    }
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            min_observations: 10,
            distribution_limit: 10,
        }
    }
}
