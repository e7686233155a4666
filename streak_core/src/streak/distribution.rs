use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::func_util::safe_percent;

/// One histogram row: how often runs of exactly this length occurred
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionBucket {
    pub length: usize,
    pub count: usize,
    /// Share of all runs in this direction, in percent
    pub share: f64,
}

/// Occurrence histogram of run lengths, ordered by length
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreakDistribution {
    pub buckets: Vec<DistributionBucket>,
}

impl StreakDistribution {
    pub fn from_runs(runs: &[usize]) -> Self {
        let mut counter: BTreeMap<usize, usize> = BTreeMap::new();
        for &len in runs {
            *counter.entry(len).or_insert(0) += 1;
        }

        let total = runs.len();
        let buckets = counter
            .into_iter()
            .map(|(length, count)| DistributionBucket {
                length,
                count,
                share: safe_percent(count, total),
            })
            .collect();

        Self { buckets }
    }

    /// Keep at most `limit` rows, shortest lengths first
    pub fn truncated(&self, limit: usize) -> Self {
        Self {
            buckets: self.buckets.iter().take(limit).cloned().collect(),
        }
    }
}
